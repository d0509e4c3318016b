//! mdsplit: split a markdown document into sections at a heading level.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdsplit::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = cli::run(cli::Args::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
