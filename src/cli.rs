//! Command-line interface: argument parsing and the split-and-report driver.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::demo::{self, DEMO_DOCUMENT};
use crate::encoding;
use crate::error::{Error, Result};
use crate::output;
use crate::section::Section;
use crate::split::split;

#[derive(Parser, Debug)]
#[command(name = "mdsplit")]
#[command(version, about = "Split a markdown document into sections at a heading level", long_about = None)]
/// Command-line arguments.
pub struct Args {
    /// Markdown file to split (runs a demonstration when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Heading level that opens a section, 1-6 [default: 2]
    #[arg(long)]
    pub level: Option<usize>,

    /// Encoding of the input file and the section files [default: utf-8]
    #[arg(long)]
    pub encoding: Option<String>,

    /// Write each section to its own file in this directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Only treat level-1 headings starting with this prefix as headings (repeatable)
    #[arg(long = "h1-prefix", value_name = "PREFIX", conflicts_with = "h1_regex")]
    pub h1_prefix: Vec<String>,

    /// Only treat level-1 headings matching this regex at their start as headings
    #[arg(long = "h1-regex", value_name = "REGEX")]
    pub h1_regex: Option<String>,

    /// Print the sections as JSON instead of a summary table
    #[arg(long)]
    pub json: bool,
}

/// Split settings after merging command-line flags over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Heading level that opens a section.
    pub level: usize,
    /// Encoding label for input and output files.
    pub encoding: String,
    /// Level-1 heading prefixes (empty when not filtering by prefix).
    pub h1_prefixes: BTreeSet<String>,
    /// Level-1 heading pattern.
    pub h1_regex: Option<String>,
}

impl Settings {
    /// Merge `args` over `cfg`. Prefixes from the config only apply when
    /// neither level-1 filter flag is given.
    #[must_use]
    pub fn resolve(args: &Args, cfg: Config) -> Self {
        let h1_prefixes = if args.h1_prefix.is_empty() && args.h1_regex.is_none() {
            cfg.h1_prefixes
        } else {
            args.h1_prefix.clone()
        };
        Self {
            level: args.level.unwrap_or(cfg.level),
            encoding: args.encoding.clone().unwrap_or(cfg.encoding),
            h1_prefixes: h1_prefixes.into_iter().collect(),
            h1_regex: args.h1_regex.clone(),
        }
    }

    fn split(&self, text: &str) -> Result<Vec<Section>> {
        Ok(split(
            text,
            self.level,
            Some(&self.h1_prefixes),
            self.h1_regex.as_deref(),
        )?)
    }
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if splitting is rejected, the input cannot be read or
/// decoded, or the section files cannot be written.
pub fn run(args: Args) -> Result<()> {
    let settings = Settings::resolve(&args, Config::load());
    debug!(?settings, "resolved settings");

    let Some(input) = args.input else {
        return run_demo(&settings, args.json);
    };

    let encoding = encoding::lookup(&settings.encoding)?;
    let bytes = fs::read(&input).map_err(|source| Error::Read {
        path: input.clone(),
        source,
    })?;
    let text = encoding::decode(encoding, &bytes, &input)?;
    let sections = settings.split(&text)?;
    info!(path = %input.display(), sections = sections.len(), "split input");

    if let Some(dir) = args.output_dir {
        let written = output::write_sections(&sections, &dir, encoding)?;
        println!("Wrote {} sections to {}", written.len(), dir.display());
    } else if args.json {
        println!("{}", output::to_json(&sections)?);
    } else {
        print!("{}", output::summary(&sections));
    }
    Ok(())
}

/// Split the built-in document and print what came out.
fn run_demo(settings: &Settings, json: bool) -> Result<()> {
    let sections = settings.split(DEMO_DOCUMENT)?;
    if json {
        println!("{}", output::to_json(&sections)?);
        return Ok(());
    }
    println!("Demonstration (level {}):", settings.level);
    println!();
    print!("{}", output::summary(&sections));
    println!();
    print!("{}", demo::details(&sections));
    println!("Pass a markdown file path to split your own document.");
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
