//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdsplit.toml, and if present we load settings from there.
//! This provides the default split level, text encoding and level-1 heading prefixes.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File looked up in the working directory.
pub const CONFIG_FILE: &str = "mdsplit.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from mdsplit.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2)]
    /// Heading level to split at when `--level` is not given.
    pub level: usize,
    #[facet(default = "utf-8".to_string())]
    /// Encoding label for reading input and writing section files.
    pub encoding: String,
    #[facet(default = Vec::new())]
    /// Level-1 heading prefixes applied when no filter flag is given.
    pub h1_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: 2,
            encoding: "utf-8".to_string(),
            h1_prefixes: Vec::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdsplit.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is
    /// missing or does not parse.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), "ignoring unparsable configuration: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
