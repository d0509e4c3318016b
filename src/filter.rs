//! Level-1 heading filters.
//!
//! Some documents use `#` for things that are not really chapters (notes,
//! asides, pasted shell comments). A filter narrows which level-1 headings
//! count as headings at all; the rest are plain content.

use crate::error::SplitError;
use regex::Regex;
use std::collections::BTreeSet;

/// Rule deciding whether a level-1 heading is a genuine heading.
#[derive(Debug, Clone, Default)]
pub enum HeadingFilter {
    /// Every level-1 heading is accepted.
    #[default]
    All,
    /// Accept headings whose text starts with one of these prefixes.
    Prefixes(BTreeSet<String>),
    /// Accept headings whose text matches this pattern at its start.
    Pattern(Regex),
}

impl HeadingFilter {
    /// Build a filter from the two optional, mutually exclusive settings.
    ///
    /// An empty prefix set counts as not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::ConfigurationConflict`] if both settings are given,
    /// or [`SplitError::Pattern`] if the pattern does not compile.
    pub fn from_parts(
        prefixes: Option<&BTreeSet<String>>,
        pattern: Option<&str>,
    ) -> Result<Self, SplitError> {
        let prefixes = prefixes.filter(|set| !set.is_empty());
        match (prefixes, pattern) {
            (Some(_), Some(_)) => Err(SplitError::ConfigurationConflict),
            (Some(set), None) => Ok(Self::Prefixes(set.clone())),
            (None, Some(pattern)) => Regex::new(pattern)
                .map(Self::Pattern)
                .map_err(|source| SplitError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                }),
            (None, None) => Ok(Self::All),
        }
    }

    /// Whether a level-1 heading with this (trimmed) text is accepted.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::All => true,
            Self::Prefixes(prefixes) => prefixes.iter().any(|p| text.starts_with(p.as_str())),
            // The leftmost match starts at 0 whenever any match does.
            Self::Pattern(re) => re.find(text).is_some_and(|m| m.start() == 0),
        }
    }
}

#[cfg(test)]
#[path = "tests/filter.rs"]
mod tests;
