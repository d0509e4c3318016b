//! Section representation for split markdown documents.
//!
//! A section is a contiguous run of lines that starts at a boundary heading
//! (or at the top of the document, for the leading untitled section) and runs
//! up to the line before the next boundary heading. Sections keep the exact
//! source text along with 1-based line and byte coordinates, so the output of
//! one split always reassembles into the input.

use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Title of a section: either the text of its opening heading or the
/// synthetic leading section that precedes every boundary heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Title {
    /// Content that precedes the first boundary heading.
    Untitled,
    /// Trimmed text of the heading that opened the section (may be empty).
    Titled(String),
}

impl Title {
    /// The heading text, or `None` for the untitled section.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Untitled => None,
            Self::Titled(text) => Some(text),
        }
    }

    /// Whether this is the synthetic leading section.
    #[must_use]
    pub fn is_untitled(&self) -> bool {
        matches!(self, Self::Untitled)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untitled => f.write_str("no title"),
            Self::Titled(text) => f.write_str(text),
        }
    }
}

// Serialised as a plain string, or null for the untitled section.
impl Serialize for Title {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Untitled => serializer.serialize_none(),
            Self::Titled(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
/// Contiguous slice of a document opened by a boundary heading.
pub struct Section {
    /// Heading text of the opening line, or [`Title::Untitled`].
    pub title: Title,
    /// Level of the boundary heading (1-6), `None` for the untitled section.
    pub level: Option<usize>,
    /// Exact source text of the section, line terminators included.
    pub content: String,
    /// First line of the section (1-based, inclusive).
    pub start_line: usize,
    /// Last line of the section (1-based, inclusive).
    pub end_line: usize,
    /// Byte offset where the section begins in the source text.
    pub byte_start: usize,
    /// Byte offset where the section ends in the source text (exclusive).
    pub byte_end: usize,
}

impl Section {
    /// Number of source lines covered by the section.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.end_line + 1 - self.start_line
    }
}
