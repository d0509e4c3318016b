//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over the line-level
//! syntax of a document format: which lines are headings, and which lines open
//! or close a verbatim block inside which heading syntax is inert.

pub mod markdown;

/// A heading line recognised by a [`Format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Nesting depth of the heading (1 for top-level).
    pub level: usize,
    /// Heading text with surrounding whitespace trimmed.
    pub text: &'a str,
}

/// Delimiter that opened a verbatim block, kept to match the closing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fence {
    /// Character the delimiter is made of.
    pub marker: char,
    /// Number of marker characters in the opening delimiter.
    pub len: usize,
}

/// Line classification rules for a document format.
///
/// Lines are passed without their terminator.
pub trait Format {
    /// Classify `line` as a heading, if it is one.
    fn heading<'a>(&self, line: &'a str) -> Option<Heading<'a>>;
    /// Return the delimiter if `line` opens a verbatim block.
    fn fence_open(&self, line: &str) -> Option<Fence>;
    /// Whether `line` closes the block opened by `fence`.
    fn fence_close(&self, fence: Fence, line: &str) -> bool;
}
