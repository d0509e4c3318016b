//! Partition a document into sections at one heading level.
//!
//! The splitter makes a single pass over the lines of the document, tracking
//! whether it is inside a fenced block, and records every heading at the
//! requested level as a boundary. Sections then run from one boundary to the
//! line before the next. Content before the first boundary becomes a leading
//! untitled section, and a document with no boundaries is one untitled section.
//!
//! Every line keeps its own terminator, so the sections' `content` strings
//! concatenate back into the input exactly.

use crate::error::SplitError;
use crate::filter::HeadingFilter;
use crate::formats::markdown::{MarkdownFormat, MAX_LEVEL};
use crate::formats::{Fence, Format};
use crate::section::{Section, Title};
use std::collections::BTreeSet;
use tracing::debug;

/// Validated settings for a split: the boundary level and the level-1 filter.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    level: usize,
    filter: HeadingFilter,
}

impl SplitOptions {
    /// Split at `level`, accepting every level-1 heading.
    ///
    /// # Errors
    ///
    /// Returns [`SplitError::InvalidLevel`] if `level` is not in 1..=6.
    pub fn new(level: usize) -> Result<Self, SplitError> {
        if !(1..=MAX_LEVEL).contains(&level) {
            return Err(SplitError::InvalidLevel { level });
        }
        Ok(Self {
            level,
            filter: HeadingFilter::All,
        })
    }

    #[must_use]
    /// Replace the level-1 heading filter.
    pub fn with_filter(mut self, filter: HeadingFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Heading level that opens a section.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Filter applied to level-1 headings.
    #[must_use]
    pub fn filter(&self) -> &HeadingFilter {
        &self.filter
    }
}

/// Split markdown `text` into sections at heading `level`.
///
/// `heading1_prefixes` and `heading1_pattern` restrict which level-1 headings
/// are treated as headings at all, whatever the split level.
///
/// # Errors
///
/// Fails before scanning any line if `level` is outside 1..=6, if both level-1
/// filters are supplied, or if `heading1_pattern` is not a valid regex.
pub fn split(
    text: &str,
    level: usize,
    heading1_prefixes: Option<&BTreeSet<String>>,
    heading1_pattern: Option<&str>,
) -> Result<Vec<Section>, SplitError> {
    let options = SplitOptions::new(level)?
        .with_filter(HeadingFilter::from_parts(heading1_prefixes, heading1_pattern)?);
    Ok(split_with(&MarkdownFormat, text, &options))
}

/// A source line: its text without terminator plus its byte span with it.
struct Line<'a> {
    body: &'a str,
    start: usize,
    end: usize,
}

/// Split `text` on `\n`, `\r\n` or a lone `\r`, keeping byte spans.
fn split_lines(text: &str) -> Vec<Line<'_>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        let body_end = i;
        match bytes[i] {
            b'\n' => i += 1,
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => i += 2,
            b'\r' => i += 1,
            _ => {
                i += 1;
                continue;
            }
        }
        lines.push(Line {
            body: &text[start..body_end],
            start,
            end: i,
        });
        start = i;
    }
    if start < bytes.len() {
        lines.push(Line {
            body: &text[start..],
            start,
            end: bytes.len(),
        });
    }
    lines
}

/// Split `text` using the line rules of `format`.
///
/// Options are already validated, so this cannot fail.
pub fn split_with<F: Format + ?Sized>(
    format: &F,
    text: &str,
    options: &SplitOptions,
) -> Vec<Section> {
    let lines = split_lines(text);

    // (line index, heading text) of each boundary heading.
    let mut boundaries: Vec<(usize, &str)> = Vec::new();
    let mut fence: Option<Fence> = None;

    for (index, line) in lines.iter().enumerate() {
        if let Some(open) = fence {
            if format.fence_close(open, line.body) {
                fence = None;
            }
            continue;
        }
        if let Some(open) = format.fence_open(line.body) {
            fence = Some(open);
            continue;
        }
        let Some(heading) = format.heading(line.body) else {
            continue;
        };
        if heading.level == 1 && !options.filter.accepts(heading.text) {
            continue;
        }
        if heading.level == options.level {
            boundaries.push((index, heading.text));
        }
    }

    let build = |title: Title, level: Option<usize>, start: usize, end: usize| {
        let byte_start = lines[start].start;
        let byte_end = lines[end - 1].end;
        Section {
            title,
            level,
            content: text[byte_start..byte_end].to_string(),
            start_line: start + 1,
            end_line: end,
            byte_start,
            byte_end,
        }
    };

    let mut sections = Vec::with_capacity(boundaries.len() + 1);
    let first = boundaries.first().map_or(lines.len(), |&(index, _)| index);
    if first > 0 {
        sections.push(build(Title::Untitled, None, 0, first));
    }
    for (i, &(start, heading)) in boundaries.iter().enumerate() {
        let end = boundaries.get(i + 1).map_or(lines.len(), |&(next, _)| next);
        sections.push(build(
            Title::Titled(heading.to_string()),
            Some(options.level),
            start,
            end,
        ));
    }

    debug!(
        lines = lines.len(),
        level = options.level,
        boundaries = boundaries.len(),
        sections = sections.len(),
        "split document"
    );
    sections
}

#[cfg(test)]
#[path = "tests/split.rs"]
mod tests;
