//! Markdown format implementation.
//!
//! Recognises ATX-style headings (# syntax) and fenced code blocks delimited
//! by runs of backticks or tildes. A heading marker must start the line;
//! fences may be indented by up to three spaces, as in `CommonMark`.

use crate::formats::{Fence, Format, Heading};

/// Deepest ATX heading level.
pub const MAX_LEVEL: usize = 6;

const MIN_FENCE_LEN: usize = 3;
const MAX_INDENT: usize = 3;

/// Line rules for ATX headings and backtick/tilde fences.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn heading<'a>(&self, line: &'a str) -> Option<Heading<'a>> {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if level == 0 || level > MAX_LEVEL {
            return None;
        }
        let after = &line[level..];
        // The marker must be followed by whitespace or end the line.
        if !after.is_empty() && !after.starts_with(char::is_whitespace) {
            return None;
        }
        Some(Heading {
            level,
            text: after.trim(),
        })
    }

    fn fence_open(&self, line: &str) -> Option<Fence> {
        let rest = strip_indent(line)?;
        let marker = rest.chars().next().filter(|&c| matches!(c, '`' | '~'))?;
        let len = rest.chars().take_while(|&c| c == marker).count();
        if len < MIN_FENCE_LEN {
            return None;
        }
        // Backtick info strings may not contain backticks.
        if marker == '`' && rest[len..].contains('`') {
            return None;
        }
        Some(Fence { marker, len })
    }

    fn fence_close(&self, fence: Fence, line: &str) -> bool {
        let Some(rest) = strip_indent(line) else {
            return false;
        };
        let len = rest.chars().take_while(|&c| c == fence.marker).count();
        len >= fence.len && rest[len * fence.marker.len_utf8()..].trim().is_empty()
    }
}

/// Strip up to three leading spaces; `None` if the line is indented further.
fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.bytes().take_while(|&b| b == b' ').count();
    (indent <= MAX_INDENT).then(|| &line[indent..])
}

#[cfg(test)]
#[path = "../tests/markdown.rs"]
mod tests;
