//! Built-in document shown when the CLI is run without an input file.

use crate::section::Section;
use std::fmt::Write;

/// Sample document exercising leading content, nested headings and a fence.
pub const DEMO_DOCUMENT: &str = "\
# Chapter 1: Introduction
Content before the first level-2 heading lands in an untitled section.

## Chapter 2: Overview
Body text of a section at the split level.
### Chapter 2.1: Details
Headings deeper than the split level stay inside the current section.

```markdown
## Not a heading, this line is inside a code fence
```

## Chapter 3: Closing
A short closing paragraph.
";

/// Line range and verbatim content of each section.
#[must_use]
pub fn details(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        let level = section
            .level
            .map_or_else(|| "-".to_string(), |level| level.to_string());
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "Title: {}, level: {level}, lines {}-{}",
            section.title, section.start_line, section.end_line
        );
        out.push_str(&section.content);
        if !section.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "tests/demo.rs"]
mod tests;
