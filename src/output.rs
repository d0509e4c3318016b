//! Rendering split results: the summary table, JSON, and one file per section.

use crate::encoding;
use crate::error::{Error, Result};
use crate::section::{Section, Title};
use encoding_rs::Encoding;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Longest slug used in a section file name, in characters.
pub const MAX_SLUG_LEN: usize = 40;

const UNTITLED_SLUG: &str = "untitled";
const TITLE_WIDTH: usize = 30;

/// File-name-safe form of a section title.
///
/// Lowercases the title and collapses each run of non-alphanumeric characters
/// into one `_`. Untitled sections, and titles with nothing alphanumeric,
/// become `untitled`.
#[must_use]
pub fn slugify(title: &Title) -> String {
    let Some(text) = title.as_str() else {
        return UNTITLED_SLUG.to_string();
    };
    let mut slug = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if gap && !slug.is_empty() {
                slug.push('_');
            }
            slug.push(c);
            gap = false;
        } else {
            gap = true;
        }
    }
    let slug: String = slug.chars().take(MAX_SLUG_LEN).collect();
    let slug = slug.trim_end_matches('_');
    if slug.is_empty() {
        UNTITLED_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// File name for the `index`-th (1-based) of `total` sections.
#[must_use]
pub fn file_name(index: usize, total: usize, title: &Title) -> String {
    let width = total.to_string().len().max(2);
    format!("{index:0width$}_{}.md", slugify(title))
}

/// Fixed-width table with one row per section.
#[must_use]
pub fn summary(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "No sections found.\n".to_string();
    }
    let mut out = String::new();
    let header = format!("{:>3}  {:>3}  {:<TITLE_WIDTH$}  {:>5}", "Idx", "Lvl", "Title", "Lines");
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.len()));
    for (index, section) in sections.iter().enumerate() {
        let level = section
            .level
            .map_or_else(|| "-".to_string(), |level| level.to_string());
        let title = match &section.title {
            Title::Untitled => "(untitled)".to_string(),
            Title::Titled(text) => text.chars().take(TITLE_WIDTH).collect(),
        };
        let _ = writeln!(
            out,
            "{:>3}  {level:>3}  {title:<TITLE_WIDTH$}  {:>5}",
            index + 1,
            section.line_count()
        );
    }
    out
}

/// Sections as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialisation fails.
pub fn to_json(sections: &[Section]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sections)?)
}

/// Write each section to its own file in `dir`, creating `dir` if needed.
///
/// Every file is encoded before anything touches the filesystem, so an
/// encoding failure leaves no directory or partial output behind.
///
/// # Errors
///
/// Returns [`Error::Encode`] for unmappable characters, [`Error::CreateDir`]
/// if the directory cannot be created, or [`Error::Write`] if a file cannot
/// be written.
pub fn write_sections(
    sections: &[Section],
    dir: &Path,
    encoding: &'static Encoding,
) -> Result<Vec<PathBuf>> {
    let total = sections.len();
    let files = sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let path = dir.join(file_name(index + 1, total, &section.title));
            let bytes = encoding::encode(encoding, &section.content, &path)?;
            Ok((path, bytes))
        })
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for (path, bytes) in files {
        fs::write(&path, bytes).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote section");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "tests/output.rs"]
mod tests;
