//! Text encoding for reading input files and writing section files.
//!
//! Labels resolve through `encoding_rs` (WHATWG names and aliases). Decoding
//! and encoding are both strict: malformed input or unmappable characters are
//! errors, never silently replaced. A byte order mark for the chosen encoding
//! is dropped on input.

use crate::error::{Error, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};
use std::path::Path;

/// Resolve an encoding label such as `utf-8` or `latin1`.
///
/// # Errors
///
/// Returns [`Error::UnknownEncoding`] if the label is not recognised.
pub fn lookup(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Decode the bytes read from `path`.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `bytes` are malformed for `encoding`.
pub fn decode(encoding: &'static Encoding, bytes: &[u8], path: &Path) -> Result<String> {
    let bytes = match Encoding::for_bom(bytes) {
        Some((bom_encoding, bom_len)) if bom_encoding == encoding => &bytes[bom_len..],
        _ => bytes,
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| Error::Decode {
            path: path.to_path_buf(),
            encoding: encoding.name().to_string(),
        })
}

/// Encode `text` for writing to `path`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if `text` has characters `encoding` cannot
/// represent, or if `encoding` is decode-only (`replacement`,
/// `x-user-defined`).
pub fn encode(encoding: &'static Encoding, text: &str, path: &Path) -> Result<Vec<u8>> {
    let unencodable = || Error::Encode {
        path: path.to_path_buf(),
        encoding: encoding.name().to_string(),
    };
    // encoding_rs only encodes to output encodings; UTF-16 is done by hand.
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }
    if encoding.output_encoding() != encoding {
        return Err(unencodable());
    }
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(unencodable());
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
#[path = "tests/encoding.rs"]
mod tests;
