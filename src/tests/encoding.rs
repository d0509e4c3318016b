use super::{decode, encode, lookup};
use crate::error::Error;
use std::path::Path;

#[test]
fn test_lookup_labels() {
    assert_eq!(lookup("utf-8").unwrap().name(), "UTF-8");
    assert_eq!(lookup("UTF8").unwrap().name(), "UTF-8");
    assert_eq!(lookup("latin1").unwrap().name(), "windows-1252");
    assert_eq!(lookup(" shift_jis ").unwrap().name(), "Shift_JIS");
}

#[test]
fn test_unknown_label() {
    let err = lookup("klingon").unwrap_err();
    assert!(matches!(err, Error::UnknownEncoding(ref label) if label == "klingon"));
}

#[test]
fn test_decode_strict_utf8() {
    let utf8 = lookup("utf-8").unwrap();
    let path = Path::new("doc.md");
    assert_eq!(decode(utf8, "## Café\n".as_bytes(), path).unwrap(), "## Café\n");

    let err = decode(utf8, b"## Caf\xe9\n", path).unwrap_err();
    assert!(
        matches!(err, Error::Decode { ref path, .. } if path == Path::new("doc.md")),
        "malformed input must not be replaced: {err}"
    );
}

#[test]
fn test_decode_latin1() {
    let latin1 = lookup("latin1").unwrap();
    let text = decode(latin1, b"## Caf\xe9\n", Path::new("doc.md")).unwrap();
    assert_eq!(text, "## Café\n");
}

#[test]
fn test_encode_roundtrip_and_unmappable() {
    let latin1 = lookup("latin1").unwrap();
    let path = Path::new("01_cafe.md");
    assert_eq!(encode(latin1, "Café", path).unwrap(), b"Caf\xe9".to_vec());

    let err = encode(latin1, "done ✓", path).unwrap_err();
    assert!(matches!(err, Error::Encode { .. }));
}

#[test]
fn test_utf16le_round_trip() {
    let utf16le = lookup("utf-16le").unwrap();
    let path = Path::new("01_a.md");
    let bytes = encode(utf16le, "## A\n", path).unwrap();
    assert_eq!(bytes, vec![b'#', 0, b'#', 0, b' ', 0, b'A', 0, b'\n', 0]);
    assert_eq!(decode(utf16le, &bytes, path).unwrap(), "## A\n");
}

#[test]
fn test_utf16be_output() {
    let utf16be = lookup("utf-16be").unwrap();
    let bytes = encode(utf16be, "é", Path::new("x.md")).unwrap();
    assert_eq!(bytes, vec![0x00, 0xE9]);
}

#[test]
fn test_decode_only_encoding_cannot_encode() {
    let user_defined = lookup("x-user-defined").unwrap();
    let err = encode(user_defined, "## A\n", Path::new("x.md")).unwrap_err();
    assert!(matches!(err, Error::Encode { .. }));
}

#[test]
fn test_decode_strips_matching_bom() {
    let utf8 = lookup("utf-8").unwrap();
    let path = Path::new("doc.md");
    assert_eq!(decode(utf8, b"\xef\xbb\xbf## Bom\n", path).unwrap(), "## Bom\n");

    let utf16le = lookup("utf-16le").unwrap();
    assert_eq!(decode(utf16le, b"\xff\xfe#\0\n\0", path).unwrap(), "#\n");
}

#[test]
fn test_bom_removal_keeps_first_heading() {
    let utf8 = lookup("utf-8").unwrap();
    let text = decode(utf8, b"\xef\xbb\xbf## Bom\nx\n## C\n", Path::new("doc.md")).unwrap();
    let sections = crate::split::split(&text, 2, None, None).unwrap();
    let titles: Vec<Option<&str>> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec![Some("Bom"), Some("C")]);
}
