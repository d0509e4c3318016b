use super::{Error, SplitError};
use std::path::PathBuf;

#[test]
fn test_invalid_level_display() {
    let err = SplitError::InvalidLevel { level: 7 };
    assert!(err.to_string().contains('7'));
    assert!(err.to_string().contains("between 1 and 6"));
}

#[test]
fn test_pattern_error_names_pattern() {
    let source = regex::Regex::new("(unclosed").unwrap_err();
    let err = SplitError::Pattern {
        pattern: "(unclosed".to_string(),
        source,
    };
    assert!(
        err.to_string().contains("'(unclosed'"),
        "message should quote the pattern: {err}"
    );
}

#[test]
fn test_split_error_is_transparent() {
    let err = Error::from(SplitError::ConfigurationConflict);
    assert_eq!(
        err.to_string(),
        SplitError::ConfigurationConflict.to_string()
    );
}

#[test]
fn test_io_errors_name_path() {
    let err = Error::Read {
        path: PathBuf::from("missing.md"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.to_string(), "failed to read missing.md: not found");

    let err = Error::Decode {
        path: PathBuf::from("latin.md"),
        encoding: "UTF-8".to_string(),
    };
    assert_eq!(err.to_string(), "latin.md is not valid UTF-8");
}
