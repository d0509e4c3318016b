use super::{details, DEMO_DOCUMENT};
use crate::split::split;

#[test]
fn test_demo_splits_at_level_two() {
    let sections = split(DEMO_DOCUMENT, 2, None, None).unwrap();
    let titles: Vec<Option<&str>> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![None, Some("Chapter 2: Overview"), Some("Chapter 3: Closing")]
    );
    assert!(
        sections[1].content.contains("## Not a heading"),
        "fenced heading stays in the overview section"
    );
}

#[test]
fn test_details_lists_ranges_and_content() {
    let sections = split(DEMO_DOCUMENT, 2, None, None).unwrap();
    let text = details(&sections);
    assert!(text.contains("Title: no title, level: -, lines 1-3"));
    assert!(text.contains("Title: Chapter 3: Closing, level: 2, lines 13-14"));
    assert!(text.contains("A short closing paragraph."));
}
