use rstest::rstest;
use tagscan::DataKind;
use tagscan::detect::{detect, detect_data, detect_hashtags, detect_mentions};

#[test]
fn hashtags_in_original_string_coordinates() {
    let text = "#hello world #rust!";
    let ranges = detect_hashtags(text);
    assert_eq!(ranges, vec![0..6, 13..18]);
    assert_eq!(&text[ranges[1].clone()], "#rust");
}

#[test]
fn mentions() {
    let text = "@a and @b";
    assert_eq!(detect_mentions(text), vec![0..2, 7..9]);
}

#[rstest]
#[case(r"\d+", "a1b22", vec![1..2, 3..5])]
#[case(r"x+", "no match here", vec![])]
fn custom_patterns(
    #[case] pattern: &str,
    #[case] text: &str,
    #[case] expected: Vec<std::ops::Range<usize>>,
) {
    assert_eq!(detect(text, pattern), expected);
}

#[test]
fn invalid_pattern_matches_nothing() {
    assert!(detect("anything", "(").is_empty());
}

#[rstest]
#[case(DataKind::Url, "see https://example.com now", "https://example.com")]
#[case(DataKind::Email, "mail me@example.com!", "me@example.com")]
#[case(DataKind::PhoneNumber, "call +1 (555) 123-4567 today", "+1 (555) 123-4567")]
fn builtin_detectors(#[case] kind: DataKind, #[case] text: &str, #[case] expected: &str) {
    let ranges = detect_data(text, kind);
    assert_eq!(ranges.len(), 1);
    assert_eq!(&text[ranges[0].clone()], expected);
}
