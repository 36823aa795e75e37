/// Pattern-based range detection
///
/// Thin boundary over the `regex` crate, independent of the tag scanner.
/// All ranges are byte ranges into the string that was searched.
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static HASHTAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#]\w\S*\b").expect("hashtag pattern"));

static MENTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[@]\w\S*\b").expect("mention pattern"));

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(https?|ftp)://[^\s<>\[\]()\\'"`]+"#).expect("url pattern")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d[\d\s().-]{6,}\d").expect("phone pattern")
});

/// Built-in data detectors, the fixed-pattern counterpart of `detect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Url,
    Email,
    PhoneNumber,
}

/// Ranges of all matches of `pattern` in `text`. A pattern that fails to
/// compile matches nothing.
pub fn detect(text: &str, pattern: &str) -> Vec<Range<usize>> {
    match Regex::new(pattern) {
        Ok(re) => ranges_of(&re, text),
        Err(_) => Vec::new(),
    }
}

/// Ranges of all matches of a built-in detector in `text`.
pub fn detect_data(text: &str, kind: DataKind) -> Vec<Range<usize>> {
    let re = match kind {
        DataKind::Url => &URL_PATTERN,
        DataKind::Email => &EMAIL_PATTERN,
        DataKind::PhoneNumber => &PHONE_PATTERN,
    };
    ranges_of(re, text)
}

pub fn detect_hashtags(text: &str) -> Vec<Range<usize>> {
    ranges_of(&HASHTAG_PATTERN, text)
}

pub fn detect_mentions(text: &str) -> Vec<Range<usize>> {
    ranges_of(&MENTION_PATTERN, text)
}

fn ranges_of(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.range()).collect()
}
