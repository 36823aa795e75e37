/// Inline pseudo-HTML tag detection: strip or rewrite tag markers, decode
/// character entities, and report each matched tag's range in the output.
pub mod detect;
pub mod entities;
pub mod scanner;
pub mod tag;

pub use detect::DataKind;
pub use scanner::TagScanner;
pub use tag::{Tag, TagOccurrence, TagSide, TagTransformer};

/// Scan `input` once and return the plain output string plus every matched
/// tag pair, with ranges expressed in the output string's coordinates.
pub fn detect_tags(input: &str, transformers: &[TagTransformer]) -> (String, Vec<TagOccurrence>) {
    TagScanner::new(transformers).scan(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let (output, tags) = detect_tags("no markup here", &[]);
        assert_eq!(output, "no markup here");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_basic_pair() {
        let (output, tags) = detect_tags("<b>hi</b>", &[]);
        assert_eq!(output, "hi");
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag.name, "b");
        assert_eq!(tags[0].range, 0..2);
    }

    #[test]
    fn test_entities_decode() {
        let (output, tags) = detect_tags("5 &lt; 6 &amp; true", &[]);
        assert_eq!(output, "5 < 6 & true");
        assert!(tags.is_empty());
    }

    #[test]
    fn test_br_transformer() {
        let (output, tags) = detect_tags("line1<br>line2", &[TagTransformer::br()]);
        assert_eq!(output, "line1\nline2");
        assert!(tags.is_empty());
    }
}
