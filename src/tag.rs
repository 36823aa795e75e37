/// Value types produced and consumed by the tag scanner
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;

/// A tag parsed from a start marker. End markers carry the name only, so
/// `attributes` is always empty for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub attributes: HashMap<String, String>,
}

/// Which side of a tag pair a marker denotes: `<name ...>` or `</name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSide {
    Start,
    End,
}

/// A matched start/end pair. `range` is a half-open byte range into the
/// *output* string (not the input); both ends fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagOccurrence {
    pub tag: Tag,
    pub range: Range<usize>,
}

/// Caller-supplied rule replacing a tag marker with text in the output.
///
/// When the scanner meets a marker matching `(tag_name, side)` it appends
/// `transform(tag)` to the output instead of eliding the marker silently.
/// Among rules sharing a key, the first one registered wins.
pub struct TagTransformer {
    pub tag_name: String,
    pub side: TagSide,
    transform: Box<dyn Fn(&Tag) -> String + Send + Sync>,
}

impl TagTransformer {
    pub fn new(
        tag_name: impl Into<String>,
        side: TagSide,
        transform: impl Fn(&Tag) -> String + Send + Sync + 'static,
    ) -> Self {
        TagTransformer {
            tag_name: tag_name.into(),
            side,
            transform: Box::new(transform),
        }
    }

    /// Rule that replaces the marker with fixed text, ignoring attributes.
    pub fn replace(tag_name: impl Into<String>, side: TagSide, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(tag_name, side, move |_| value.clone())
    }

    /// The common void-element rule: `<br>` becomes a newline.
    pub fn br() -> Self {
        Self::replace("br", TagSide::Start, "\n")
    }

    pub fn matches(&self, name: &str, side: TagSide) -> bool {
        self.tag_name == name && self.side == side
    }

    pub fn apply(&self, tag: &Tag) -> String {
        (self.transform)(tag)
    }
}

impl fmt::Debug for TagTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagTransformer")
            .field("tag_name", &self.tag_name)
            .field("side", &self.side)
            .finish_non_exhaustive()
    }
}
