/// Single-pass tag scanner
///
/// Walks the input once, copying plain text to an output buffer, decoding
/// `&name;` entity references, and eliding `<name ...>` / `</name>` markers
/// (or appending a transformer's replacement text in their place). Matched
/// start/end pairs are reported with byte ranges into the output string.
use crate::entities;
use crate::tag::{Tag, TagOccurrence, TagSide, TagTransformer};
use std::collections::HashMap;

pub struct TagScanner<'a> {
    transformers: &'a [TagTransformer],
}

impl<'a> TagScanner<'a> {
    pub fn new(transformers: &'a [TagTransformer]) -> Self {
        TagScanner { transformers }
    }

    /// Scan `input` once and return the plain output string together with
    /// every matched tag pair. Never fails: malformed markup is dropped and
    /// the scan continues.
    pub fn scan(&self, input: &str) -> (String, Vec<TagOccurrence>) {
        let chars: Vec<char> = input.chars().collect();
        let mut output = String::with_capacity(input.len());
        let mut result = Vec::new();
        // Open, not-yet-closed start tags with the output position at open
        let mut stack: Vec<(Tag, usize)> = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                '<' => i = self.scan_tag_marker(&chars, i, &mut output, &mut result, &mut stack),
                '&' => i = scan_entity(&chars, i, &mut output),
                _ => {
                    // Longest run of plain text, copied verbatim
                    let start = i;
                    while i < chars.len() && chars[i] != '<' && chars[i] != '&' {
                        i += 1;
                    }
                    output.extend(&chars[start..i]);
                }
            }
        }

        (output, result)
    }

    /// Handle one `<...>` marker starting at `start` (pointing at the `<`).
    /// Returns the index of the first unconsumed character.
    fn scan_tag_marker(
        &self,
        chars: &[char],
        start: usize,
        output: &mut String,
        result: &mut Vec<TagOccurrence>,
        stack: &mut Vec<(Tag, usize)>,
    ) -> usize {
        let mut i = start + 1;
        let side = if i < chars.len() && chars[i] == '/' {
            i += 1;
            TagSide::End
        } else {
            TagSide::Start
        };

        // Raw interior, up to but not including the '>'
        let raw_start = i;
        while i < chars.len() && chars[i] != '>' {
            i += 1;
        }

        if let Some(tag) = parse_tag(&chars[raw_start..i], side == TagSide::Start) {
            // Output position before any replacement text for this marker
            let marker_pos = output.len();

            // First registered rule for (name, side) wins
            if let Some(transformer) = self
                .transformers
                .iter()
                .find(|t| t.matches(&tag.name, side))
            {
                output.push_str(&transformer.apply(&tag));
            }

            match side {
                TagSide::Start => stack.push((tag, marker_pos)),
                TagSide::End => {
                    // Close the nearest same-named open tag. Anything opened
                    // after it is orphaned: dropped without an occurrence and
                    // never matched by a later end tag.
                    if let Some(depth) = stack.iter().rposition(|(open, _)| open.name == tag.name) {
                        let (open_tag, open_pos) = stack[depth].clone();
                        result.push(TagOccurrence {
                            tag: open_tag,
                            range: open_pos..marker_pos,
                        });
                        stack.truncate(depth);
                    }
                    // No match anywhere: the end marker is ignored
                }
            }
        }

        // Consume the '>' if the marker was terminated
        if i < chars.len() {
            i += 1;
        }
        i
    }
}

/// Parse the raw interior of a marker into a tag. The leading `/` of an end
/// marker has already been stripped; `parse_attributes` is false for end
/// markers, which carry the name only.
fn parse_tag(raw: &[char], parse_attributes: bool) -> Option<Tag> {
    // Tag name: maximal alphanumeric run at the very start
    let mut i = 0;
    while i < raw.len() && raw[i].is_alphanumeric() {
        i += 1;
    }
    if i == 0 {
        return None;
    }
    let name: String = raw[..i].iter().collect();

    let mut attributes = HashMap::new();
    while parse_attributes && i < raw.len() {
        while i < raw.len() && raw[i].is_whitespace() {
            i += 1;
        }

        // Attribute name runs up to the '='
        let name_start = i;
        while i < raw.len() && raw[i] != '=' {
            i += 1;
        }
        if i == name_start || i == raw.len() {
            break;
        }
        let attr_name: String = raw[name_start..i].iter().collect();
        i += 1; // '='

        while i < raw.len() && raw[i].is_whitespace() {
            i += 1;
        }
        if i == raw.len() || raw[i] != '"' {
            break;
        }
        i += 1;

        // Raw value up to the closing quote; an unterminated value discards
        // the whole partial attribute
        let value_start = i;
        while i < raw.len() && raw[i] != '"' {
            i += 1;
        }
        if i == raw.len() {
            break;
        }
        let value: String = raw[value_start..i].iter().collect();
        i += 1;

        // Only this one escaped form is normalized inside attribute values
        attributes.insert(attr_name, value.replace("&quot;", "\""));
    }

    Some(Tag { name, attributes })
}

/// Handle one `&...;` reference starting at `start` (pointing at the `&`).
/// Unknown names vanish along with their delimiters; a missing `;` at end of
/// input is tolerated.
fn scan_entity(chars: &[char], start: usize, output: &mut String) -> usize {
    let mut i = start + 1;
    let name_start = i;
    while i < chars.len() && chars[i] != ';' {
        i += 1;
    }

    let name: String = chars[name_start..i].iter().collect();
    if let Some(decoded) = entities::lookup(&name) {
        output.push(decoded);
    }

    if i < chars.len() {
        i += 1; // ';'
    }
    i
}
