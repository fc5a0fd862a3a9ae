use std::ops::Range;
use std::str::Chars;

use regex::Regex;
use tracing::debug;

use crate::errors::ExtractError;
use crate::scanner::scan_blocks;

const STRING_LITERAL: &str = r#""((?:[^"\\]|\\.)*)""#;

/// Kind of value a field holds in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Double-quoted string literal.
    Text,
    /// Bare `null` or a double-quoted string literal.
    NullableText,
    /// Unsigned integer literal.
    Unsigned,
    /// Decimal literal such as `0.045`.
    Decimal,
}

impl FieldKind {
    fn value_pattern(self) -> String {
        match self {
            FieldKind::Text => STRING_LITERAL.to_string(),
            FieldKind::NullableText => format!("(?:(null)\\b|{STRING_LITERAL})"),
            FieldKind::Unsigned => r"(\d+)".to_string(),
            FieldKind::Decimal => r"(\d+(?:\.\d*)?|\.\d+)".to_string(),
        }
    }
}

/// A value captured from a block.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Null,
    Unsigned(u64),
    Decimal(f64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Text as `Some`, `null` as `None`; other kinds are not text.
    pub fn as_nullable_str(&self) -> Option<Option<&str>> {
        match self {
            FieldValue::Text(value) => Some(Some(value)),
            FieldValue::Null => Some(None),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::Unsigned(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Unsigned(value) => Some(*value as f64),
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
struct FieldMatcher {
    name: String,
    kind: FieldKind,
    regex: Regex,
}

/// Ordered list of fields a block must contain.
///
/// Fields must appear in the listed order; arbitrary text may sit between
/// them. Unlisted fields in the block are ignored.
#[derive(Debug, Clone)]
pub struct BlockPattern {
    fields: Vec<FieldMatcher>,
}

impl BlockPattern {
    pub fn new(fields: &[(&str, FieldKind)]) -> Result<Self, ExtractError> {
        if fields.is_empty() {
            return Err(ExtractError::EmptyPattern);
        }

        let fields = fields
            .iter()
            .map(|&(name, kind)| {
                let source = format!(r"\b{}\s*:\s*{}", regex::escape(name), kind.value_pattern());
                Regex::new(&source)
                    .map(|regex| FieldMatcher {
                        name: name.to_string(),
                        kind,
                        regex,
                    })
                    .map_err(|source| ExtractError::Pattern {
                        field: name.to_string(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields })
    }

    /// Match one block body; `None` when a field is missing or out of order.
    pub fn match_block(&self, block: &str) -> Option<Vec<(String, FieldValue)>> {
        let mut cursor = 0;
        let mut values = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let caps = field.regex.captures_at(block, cursor)?;
            cursor = caps.get(0)?.end();
            let value = match field.kind {
                FieldKind::Text => FieldValue::Text(unescape(caps.get(1)?.as_str())),
                FieldKind::NullableText => {
                    if caps.get(1).is_some() {
                        FieldValue::Null
                    } else {
                        FieldValue::Text(unescape(caps.get(2)?.as_str()))
                    }
                }
                FieldKind::Unsigned => {
                    FieldValue::Unsigned(parse_unsigned(caps.get(1)?.as_str()))
                }
                FieldKind::Decimal => FieldValue::Decimal(caps.get(1)?.as_str().parse().ok()?),
            };
            values.push((field.name.clone(), value));
        }

        Some(values)
    }
}

/// A block whose fields matched a [`BlockPattern`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedBlock {
    /// Byte range of the block in the source text, braces included.
    pub span: Range<usize>,
    pub values: Vec<(String, FieldValue)>,
}

impl ExtractedBlock {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_str)
    }
}

/// Outcome of scanning a text for blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub blocks: Vec<ExtractedBlock>,
    /// Brace blocks that did not match the pattern.
    pub skipped: usize,
}

/// Extract every block of `text` that matches `pattern`, in source order.
pub fn extract_blocks(text: &str, pattern: &BlockPattern) -> Extraction {
    let mut extraction = Extraction::default();

    for span in scan_blocks(text) {
        match pattern.match_block(&text[span.clone()]) {
            Some(values) => extraction.blocks.push(ExtractedBlock { span, values }),
            None => {
                debug!(start = span.start, end = span.end, "block skipped");
                extraction.skipped += 1;
            }
        }
    }

    extraction
}

/// The capture is all ASCII digits, so the only failure is overflow, which
/// saturates rather than dropping the block.
fn parse_unsigned(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Decode the escapes produced by string-literal quoting.
fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') => out.push('\0'),
            Some('u') => {
                let high = read_hex4(&mut chars);
                match high {
                    Some(high @ 0xD800..=0xDBFF) => {
                        let low = read_low_surrogate(&mut chars);
                        let decoded = low
                            .and_then(|low| {
                                char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                            })
                            .unwrap_or(char::REPLACEMENT_CHARACTER);
                        out.push(decoded);
                    }
                    Some(code) => {
                        out.push(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
                    }
                    None => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn read_hex4(chars: &mut Chars<'_>) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut code = 0;
    for _ in 0..4 {
        let digit = lookahead.next()?.to_digit(16)?;
        code = code * 16 + digit;
    }
    *chars = lookahead;
    Some(code)
}

fn read_low_surrogate(chars: &mut Chars<'_>) -> Option<u32> {
    let mut lookahead = chars.clone();
    if lookahead.next()? != '\\' || lookahead.next()? != 'u' {
        return None;
    }
    let low = read_hex4(&mut lookahead)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    *chars = lookahead;
    Some(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern() -> BlockPattern {
        BlockPattern::new(&[
            ("id", FieldKind::Text),
            ("due", FieldKind::NullableText),
            ("amount", FieldKind::Unsigned),
            ("rate", FieldKind::Decimal),
        ])
        .expect("pattern")
    }

    #[test]
    fn matches_fields_in_order() {
        let values = pattern()
            .match_block(r#"{ id: "A1", due: "2025-01-01", amount: 500, rate: 0.05 }"#)
            .expect("match");
        assert_eq!(values[0], ("id".to_string(), FieldValue::Text("A1".to_string())));
        assert_eq!(values[1].1, FieldValue::Text("2025-01-01".to_string()));
        assert_eq!(values[2].1, FieldValue::Unsigned(500));
        assert_eq!(values[3].1, FieldValue::Decimal(0.05));
    }

    #[test]
    fn unsigned_overflow_saturates_instead_of_skipping() {
        let values = pattern()
            .match_block(r#"{ id: "A1", due: null, amount: 99999999999999999999999, rate: 1 }"#)
            .expect("oversized integer still matches");
        assert_eq!(values[2].1, FieldValue::Unsigned(u64::MAX));
    }

    #[test]
    fn null_token_is_not_text() {
        let values = pattern()
            .match_block(r#"{ id: "A1", due: null, amount: 1, rate: 1 }"#)
            .expect("match");
        assert_eq!(values[1].1, FieldValue::Null);
    }

    #[test]
    fn quoted_null_stays_text() {
        let values = pattern()
            .match_block(r#"{ id: "A1", due: "null", amount: 1, rate: 1 }"#)
            .expect("match");
        assert_eq!(values[1].1, FieldValue::Text("null".to_string()));
    }

    #[test]
    fn tolerates_extra_fields_between() {
        let block = r#"{ id: "A1", note: "x", due: null, other: 7, amount: 3, rate: .5, tail: true }"#;
        let values = pattern().match_block(block).expect("match");
        assert_eq!(values[2].1, FieldValue::Unsigned(3));
        assert_eq!(values[3].1, FieldValue::Decimal(0.5));
    }

    #[test]
    fn rejects_missing_or_reordered_fields() {
        assert!(pattern().match_block(r#"{ id: "A1", amount: 1, rate: 1 }"#).is_none());
        assert!(
            pattern()
                .match_block(r#"{ due: null, id: "A1", amount: 1, rate: 1 }"#)
                .is_none()
        );
    }

    #[test]
    fn field_names_need_a_word_boundary() {
        let pattern = BlockPattern::new(&[("id", FieldKind::Text)]).expect("pattern");
        assert!(pattern.match_block(r#"{ bookid: "A1" }"#).is_none());
    }

    #[test]
    fn unescapes_string_literals() {
        assert_eq!(unescape(r#"a\"b\\c"#), "a\"b\\c");
        assert_eq!(unescape(r"line\nnext\ttab"), "line\nnext\ttab");
        assert_eq!(unescape(r"\u0001\u2028"), "\u{1}\u{2028}");
        assert_eq!(unescape(r"\ud83d\ude00"), "\u{1F600}");
        assert_eq!(unescape(r"\q"), "q");
    }

    #[test]
    fn extract_counts_skipped_blocks() {
        let text = r#"
            const rows = [
              { id: "A1", due: null, amount: 1, rate: 0.1 },
              { id: "A2" },
              { id: "A3", due: "x", amount: 2, rate: 0.2 }
            ];
            const find = (id) => { return rows.find(r => r.id === id); };
        "#;
        let extraction = extract_blocks(text, &pattern());
        assert_eq!(extraction.blocks.len(), 2);
        assert_eq!(extraction.skipped, 2);
        assert_eq!(extraction.blocks[1].text("id"), Some("A3"));
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(matches!(BlockPattern::new(&[]), Err(ExtractError::EmptyPattern)));
    }
}
