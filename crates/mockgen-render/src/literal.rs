use std::fmt::Write as _;

/// A field value as it appears in the emitted module.
#[derive(Debug, Clone, PartialEq)]
pub enum JsValue {
    Str(String),
    Int(i64),
    Null,
}

impl JsValue {
    pub fn str(value: impl Into<String>) -> Self {
        JsValue::Str(value.into())
    }

    /// `None` renders as the bare `null` token.
    pub fn nullable_str(value: Option<&str>) -> Self {
        value.map_or(JsValue::Null, JsValue::str)
    }

    pub fn to_literal(&self) -> String {
        match self {
            JsValue::Str(value) => quote_str(value),
            JsValue::Int(value) => value.to_string(),
            JsValue::Null => "null".to_string(),
        }
    }
}

/// Quote `value` as a double-quoted string literal.
///
/// Only backslash, double quote, control characters and the two Unicode line
/// terminators are escaped; everything else passes through verbatim.
pub fn quote_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{b}' => out.push_str("\\v"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch if ch.is_control() && (ch as u32) < 0x80 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_unicode_through() {
        assert_eq!(quote_str("Nguyễn Văn A"), "\"Nguyễn Văn A\"");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(quote_str(r#"a "b" \c"#), r#""a \"b\" \\c""#);
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(quote_str("a\nb\u{0}"), r#""a\nb\u0000""#);
        assert_eq!(quote_str("\u{2028}"), r#""\u2028""#);
    }

    #[test]
    fn null_is_a_bare_token() {
        assert_eq!(JsValue::nullable_str(None).to_literal(), "null");
        assert_eq!(JsValue::nullable_str(Some("null")).to_literal(), "\"null\"");
    }

    #[test]
    fn numbers_render_unquoted() {
        assert_eq!(JsValue::Int(-250).to_literal(), "-250");
    }
}
