use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// U+FEFF (byte order mark) is not Unicode White_Space but still separates words here.
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("valid regex"));

/// Text with every whitespace run collapsed to one ASCII space and the ends trimmed.
///
/// All counting stages take this type, so they never see raw input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse whitespace runs (any Unicode white space plus U+FEFF) and trim.
pub fn normalize(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("  one\t\ttwo\n\nthree  "), "one two three");
        assert_eq!(normalize("a\u{00A0}\u{2003}b"), "a b");
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(normalize("\u{FEFF}Hello\u{FEFF}world\u{FEFF}"), "Hello world");
        assert!(NormalizedText::new("\u{FEFF}").is_empty());
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        let n = NormalizedText::new(" \n\t ");
        assert!(n.is_empty());
        assert_eq!(n.as_str(), "");
    }

    #[test]
    fn already_normal_is_unchanged() {
        let s = "Hello world! Visit https://example.com for more info.";
        assert_eq!(normalize(s), s);
    }
}
