use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::NormalizedText;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));
static VOWEL_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[aeiouy]{1,2}").expect("valid regex"));

/// Segments between single spaces. The empty text still yields one (empty) segment.
pub fn word_count(text: &NormalizedText) -> usize {
    text.as_str().split(' ').count()
}

/// Characters excluding all whitespace, counted as Unicode scalar values.
pub fn character_count(text: &NormalizedText) -> usize {
    text.as_str().chars().filter(|c| !c.is_whitespace()).count()
}

/// Runs of `.`, `!` or `?`; `"..."` and `"?!"` each count once.
pub fn sentence_count(text: &NormalizedText) -> usize {
    SENTENCE_END.find_iter(text.as_str()).count()
}

/// Crude syllable estimate: groups of one or two vowels (y included), scanned left to right.
pub fn syllable_count(text: &NormalizedText) -> usize {
    VOWEL_GROUP.find_iter(text.as_str()).count()
}
