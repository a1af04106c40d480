//! Flesch Reading Ease.
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
//!
//! Higher is easier. A text with no words or no sentence terminator scores `0.0`;
//! that value means "not computable" and cannot be told apart from a real zero.

/// Score from precomputed counts.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let words = words as f64;
    206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables as f64 / words)
}
