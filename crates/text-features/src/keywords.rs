use std::collections::HashMap;

use crate::normalize::NormalizedText;

pub const MAX_KEYWORDS: usize = 5;

pub const STOP_WORDS: &[&str] = &[
    "the", "and", "a", "to", "of", "in", "on", "for", "with", "at", "by", "an", "this", "that",
    "it", "is", "was", "as", "be", "are", "which", "or", "but", "not", "from", "have", "has",
];

pub fn is_stop_word(term: &str) -> bool {
    STOP_WORDS.contains(&term)
}

/// Counts keyed by term, remembering the order in which terms were first seen.
#[derive(Debug, Default)]
struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn bump(&mut self, term: String) {
        match self.index.get(&term) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(term.clone(), self.entries.len());
                self.entries.push((term, 1));
            }
        }
    }

    /// Highest counts first; equal counts keep first-seen order.
    fn ranked(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Bigrams and trigrams in reading order: bigram(i), trigram(i), bigram(i + 1), ...
pub fn ngrams(words: &[&str]) -> Vec<String> {
    let mut out = Vec::new();
    for i in 0..words.len().saturating_sub(1) {
        out.push(format!("{} {}", words[i], words[i + 1]));
        if i + 2 < words.len() {
            out.push(format!("{} {} {}", words[i], words[i + 1], words[i + 2]));
        }
    }
    out
}

/// Top terms by frequency: unigrams longer than two characters plus every bigram
/// and trigram, all minus stop words, in one shared table.
///
/// N-grams only go through the stop-word check, never the length check, so
/// phrases made of short or stop words ("the and") still rank.
pub fn extract_keywords(text: &NormalizedText) -> Vec<String> {
    let lowered = text.as_str().to_lowercase();
    let words: Vec<&str> = lowered.split(' ').collect();
    let mut table = FrequencyTable::default();

    for word in &words {
        if !is_stop_word(word) && word.chars().count() > 2 {
            table.bump(word.to_string());
        }
    }
    for gram in ngrams(&words) {
        if !is_stop_word(&gram) {
            table.bump(gram);
        }
    }

    table
        .ranked()
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(term, _)| term)
        .collect()
}
