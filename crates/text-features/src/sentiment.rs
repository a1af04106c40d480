use crate::error::{AnalysisError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Bundled word scores on the AFINN -5..5 scale, one `word<TAB>score` per line.
static LEXICON: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    include_str!("../data/lexicon.tsv")
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let (word, score) = line.split_once('\t')?;
            Some((word.trim(), score.trim().parse().ok()?))
        })
        .collect()
});

const NEGATORS: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "don't", "doesn't", "didn't", "isn't", "wasn't",
    "aren't", "won't", "wouldn't", "shouldn't",
];

/// Anything that turns text into a signed score. Only the sign is used.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> i32;
}

impl<F> SentimentScorer for F
where
    F: Fn(&str) -> i32 + Send + Sync,
{
    fn score(&self, text: &str) -> i32 {
        self(text)
    }
}

/// Sum of lexicon scores over the tokens of the text.
///
/// A scored word directly after a negator ("not good") counts with the opposite sign.
/// `new()` uses the bundled list; `from_word_list` takes a full AFINN file instead.
#[derive(Clone, Debug, Default)]
pub struct LexiconScorer {
    words: Option<Arc<HashMap<String, i32>>>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `word<TAB>score` lines (the AFINN-111/165 file layout).
    ///
    /// Blank lines and `#` comments are skipped. Entries are lowercased; multi-word
    /// entries load but never match, since scoring looks at single tokens.
    pub fn from_word_list(list: &str) -> Result<Self> {
        let mut words = HashMap::new();
        for (n, line) in list.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let parsed = line
                .rsplit_once('\t')
                .and_then(|(word, score)| Some((word.trim(), score.trim().parse::<i32>().ok()?)));
            match parsed {
                Some((word, score)) if !word.is_empty() => {
                    words.insert(word.to_lowercase(), score);
                }
                _ => {
                    return Err(AnalysisError::invalid_input(format!(
                        "lexicon line {}: expected word<TAB>score, got {line:?}",
                        n + 1
                    )))
                }
            }
        }
        if words.is_empty() {
            return Err(AnalysisError::invalid_input("lexicon has no entries"));
        }
        tracing::debug!(entries = words.len(), "loaded sentiment lexicon");
        Ok(Self { words: Some(Arc::new(words)) })
    }

    pub fn len(&self) -> usize {
        match &self.words {
            Some(words) => words.len(),
            None => LEXICON.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn word_score(&self, word: &str) -> i32 {
        let score = match &self.words {
            Some(words) => words.get(word),
            None => LEXICON.get(word),
        };
        score.copied().unwrap_or(0)
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> i32 {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
            .filter(|t| !t.is_empty())
            .collect();

        let mut total = 0;
        for (i, token) in tokens.iter().enumerate() {
            let base = self.word_score(token);
            if base == 0 {
                continue;
            }
            let negated = i > 0 && NEGATORS.contains(&tokens[i - 1]);
            total += if negated { -base } else { base };
        }
        total
    }
}

/// Coarse three-way label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify<S: SentimentScorer + ?Sized>(scorer: &S, text: &str) -> Sentiment {
    Sentiment::from_score(scorer.score(text))
}
