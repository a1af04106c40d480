//! Readability and engagement metrics for a block of text.
//!
//! Everything here is a pure function of its input: no IO, no state kept
//! between calls. [`analyze_text`] is the usual entry point; [`TextAnalyzer`]
//! lets callers swap the sentiment scorer or the reading speed.

pub mod counters;
pub mod error;
pub mod keywords;
pub mod links;
pub mod normalize;
pub mod readability;
pub mod reading_time;
pub mod sentiment;

use serde::{Deserialize, Serialize};

pub use error::{AnalysisError, Result};
pub use normalize::{normalize, NormalizedText};
pub use reading_time::{ReadingTime, DEFAULT_READING_SPEED};
pub use sentiment::{LexiconScorer, Sentiment, SentimentScorer};

/// Tunables for one analysis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisOptions {
    pub words_per_minute: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { words_per_minute: DEFAULT_READING_SPEED }
    }
}

impl AnalysisOptions {
    pub fn validate(&self) -> Result<()> {
        let wpm = self.words_per_minute;
        if !wpm.is_finite() || wpm <= 0.0 {
            return Err(AnalysisError::invalid_input(format!(
                "words per minute must be a positive number, got {wpm}"
            )));
        }
        Ok(())
    }
}

/// Loosely typed request, as it arrives over the wire. `text` may be absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub text: Option<String>,
    pub words_per_minute: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub reading_time: ReadingTime,
    pub word_count: usize,
    /// Excludes whitespace.
    pub character_count: usize,
    pub sentence_count: usize,
    pub link_count: usize,
    pub links: Vec<String>,
    /// Flesch Reading Ease; `0.0` when there is no sentence terminator.
    pub readability_score: f64,
    pub sentiment: Sentiment,
    /// At most five terms or phrases, most frequent first.
    pub keywords: Vec<String>,
}

pub struct TextAnalyzer<S = LexiconScorer> {
    options: AnalysisOptions,
    scorer: S,
}

impl TextAnalyzer<LexiconScorer> {
    pub fn new() -> Self {
        Self { options: AnalysisOptions::default(), scorer: LexiconScorer::new() }
    }
}

impl Default for TextAnalyzer<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SentimentScorer> TextAnalyzer<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { options: AnalysisOptions::default(), scorer }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyze with the configured options.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        self.analyze_with(text, &self.options)
    }

    /// Analyze a wire request; an absent text or speed is handled like the typed API.
    pub fn analyze_input(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        let text = input
            .text
            .as_deref()
            .ok_or_else(|| AnalysisError::invalid_input("text is required"))?;
        let options = AnalysisOptions {
            words_per_minute: input.words_per_minute.unwrap_or(self.options.words_per_minute),
        };
        self.analyze_with(text, &options)
    }

    #[tracing::instrument(level = "debug", skip(self, text), fields(text_len = text.len()))]
    pub fn analyze_with(&self, text: &str, options: &AnalysisOptions) -> Result<AnalysisResult> {
        if text.is_empty() {
            tracing::debug!("rejecting empty text");
            return Err(AnalysisError::invalid_input("text must be a non-empty string"));
        }
        options.validate()?;

        let clean = NormalizedText::new(text);

        let word_count = counters::word_count(&clean);
        let sentence_count = counters::sentence_count(&clean);
        let syllable_count = counters::syllable_count(&clean);
        let links = links::extract_links(&clean);

        Ok(AnalysisResult {
            reading_time: reading_time::reading_time(word_count, options.words_per_minute),
            word_count,
            character_count: counters::character_count(&clean),
            sentence_count,
            link_count: links.len(),
            links,
            readability_score: readability::flesch_reading_ease(word_count, sentence_count, syllable_count),
            sentiment: sentiment::classify(&self.scorer, clean.as_str()),
            keywords: keywords::extract_keywords(&clean),
        })
    }
}

/// Analyze `text` with the built-in lexicon scorer.
///
/// `words_per_minute` defaults to [`DEFAULT_READING_SPEED`].
pub fn analyze_text(text: &str, words_per_minute: Option<f64>) -> Result<AnalysisResult> {
    let options = AnalysisOptions {
        words_per_minute: words_per_minute.unwrap_or(DEFAULT_READING_SPEED),
    };
    TextAnalyzer::new().analyze_with(text, &options)
}
