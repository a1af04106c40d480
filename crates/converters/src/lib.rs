use ai_text::{AiConfig, ArticleRequest, ChatClient, CompletionResponse, GeneratedArticle, Language};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use text_features::{AnalysisInput, AnalysisResult, LexiconScorer, TextAnalyzer};

/// Path to an AFINN-format word list that replaces the bundled sentiment lexicon.
pub const LEXICON_ENV: &str = "TEXTLENS_LEXICON";

/// One operation on a piece of text, tagged by `op`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TextRequest {
    Analyze {
        text: Option<String>,
        #[serde(default, alias = "wordsPerMinute")]
        words_per_minute: Option<f64>,
    },
    Punctuate { text: String },
    Translate { text: String, language: Language },
    Table { text: String },
    Article(ArticleRequest),
}

impl TextRequest {
    pub fn name(&self) -> &'static str {
        match self {
            TextRequest::Analyze { .. } => "analyze",
            TextRequest::Punctuate { .. } => "punctuate",
            TextRequest::Translate { .. } => "translate",
            TextRequest::Table { .. } => "table",
            TextRequest::Article(_) => "article",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TextResponse {
    Analysis(AnalysisResult),
    Completion(CompletionResponse),
    Article(GeneratedArticle),
}

impl TextResponse {
    /// HTTP-style status: 200 for analyses, the record's own code otherwise.
    pub fn status_code(&self) -> u16 {
        match self {
            TextResponse::Analysis(_) => 200,
            TextResponse::Completion(r) => r.status_code,
            TextResponse::Article(a) => a.response.status_code,
        }
    }
}

/// What a request needs to run: the local analyzer and the AI client.
pub struct Services {
    pub analyzer: TextAnalyzer,
    pub chat: ChatClient,
}

impl Services {
    pub fn new(ai: &AiConfig) -> Result<Self> {
        let chat = ChatClient::new(ai).context("failed to build chat-completion client")?;
        Ok(Self { analyzer: TextAnalyzer::new(), chat })
    }

    /// Score sentiment with the word list at `path` (e.g. AFINN-165).
    pub fn with_lexicon(mut self, path: &Path) -> Result<Self> {
        let list = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading lexicon {}", path.display()))?;
        let scorer = LexiconScorer::from_word_list(&list)
            .with_context(|| format!("failed parsing lexicon {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = scorer.len(), "using custom sentiment lexicon");
        let options = *self.analyzer.options();
        self.analyzer = TextAnalyzer::with_scorer(scorer).with_options(options);
        Ok(self)
    }

    pub fn from_env() -> Result<Self> {
        let services = Self::new(&AiConfig::from_env())?;
        match std::env::var_os(LEXICON_ENV) {
            Some(path) => services.with_lexicon(Path::new(&path)),
            None => Ok(services),
        }
    }
}

/// Route a request to the analyzer or to one of the AI helpers.
///
/// Analysis errors (empty or missing text) come back as `Err`; AI failures are
/// already folded into the returned record.
pub async fn handle_request(services: &Services, req: TextRequest) -> Result<TextResponse> {
    tracing::debug!(op = req.name(), "handling request");
    let resp = match req {
        TextRequest::Analyze { text, words_per_minute } => {
            let input = AnalysisInput { text, words_per_minute };
            let result = services.analyzer.analyze_input(&input).context("text analysis failed")?;
            TextResponse::Analysis(result)
        }
        TextRequest::Punctuate { text } => {
            TextResponse::Completion(ai_text::punctuate(&services.chat, &text).await)
        }
        TextRequest::Translate { text, language } => {
            TextResponse::Completion(ai_text::translate(&services.chat, &text, language).await)
        }
        TextRequest::Table { text } => {
            TextResponse::Completion(ai_text::make_table(&services.chat, &text).await)
        }
        TextRequest::Article(article) => {
            TextResponse::Article(ai_text::generate_article(&services.chat, &article).await)
        }
    };
    Ok(resp)
}
