use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::client::{ChatClient, ChatRequest};
use crate::response::{CompletionResponse, STATUS_SERVER_ERROR};

const FALLBACK_ERROR: &str = "Failed to get response from the AI server.";
const NO_CONTENT: &str = "No content generated";

macro_rules! languages {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Target languages accepted by [`translate`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Language {
            $(#[serde(rename = $name)] $variant,)+
        }

        impl Language {
            pub const ALL: &'static [Language] = &[$(Language::$variant,)+];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Language::$variant => $name,)+
                }
            }
        }
    };
}

languages! {
    English => "English",
    Spanish => "Spanish",
    French => "French",
    German => "German",
    Finnish => "Finnish",
    Chinese => "Chinese",
    Japanese => "Japanese",
    Arabic => "Arabic",
    Russian => "Russian",
    Hindi => "Hindi",
    Bengali => "Bengali",
    Portuguese => "Portuguese",
    Korean => "Korean",
    Italian => "Italian",
    Dutch => "Dutch",
    Turkish => "Turkish",
    Polish => "Polish",
    Swedish => "Swedish",
    Thai => "Thai",
    Greek => "Greek",
    Hebrew => "Hebrew",
    Vietnamese => "Vietnamese",
    Indonesian => "Indonesian",
    Filipino => "Filipino",
    Romanian => "Romanian",
    Czech => "Czech",
    Hungarian => "Hungarian",
    Danish => "Danish",
    Norwegian => "Norwegian",
    Ukrainian => "Ukrainian",
    Malay => "Malay",
    Urdu => "Urdu",
    Persian => "Persian (Farsi)",
    Tamil => "Tamil",
    Telugu => "Telugu",
    Marathi => "Marathi",
    Gujarati => "Gujarati",
    Punjabi => "Punjabi",
    Swahili => "Swahili",
    Hausa => "Hausa",
    Yoruba => "Yoruba",
    Zulu => "Zulu",
    Burmese => "Burmese",
    Khmer => "Khmer",
    Lao => "Lao",
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Case-insensitive; "Persian" and "Farsi" both name [`Language::Persian`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("persian") || wanted.eq_ignore_ascii_case("farsi") {
            return Ok(Language::Persian);
        }
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLanguage(wanted.to_string()))
    }
}

pub fn translation_prompt(content: &str, language: Language) -> String {
    format!("Translate this content \"{content}\" into \"{language}\".")
}

#[tracing::instrument(skip(client, content), fields(text_len = content.len()))]
pub async fn translate(client: &ChatClient, content: &str, language: Language) -> CompletionResponse {
    let request = ChatRequest::prompt(translation_prompt(content, language));
    match client.complete(&request).await {
        Ok(reply) => match reply.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()) {
            Some(translated) => CompletionResponse::ok(translated),
            None => {
                tracing::warn!("translation returned no content");
                CompletionResponse::ok(NO_CONTENT)
            }
        },
        Err(err) => {
            tracing::error!(error = %err, "translation failed");
            let message = err.detail().unwrap_or(FALLBACK_ERROR);
            CompletionResponse::failed(message, STATUS_SERVER_ERROR)
        }
    }
}
