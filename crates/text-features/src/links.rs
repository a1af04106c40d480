use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::NormalizedText;

static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// URL-like substrings in order of appearance, each running up to the next whitespace.
pub fn extract_links(text: &NormalizedText) -> Vec<String> {
    LINK.find_iter(text.as_str()).map(|m| m.as_str().to_string()).collect()
}
