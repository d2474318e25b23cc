//! Prompt → deck generation.
//!
//! With an API key configured, decks come from an OpenAI-compatible chat
//! endpoint; without one, [`fallback::template_deck`] builds a fixed deck.

pub mod client;
pub mod fallback;
pub mod prompt;

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::config::LlmConfig;
use crate::models::deck::NewDeck;

use client::ChatClient;

#[derive(Debug)]
pub enum LlmError {
    Http(reqwest::Error),
    Status(u16, String),
    EmptyResponse,
    InvalidJson(serde_json::Error),
    MissingSlides,
    InvalidDeck(serde_json::Error),
    Rejected(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::Http(e) => write!(f, "LLM request failed: {e}"),
            LlmError::Status(code, body) => write!(f, "LLM endpoint returned {code}: {body}"),
            LlmError::EmptyResponse => write!(f, "Model returned no content"),
            LlmError::InvalidJson(_) => write!(f, "Failed to parse deck JSON from model response"),
            LlmError::MissingSlides => write!(f, "Model response missing slides array"),
            LlmError::InvalidDeck(e) => write!(f, "Model response is not a valid deck: {e}"),
            LlmError::Rejected(msg) => write!(f, "Generated deck failed validation: {msg}"),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e)
    }
}

/// Optional title/subtitle supplied alongside the prompt.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateOptions {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

pub struct DeckGenerator {
    client: Option<ChatClient>,
}

impl DeckGenerator {
    /// Generator that always uses the template deck.
    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let Some(api_key) = config.api_key.as_deref() else {
            log::info!("No OPENAI_API_KEY set, decks will use the local template");
            return Ok(Self::fallback_only());
        };
        let client = ChatClient::new(&config.base_url, api_key, &config.model, config.temperature)?;
        log::info!("Deck generation via {} ({})", config.base_url, client.model());
        Ok(Self { client: Some(client) })
    }

    pub fn uses_llm(&self) -> bool {
        self.client.is_some()
    }

    pub async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<NewDeck, LlmError> {
        let Some(client) = &self.client else {
            return Ok(fallback::template_deck(prompt, options));
        };

        let user = prompt::user_prompt(prompt, options.title.as_deref(), options.subtitle.as_deref());
        let content = client.complete(prompt::SYSTEM_PROMPT, &user).await?;
        parse_deck(&content)
    }
}

/// Parse a model reply into a deck. The reply must be a bare JSON object
/// with a `slides` array.
pub fn parse_deck(content: &str) -> Result<NewDeck, LlmError> {
    let value: Value = serde_json::from_str(content.trim()).map_err(LlmError::InvalidJson)?;
    if !value.get("slides").is_some_and(Value::is_array) {
        return Err(LlmError::MissingSlides);
    }
    serde_json::from_value(value).map_err(LlmError::InvalidDeck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_deck_requires_slides_array() {
        assert!(matches!(parse_deck("not json"), Err(LlmError::InvalidJson(_))));
        assert!(matches!(parse_deck(r#"{"title":"x"}"#), Err(LlmError::MissingSlides)));
        assert!(matches!(parse_deck(r#"{"slides":{}}"#), Err(LlmError::MissingSlides)));
    }

    #[test]
    fn parse_deck_accepts_title_layout() {
        let deck = parse_deck(
            r#"{"title":"T","slides":[{"id":"a","title":"A","layout":"title","content":{"tagline":"x"}}]}"#,
        )
        .unwrap();
        assert_eq!(deck.slides[0].layout, crate::models::slide::SlideLayout::Cover);
    }

    #[test]
    fn parse_deck_rejects_unknown_layout() {
        let result = parse_deck(r#"{"slides":[{"id":"a","layout":"carousel"}]}"#);
        assert!(matches!(result, Err(LlmError::InvalidDeck(_))));
    }
}
