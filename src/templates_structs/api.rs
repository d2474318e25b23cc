use serde::{Deserialize, Serialize};

use crate::models::deck::Deck;

/// API error response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), detail: None }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self { message: message.into(), detail: Some(detail.into()) }
    }
}

/// POST /api/decks body.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ApiCreateDeckRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

/// POST /api/decks response.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiCreateDeckResponse {
    pub deck_id: String,
    pub deck: Deck,
}

/// PUT /api/decks/{id} response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiDeckResponse {
    pub deck: Deck,
}
