use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::llm::{DeckGenerator, GenerateOptions, LlmError};
use crate::models::deck::DeckPatch;
use crate::store::{DeckStore, StoreError};
use crate::templates_structs::{ApiCreateDeckRequest, ApiCreateDeckResponse, ApiDeckResponse};
use crate::validate;

const DEFAULT_GENERATED_TITLE: &str = "Generated Deck";

/// GET /api/decks - Deck summaries (no slide content)
pub async fn list(store: web::Data<DeckStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.list())
}

/// GET /api/decks/{id} - Full deck
pub async fn read(
    store: web::Data<DeckStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let deck_id = path.into_inner();
    let deck = store
        .get(&deck_id)
        .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;
    Ok(HttpResponse::Ok().json(deck))
}

/// POST /api/decks - Generate a deck from a prompt and store it
pub async fn create(
    store: web::Data<DeckStore>,
    generator: web::Data<DeckGenerator>,
    body: web::Json<ApiCreateDeckRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let prompt = body.prompt.unwrap_or_default();

    if let Some(message) = validate::validate_required(&prompt, "Prompt") {
        return Err(AppError::Validation(message));
    }

    // Title and subtitle go to the generator exactly as sent.
    let options = GenerateOptions {
        title: validate::non_empty(body.title.as_deref()),
        subtitle: validate::non_empty(body.subtitle.as_deref()),
    };
    let mut deck = generator.generate(&prompt, &options).await?;

    // Generated decks always get a fresh id.
    deck.id = None;
    deck.title = options
        .title
        .clone()
        .or_else(|| validate::non_empty(Some(&deck.title)))
        .unwrap_or_else(|| DEFAULT_GENERATED_TITLE.to_string());
    deck.subtitle = options
        .subtitle
        .clone()
        .or_else(|| validate::non_empty(deck.subtitle.as_deref()));

    let stored = store.create(deck).map_err(|e| match e {
        StoreError::Invalid(msg) => AppError::Generation(LlmError::Rejected(msg)),
        other => AppError::from(other),
    })?;

    Ok(HttpResponse::Created().json(ApiCreateDeckResponse {
        deck_id: stored.id.clone(),
        deck: stored,
    }))
}

/// PUT /api/decks/{id} - Update metadata and replace slides
pub async fn update(
    store: web::Data<DeckStore>,
    path: web::Path<String>,
    body: web::Json<DeckPatch>,
) -> Result<HttpResponse, AppError> {
    let deck_id = path.into_inner();
    let updated = store.update(&deck_id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(ApiDeckResponse { deck: updated }))
}
