use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::models::seed::DefaultDeck;

/// GET /api/deck - The built-in default deck
pub async fn default_deck(deck: web::Data<DefaultDeck>) -> HttpResponse {
    HttpResponse::Ok().json(&deck.0)
}

/// GET /api/slides - Slide summaries of the default deck
pub async fn list(deck: web::Data<DefaultDeck>) -> HttpResponse {
    HttpResponse::Ok().json(deck.slide_summaries())
}

/// GET /api/slides/{id} - One slide of the default deck
pub async fn read(
    deck: web::Data<DefaultDeck>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let slide_id = path.into_inner();
    let slide = deck
        .0
        .find_slide(&slide_id)
        .ok_or_else(|| AppError::NotFound("Slide not found".to_string()))?;
    Ok(HttpResponse::Ok().json(slide))
}
