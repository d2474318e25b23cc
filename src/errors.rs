use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use crate::llm::LlmError;
use crate::store::StoreError;
use crate::templates_structs::ApiErrorResponse;

#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    Generation(LlmError),
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "Validation error: {e}"),
            AppError::NotFound(e) => write!(f, "{e}"),
            AppError::Generation(e) => write!(f, "Generation error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Generation(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => ApiErrorResponse::new(msg),
            AppError::Generation(e) => {
                log::error!("Failed to generate deck: {e}");
                ApiErrorResponse::with_detail("Failed to generate deck", e.to_string())
            }
            AppError::Template(_) => {
                log::error!("{self}");
                ApiErrorResponse::new("Internal Server Error")
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::NotFound("Deck not found".to_string()),
            other => AppError::Validation(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(e: LlmError) -> Self {
        AppError::Generation(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an askama template into an HTML response.
pub fn render(tmpl: impl askama::Template) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(tmpl.render()?))
}
