pub mod decks;
pub mod slides;

use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::Method,
    middleware::Next,
    web,
};

use crate::config::JSON_BODY_LIMIT;
use crate::errors::AppError;
use crate::templates_structs::ApiErrorResponse;

/// Rejects POST/PUT requests that don't have Content-Type: application/json.
/// GET requests pass through.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == Method::POST || method == Method::PUT {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = ApiErrorResponse::new("Content-Type must be application/json");
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed or oversized JSON bodies become 400 responses with a message.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::Validation(format!("Invalid JSON body: {err}")).into())
}

/// Fallback for unknown `/api` routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse::new("Not found"))
}

/// Configure `/api` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(
        web::scope("/decks")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(decks::list))
            .route("", web::post().to(decks::create))
            .route("/{id}", web::get().to(decks::read))
            .route("/{id}", web::put().to(decks::update))
    );
    cfg.route("/deck", web::get().to(slides::default_deck));
    cfg.service(
        web::scope("/slides")
            .route("", web::get().to(slides::list))
            .route("/{id}", web::get().to(slides::read))
    );
}
