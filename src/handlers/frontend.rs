use actix_files::{Files, NamedFile};
use actix_web::{HttpRequest, HttpResponse, guard, http::Method, web};
use std::path::PathBuf;

use crate::templates_structs::ApiErrorResponse;

/// Directory of the built frontend bundle.
#[derive(Debug, Clone)]
pub struct FrontendDist(pub PathBuf);

impl FrontendDist {
    pub fn index_file(&self) -> PathBuf {
        self.0.join("index.html")
    }

    pub fn exists(&self) -> bool {
        self.0.is_dir()
    }
}

/// Every file of the build, served from `/`. Paths with no matching file fall
/// through to [`index`]. `None` when there is no build.
pub fn static_files(dist: &FrontendDist) -> Option<Files> {
    if !dist.exists() {
        return None;
    }
    Some(
        Files::new("/", dist.0.clone())
            .guard(guard::Any(guard::Get()).or(guard::Head()))
            .index_file("index.html")
            .default_handler(web::to(index)),
    )
}

const MISSING_BUILD_HINT: &str =
    "Frontend build not found. Build the frontend into the configured FRONTEND_DIST directory.";

/// SPA fallback: every unmatched GET gets `index.html` so client-side
/// routes resolve. Without a build, a plain-text hint is returned.
pub async fn index(req: HttpRequest, dist: web::Data<FrontendDist>) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::NotFound().json(ApiErrorResponse::new("Not found"));
    }

    match NamedFile::open_async(dist.index_file()).await {
        Ok(file) => file.into_response(&req),
        Err(_) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(MISSING_BUILD_HINT),
    }
}
