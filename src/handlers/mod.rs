pub mod api;
pub mod frontend;
pub mod presenter;

use actix_web::web;

/// Routes shared by the server and the integration tests: the REST API and
/// the presenter page. Static frontend hosting is added by `main`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(api::configure)
            .default_service(web::to(api::not_found)),
    );
    cfg.route("/present/{id}", web::get().to(presenter::present));
}
