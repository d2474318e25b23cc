use actix_web::{App, HttpServer, middleware, web};

use slidedeck::config::Config;
use slidedeck::handlers::{self, frontend::FrontendDist};
use slidedeck::llm::DeckGenerator;
use slidedeck::models::seed;
use slidedeck::store::DeckStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();

    let default_deck = seed::default_deck().expect("Failed to load default deck");

    let store = match &config.store_path {
        Some(path) => DeckStore::open(path),
        None => {
            log::info!("No DECK_STORE_PATH set, decks are kept in memory only");
            DeckStore::in_memory()
        }
    };
    store.seed(&default_deck.0);

    let generator = DeckGenerator::from_config(&config.llm).expect("Failed to build LLM client");

    let store = web::Data::new(store);
    let generator = web::Data::new(generator);
    let default_deck = web::Data::new(default_deck);
    let dist = FrontendDist(config.frontend_dist.clone());
    if !dist.exists() {
        log::warn!("No frontend build at {}", dist.0.display());
    }
    let dist = web::Data::new(dist);

    let (host, port) = config.bind_addr();
    log::info!("Slide deck server listening on http://{host}:{port}");

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(generator.clone())
            .app_data(default_deck.clone())
            .app_data(dist.clone())
            .configure(handlers::configure);

        if let Some(files) = handlers::frontend::static_files(&dist) {
            app = app.service(files);
        }

        // SPA fallback (must be registered last)
        app.default_service(web::to(handlers::frontend::index))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
