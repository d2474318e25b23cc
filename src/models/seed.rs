use crate::models::deck::NewDeck;
use crate::models::slide::{SlideSummary, validate_slides};

const DEFAULT_DECK: &str = include_str!("../../data/seed/deck.json");

/// The built-in deck served by `/api/deck` and `/api/slides`, and seeded
/// into the store at startup.
#[derive(Debug, Clone)]
pub struct DefaultDeck(pub NewDeck);

impl DefaultDeck {
    pub fn slide_summaries(&self) -> Vec<SlideSummary> {
        self.0.slides.iter().map(SlideSummary::from).collect()
    }
}

/// Parse the compiled-in seed deck.
pub fn default_deck() -> Result<DefaultDeck, String> {
    let deck: NewDeck =
        serde_json::from_str(DEFAULT_DECK).map_err(|e| format!("Bad default deck JSON: {e}"))?;

    let errors = validate_slides(&deck.slides);
    if !errors.is_empty() {
        return Err(format!("Invalid default deck: {}", errors.join("; ")));
    }
    Ok(DefaultDeck(deck))
}
