//! Shared test fixtures.
//!
//! - `slide()` / `bullets_slide()` - minimal valid slides
//! - `new_deck()` - an unstored deck
//! - `temp_store_path()` - a persistence path inside a fresh temp dir

#![allow(dead_code)]

use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

use slidedeck::models::deck::NewDeck;
use slidedeck::models::slide::{Slide, SlideLayout};

pub const DEFAULT_DECK_ID: &str = "ai-cross-country-commerce";

pub fn slide(id: &str, layout: SlideLayout, content: Value) -> Slide {
    Slide {
        id: id.to_string(),
        title: format!("Slide {id}"),
        subtitle: None,
        layout,
        content,
        notes: None,
    }
}

pub fn bullets_slide(id: &str) -> Slide {
    slide(
        id,
        SlideLayout::Bullets,
        json!({ "bullets": [{ "label": "One", "description": "First point" }] }),
    )
}

pub fn new_deck(title: &str, slides: Vec<Slide>) -> NewDeck {
    NewDeck {
        id: None,
        title: title.to_string(),
        subtitle: None,
        theme: None,
        slides,
    }
}

/// Returns (TempDir, path). The TempDir must stay alive while the path is used.
pub fn temp_store_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("decks.json");
    (dir, path)
}
