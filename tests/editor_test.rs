//! Editor form tests: loading a deck, field edits and patch building.

mod common;

use chrono::Utc;
use serde_json::json;

use slidedeck::editor::{EditorState, SlideField, StatusTone, layout_options};
use slidedeck::models::deck::Deck;
use slidedeck::models::slide::SlideLayout;
use slidedeck::store::DeckStore;
use common::*;

fn sample_deck() -> Deck {
    let now = Utc::now();
    let mut second = slide("plan", SlideLayout::Timeline, json!({ "phases": [] }));
    second.notes = Some("Speak slowly".into());
    Deck {
        id: "deck-1".into(),
        title: "Quarterly review".into(),
        subtitle: Some("Q3".into()),
        theme: None,
        slides: vec![bullets_slide("intro"), second],
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_layout_options_cover_all_layouts() {
    let options = layout_options();
    assert_eq!(options.len(), 13);
    assert_eq!(options[0], "cover");
    assert!(options.contains(&"image-center"));
    assert!(!options.contains(&"title"));
}

#[test]
fn test_load_fills_form() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());

    assert_eq!(editor.deck_id.as_deref(), Some("deck-1"));
    assert_eq!(editor.meta.title, "Quarterly review");
    assert_eq!(editor.meta.subtitle, "Q3");
    assert_eq!(editor.meta.theme, "");
    assert_eq!(editor.slides.len(), 2);
    assert_eq!(editor.slides[1].layout, "timeline");
    assert_eq!(editor.slides[1].notes, "Speak slowly");
    assert!(editor.slides[0].content_text.contains("\"bullets\""));
    assert_eq!(editor.current_slide().map(|s| s.id.as_str()), Some("intro"));
}

#[test]
fn test_select_ignores_out_of_range() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());
    editor.select_slide(1);
    editor.select_slide(7);
    assert_eq!(editor.selected, 1);
}

#[test]
fn test_build_patch_from_unchanged_form() {
    let deck = sample_deck();
    let mut editor = EditorState::new();
    editor.load(&deck);

    let patch = editor.build_patch().expect("valid form");
    assert_eq!(patch.id, None);
    assert_eq!(patch.title.as_deref(), Some("Quarterly review"));
    assert_eq!(patch.subtitle, Some(Some("Q3".to_string())));
    assert_eq!(patch.theme, None);
    assert_eq!(patch.slides.as_ref(), Some(&deck.slides));
    assert_eq!(editor.status.as_ref().map(|s| s.tone), Some(StatusTone::Pending));
}

#[test]
fn test_edits_flow_into_patch() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());
    editor.set_title("Renamed");
    editor.set_subtitle("   ");
    editor.set_theme("dark");
    editor.select_slide(1);
    editor.set_slide_field(SlideField::Title, "Roadmap");
    editor.set_slide_field(SlideField::Layout, "title");
    editor.set_slide_field(SlideField::Notes, "");
    editor.set_content_text("");

    let patch = editor.build_patch().expect("valid form");
    assert_eq!(patch.title.as_deref(), Some("Renamed"));
    assert_eq!(patch.subtitle, Some(None));
    assert_eq!(patch.theme, Some(Some("dark".to_string())));

    let slides = patch.slides.expect("slides");
    assert_eq!(slides[1].title, "Roadmap");
    assert_eq!(slides[1].layout, SlideLayout::Cover);
    assert_eq!(slides[1].notes, None);
    assert_eq!(slides[1].content, json!({}));
}

#[test]
fn test_missing_id_is_reported_and_selected() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());
    editor.select_slide(1);
    editor.set_slide_field(SlideField::Id, "  ");
    editor.select_slide(0);

    let err = editor.build_patch().expect_err("blank id");
    assert_eq!(err, "Each slide needs an id.");
    assert_eq!(editor.selected, 1);
    assert_eq!(editor.status.as_ref().map(|s| s.tone), Some(StatusTone::Error));
}

#[test]
fn test_layout_errors() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());

    editor.set_slide_field(SlideField::Layout, "");
    assert_eq!(editor.build_patch().expect_err("blank"), "Slide intro is missing a layout.");

    editor.set_slide_field(SlideField::Layout, "spiral");
    assert_eq!(
        editor.build_patch().expect_err("unknown"),
        "Slide intro has an unknown layout 'spiral'."
    );
}

#[test]
fn test_invalid_content_json() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());
    editor.select_slide(1);
    editor.set_content_text("{ phases: ");

    let err = editor.build_patch().expect_err("bad json");
    assert_eq!(err, "Slide plan content is not valid JSON.");
    assert_eq!(editor.selected, 1);
}

#[test]
fn test_whitespace_content_is_not_valid_json() {
    let mut editor = EditorState::new();
    editor.load(&sample_deck());
    editor.select_slide(1);
    editor.set_content_text("   \n");
    editor.select_slide(0);

    let err = editor.build_patch().expect_err("whitespace is not JSON");
    assert_eq!(err, "Slide plan content is not valid JSON.");
    assert_eq!(editor.selected, 1);
}

#[test]
fn test_save_round_trip_through_store() {
    let store = DeckStore::in_memory();
    let created = store
        .create(new_deck("Draft", vec![bullets_slide("a"), bullets_slide("b")]))
        .expect("create");

    let mut editor = EditorState::new();
    editor.load(&created);
    editor.select_slide(1);
    editor.set_title("Final");

    let patch = editor.build_patch().expect("valid form");
    let saved = store.update(&created.id, patch).expect("update");
    editor.apply_saved(&saved);

    assert_eq!(editor.meta.title, "Final");
    assert_eq!(editor.selected, 1);
    let status = editor.status.clone().expect("status");
    assert_eq!(status.tone, StatusTone::Success);
    assert_eq!(status.message, "Deck updated successfully.");
}

#[test]
fn test_save_failed_message() {
    let mut editor = EditorState::new();
    editor.save_failed("Deck not found");
    assert_eq!(editor.status.as_ref().map(|s| s.message.as_str()), Some("Deck not found"));

    editor.save_failed("");
    assert_eq!(editor.status.as_ref().map(|s| s.message.as_str()), Some("Failed to update deck."));
}
