//! Deck editor form model.
//!
//! Holds the editable copy of a deck (metadata plus per-slide fields, with
//! slide content kept as JSON text) and turns it back into a [`DeckPatch`]
//! on save.

use serde_json::Value;

use crate::models::deck::{Deck, DeckPatch};
use crate::models::slide::{Slide, SlideLayout};

/// Layout names offered by the layout picker.
pub fn layout_options() -> Vec<&'static str> {
    SlideLayout::ALL.iter().map(SlideLayout::as_str).collect()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeckMeta {
    pub title: String,
    pub subtitle: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditableSlide {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub layout: String,
    pub notes: String,
    pub content_text: String,
}

impl From<&Slide> for EditableSlide {
    fn from(slide: &Slide) -> Self {
        EditableSlide {
            id: slide.id.clone(),
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone().unwrap_or_default(),
            layout: slide.layout.as_str().to_string(),
            notes: slide.notes.clone().unwrap_or_default(),
            content_text: serde_json::to_string_pretty(&slide.content).unwrap_or_else(|_| "{}".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideField {
    Id,
    Title,
    Subtitle,
    Layout,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub tone: StatusTone,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub deck_id: Option<String>,
    pub meta: DeckMeta,
    pub slides: Vec<EditableSlide>,
    pub selected: usize,
    pub status: Option<Status>,
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the form contents with a stored deck.
    pub fn load(&mut self, deck: &Deck) {
        self.deck_id = Some(deck.id.clone());
        self.meta = DeckMeta {
            title: deck.title.clone(),
            subtitle: deck.subtitle.clone().unwrap_or_default(),
            theme: deck.theme.clone().unwrap_or_default(),
        };
        self.slides = deck.slides.iter().map(EditableSlide::from).collect();
        self.selected = 0;
        self.status = None;
    }

    pub fn current_slide(&self) -> Option<&EditableSlide> {
        self.slides.get(self.selected)
    }

    pub fn select_slide(&mut self, index: usize) {
        if index < self.slides.len() {
            self.selected = index;
        }
    }

    pub fn set_title(&mut self, value: &str) {
        self.meta.title = value.to_string();
    }

    pub fn set_subtitle(&mut self, value: &str) {
        self.meta.subtitle = value.to_string();
    }

    pub fn set_theme(&mut self, value: &str) {
        self.meta.theme = value.to_string();
    }

    /// Edit a field of the selected slide.
    pub fn set_slide_field(&mut self, field: SlideField, value: &str) {
        let Some(slide) = self.slides.get_mut(self.selected) else {
            return;
        };
        let target = match field {
            SlideField::Id => &mut slide.id,
            SlideField::Title => &mut slide.title,
            SlideField::Subtitle => &mut slide.subtitle,
            SlideField::Layout => &mut slide.layout,
            SlideField::Notes => &mut slide.notes,
        };
        *target = value.to_string();
    }

    pub fn set_content_text(&mut self, value: &str) {
        if let Some(slide) = self.slides.get_mut(self.selected) {
            slide.content_text = value.to_string();
        }
    }

    fn fail(&mut self, index: usize, message: String) -> Result<DeckPatch, String> {
        self.selected = index;
        self.status = Some(Status { tone: StatusTone::Error, message: message.clone() });
        Err(message)
    }

    /// Validate the form and build the update payload. On the first invalid
    /// slide, selects it and returns the error message.
    pub fn build_patch(&mut self) -> Result<DeckPatch, String> {
        let mut slides = Vec::with_capacity(self.slides.len());

        for index in 0..self.slides.len() {
            let slide = &self.slides[index];
            let id = slide.id.trim().to_string();
            if id.is_empty() {
                return self.fail(index, "Each slide needs an id.".to_string());
            }

            let layout_name = slide.layout.trim();
            if layout_name.is_empty() {
                return self.fail(index, format!("Slide {id} is missing a layout."));
            }
            let Some(layout) = SlideLayout::parse(layout_name) else {
                let message = format!("Slide {id} has an unknown layout '{layout_name}'.");
                return self.fail(index, message);
            };

            let content = if slide.content_text.is_empty() {
                Value::Object(serde_json::Map::new())
            } else {
                match serde_json::from_str::<Value>(&slide.content_text) {
                    Ok(value) => value,
                    Err(_) => return self.fail(index, format!("Slide {id} content is not valid JSON.")),
                }
            };

            slides.push(Slide {
                id,
                title: slide.title.clone(),
                subtitle: blank_to_none(&slide.subtitle),
                layout,
                content,
                notes: blank_to_none(&slide.notes),
            });
        }

        self.status = Some(Status { tone: StatusTone::Pending, message: "Saving changes…".to_string() });

        Ok(DeckPatch {
            id: None,
            title: Some(self.meta.title.clone()),
            subtitle: Some(blank_to_none(&self.meta.subtitle)),
            theme: blank_to_none(&self.meta.theme).map(Some),
            slides: Some(slides),
        })
    }

    /// Reload from the deck the server returned after a successful save.
    pub fn apply_saved(&mut self, deck: &Deck) {
        let selected = self.selected;
        self.load(deck);
        self.selected = selected.min(self.slides.len().saturating_sub(1));
        self.status = Some(Status { tone: StatusTone::Success, message: "Deck updated successfully.".to_string() });
    }

    pub fn save_failed(&mut self, message: &str) {
        let message = if message.is_empty() { "Failed to update deck." } else { message };
        self.status = Some(Status { tone: StatusTone::Error, message: message.to_string() });
    }
}
