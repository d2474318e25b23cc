//! In-memory deck store with best-effort JSON file persistence.
//!
//! Decks live in a `Mutex<HashMap>` shared by all workers. When a path is
//! configured, every create/update rewrites the whole file; write failures
//! are logged and never reach the caller.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::models::deck::{Deck, DeckPatch, DeckSummary, NewDeck};
use crate::models::slide::validate_slides;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotFound(String),
    IdMismatch { expected: String, found: String },
    AlreadyExists(String),
    Invalid(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Deck not found: {id}"),
            StoreError::IdMismatch { expected, found } => {
                write!(f, "Deck id cannot be changed (expected '{expected}', got '{found}')")
            }
            StoreError::AlreadyExists(id) => write!(f, "Deck already exists: {id}"),
            StoreError::Invalid(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

struct Inner {
    decks: HashMap<String, Deck>,
    last_stamp: Option<DateTime<Utc>>,
}

impl Inner {
    /// Strictly increasing timestamps, even when the clock stalls or steps back.
    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}

pub struct DeckStore {
    inner: Mutex<Inner>,
    path: Option<PathBuf>,
}

impl DeckStore {
    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            inner: Mutex::new(Inner { decks: HashMap::new(), last_stamp: None }),
            path: None,
        }
    }

    /// A store persisted to `path`. Existing decks are loaded from the file;
    /// a missing or unreadable file starts an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let decks = match load_file(&path) {
            Ok(decks) => {
                log::info!("Loaded {} deck(s) from {}", decks.len(), path.display());
                decks
            }
            Err(e) => {
                log::warn!("Starting with empty deck store ({}): {e}", path.display());
                Vec::new()
            }
        };
        let last_stamp = decks.iter().map(|d| d.updated_at.max(d.created_at)).max();
        let decks = decks.into_iter().map(|d| (d.id.clone(), d)).collect();

        Self {
            inner: Mutex::new(Inner { decks, last_stamp }),
            path: Some(path),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Insert a deck unless its id is already present. Decks without an id
    /// are ignored. Returns whether the deck was inserted.
    pub fn seed(&self, deck: &NewDeck) -> bool {
        let Some(id) = deck.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
            return false;
        };

        let mut inner = self.lock();
        if inner.decks.contains_key(id) {
            log::debug!("Seed deck '{id}' already present");
            return false;
        }
        let stamp = inner.next_stamp();
        inner.decks.insert(id.to_string(), stored(id.to_string(), deck.clone(), stamp));
        log::info!("Seeded deck '{id}'");
        self.persist(&inner);
        true
    }

    /// Store a new deck. Assigns a UUID when no id is given.
    pub fn create(&self, deck: NewDeck) -> Result<Deck, StoreError> {
        check_slides(&deck.slides)?;

        let mut inner = self.lock();
        let id = match deck.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => {
                if inner.decks.contains_key(id) {
                    return Err(StoreError::AlreadyExists(id.to_string()));
                }
                id.to_string()
            }
            _ => Uuid::new_v4().to_string(),
        };

        let stamp = inner.next_stamp();
        let created = stored(id.clone(), deck, stamp);
        inner.decks.insert(id.clone(), created.clone());
        log::info!("Created deck '{id}' with {} slide(s)", created.slides.len());
        self.persist(&inner);
        Ok(created)
    }

    /// Merge `patch` into the deck `id`. The id itself can never change.
    pub fn update(&self, id: &str, patch: DeckPatch) -> Result<Deck, StoreError> {
        if let Some(found) = patch.id.as_deref() {
            if found != id {
                return Err(StoreError::IdMismatch {
                    expected: id.to_string(),
                    found: found.to_string(),
                });
            }
        }
        if let Some(slides) = &patch.slides {
            check_slides(slides)?;
        }

        let mut inner = self.lock();
        if !inner.decks.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let stamp = inner.next_stamp();

        let Some(deck) = inner.decks.get_mut(id) else {
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Some(title) = patch.title {
            deck.title = title;
        }
        if let Some(subtitle) = patch.subtitle {
            deck.subtitle = subtitle;
        }
        if let Some(theme) = patch.theme {
            deck.theme = theme;
        }
        if let Some(slides) = patch.slides {
            deck.slides = slides;
        }
        deck.updated_at = stamp;
        let updated = deck.clone();

        log::info!("Updated deck '{id}'");
        self.persist(&inner);
        Ok(updated)
    }

    /// Summaries of every deck, oldest first.
    pub fn list(&self) -> Vec<DeckSummary> {
        let inner = self.lock();
        let mut summaries: Vec<DeckSummary> = inner.decks.values().map(Deck::summary).collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        summaries
    }

    pub fn get(&self, id: &str) -> Option<Deck> {
        self.lock().decks.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn persist(&self, inner: &Inner) {
        let Some(path) = &self.path else {
            return;
        };
        let mut decks: Vec<&Deck> = inner.decks.values().collect();
        decks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        if let Err(e) = write_file(path, &decks) {
            log::error!("Failed to persist decks to {}: {e}", path.display());
        }
    }
}

fn check_slides(slides: &[crate::models::slide::Slide]) -> Result<(), StoreError> {
    let errors = validate_slides(slides);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Invalid(errors.join("; ")))
    }
}

fn stored(id: String, deck: NewDeck, stamp: DateTime<Utc>) -> Deck {
    Deck {
        id,
        title: deck.title,
        subtitle: deck.subtitle,
        theme: deck.theme,
        slides: deck.slides,
        created_at: stamp,
        updated_at: stamp,
    }
}

fn load_file(path: &Path) -> Result<Vec<Deck>, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

fn write_file(path: &Path, decks: &[&Deck]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(decks)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)
}
