use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::deck::Deck;
use crate::models::slide::{SlideLayout, blocks};
use crate::store::DeckStore;
use crate::templates_structs::{FullscreenButton, OverviewCard, PresentedSlide, PresenterTemplate};
use crate::viewer::{FullscreenRequest, ViewerState};

/// Viewer state carried in the presenter URL, plus an optional event.
#[derive(Deserialize, Debug, Default)]
pub struct PresentQuery {
    pub slide: Option<usize>,
    pub notes: Option<bool>,
    pub overview: Option<bool>,
    /// Whether the browser is currently in fullscreen.
    pub fullscreen: Option<bool>,
    /// A keydown to apply, as `KeyboardEvent.key`.
    pub key: Option<String>,
    /// A card picked from the overview grid.
    pub select: Option<usize>,
}

impl PresentQuery {
    /// Rebuild the viewer for a deck of `slide_count` slides and apply the event.
    pub fn into_state(self, slide_count: usize) -> ViewerState {
        let mut state = ViewerState::new(slide_count).with_fullscreen(true);
        state.go_to(self.slide.unwrap_or(0));
        state.set_notes_visible(self.notes.unwrap_or(false));
        state.set_overview_visible(self.overview.unwrap_or(false));
        state.on_fullscreen_change(self.fullscreen.unwrap_or(false));

        if let Some(index) = self.select {
            state.select_from_overview(index);
        }
        if let Some(key) = self.key.as_deref() {
            state.handle_key(key, None);
        }
        state
    }
}

/// Presenter URL without the fullscreen flag. The page appends it when the
/// browser reports a fullscreen change.
fn base_href(deck_id: &str, slide: usize, notes: bool, overview: bool) -> String {
    format!(
        "/present/{}?slide={slide}&notes={notes}&overview={overview}",
        urlencoding::encode(deck_id)
    )
}

fn href(deck_id: &str, slide: usize, notes: bool, overview: bool, fullscreen: bool) -> String {
    format!("{}&fullscreen={fullscreen}", base_href(deck_id, slide, notes, overview))
}

fn fullscreen_button(request: FullscreenRequest) -> FullscreenButton {
    let label = match request {
        FullscreenRequest::Enter => "Enter full screen",
        FullscreenRequest::Exit => "Exit full screen",
    };
    FullscreenButton { request: request.as_str(), label }
}

fn build_template(deck: &Deck, state: &ViewerState) -> PresenterTemplate {
    let index = state.index();
    let notes = state.notes_visible();
    let overview = state.overview_visible();
    let fullscreen = state.is_fullscreen();
    let link = |slide: usize, notes: bool, overview: bool| href(&deck.id, slide, notes, overview, fullscreen);

    let current = deck.slides.get(index).map(|slide| PresentedSlide {
        title: slide.title.clone(),
        subtitle: slide.subtitle.clone().filter(|s| !s.is_empty()),
        layout: slide.layout.as_str().to_string(),
        is_cover: slide.layout == SlideLayout::Cover,
        blocks: blocks::slide_blocks(slide),
        notes: slide.notes.clone().filter(|n| !n.is_empty()),
    });

    let cards = deck
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| OverviewCard {
            number: format!("{:02}", i + 1),
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone().filter(|s| !s.is_empty()),
            href: format!("{}&select={i}", link(index, notes, true)),
            active: i == index,
        })
        .collect();

    let self_href = link(index, notes, overview);

    PresenterTemplate {
        deck_title: deck.title.clone(),
        deck_subtitle: deck.subtitle.clone().filter(|s| !s.is_empty()),
        current,
        position_label: state.position_label(),
        progress: state.progress().round() as u32,
        can_prev: state.can_prev(),
        can_next: state.can_next(),
        notes_visible: notes,
        overview_visible: overview,
        is_fullscreen: fullscreen,
        fullscreen_button: state.toggle_fullscreen().map(fullscreen_button),
        prev_href: link(index.saturating_sub(1), notes, overview),
        next_href: link(index + 1, notes, overview),
        notes_href: link(index, !notes, overview),
        overview_href: link(index, notes, !overview),
        key_href: format!("{self_href}&key="),
        fullscreen_href: format!("{}&fullscreen=", base_href(&deck.id, index, notes, overview)),
        self_href,
        overview: cards,
    }
}

/// GET /present/{id} - Server-rendered deck viewer
pub async fn present(
    store: web::Data<DeckStore>,
    path: web::Path<String>,
    query: web::Query<PresentQuery>,
) -> Result<HttpResponse, AppError> {
    let deck_id = path.into_inner();
    let deck = store
        .get(&deck_id)
        .ok_or_else(|| AppError::NotFound("Deck not found".to_string()))?;

    let state = query.into_inner().into_state(deck.slides.len());
    render(build_template(&deck, &state))
}
