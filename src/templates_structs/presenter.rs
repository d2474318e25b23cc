use askama::Template;

use crate::models::slide::blocks::SlideBlock;

/// The slide currently on stage.
pub struct PresentedSlide {
    pub title: String,
    pub subtitle: Option<String>,
    pub layout: String,
    pub is_cover: bool,
    pub blocks: Vec<SlideBlock>,
    pub notes: Option<String>,
}

/// One card in the overview grid.
pub struct OverviewCard {
    pub number: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub href: String,
    pub active: bool,
}

/// Fullscreen toggle: the request the page issues on click, and its label.
pub struct FullscreenButton {
    pub request: &'static str,
    pub label: &'static str,
}

#[derive(Template)]
#[template(path = "presenter.html")]
pub struct PresenterTemplate {
    pub deck_title: String,
    pub deck_subtitle: Option<String>,
    pub current: Option<PresentedSlide>,
    pub position_label: String,
    pub progress: u32,
    pub can_prev: bool,
    pub can_next: bool,
    pub notes_visible: bool,
    pub overview_visible: bool,
    pub is_fullscreen: bool,
    pub fullscreen_button: Option<FullscreenButton>,
    pub self_href: String,
    pub prev_href: String,
    pub next_href: String,
    pub notes_href: String,
    pub overview_href: String,
    pub key_href: String,
    pub fullscreen_href: String,
    pub overview: Vec<OverviewCard>,
}
