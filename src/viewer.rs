//! Deck viewer state machine.
//!
//! Tracks the current slide and the notes/overview/fullscreen flags of a
//! presentation. The slide index always stays within `[0, slide_count - 1]`
//! (and is 0 for an empty deck).

/// What a key press does to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Prev,
    ToggleOverview,
    ToggleNotes,
    ClosePanels,
}

impl ViewerAction {
    /// Map a DOM `KeyboardEvent.key` value to an action.
    pub fn from_key(key: &str) -> Option<ViewerAction> {
        match key {
            "ArrowRight" | "ArrowDown" | "PageDown" | " " => Some(ViewerAction::Next),
            "ArrowLeft" | "ArrowUp" | "PageUp" => Some(ViewerAction::Prev),
            "o" | "O" => Some(ViewerAction::ToggleOverview),
            "n" | "N" => Some(ViewerAction::ToggleNotes),
            "Escape" => Some(ViewerAction::ClosePanels),
            _ => None,
        }
    }

    /// Navigation keys suppress the browser's default scrolling.
    pub fn prevents_default(self) -> bool {
        matches!(self, ViewerAction::Next | ViewerAction::Prev)
    }
}

/// Result of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    pub handled: bool,
    pub prevent_default: bool,
}

/// Browser fullscreen call the host should make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

impl FullscreenRequest {
    pub fn as_str(self) -> &'static str {
        match self {
            FullscreenRequest::Enter => "enter",
            FullscreenRequest::Exit => "exit",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    index: usize,
    slide_count: usize,
    notes_visible: bool,
    overview_visible: bool,
    fullscreen: bool,
    keyboard_enabled: bool,
    fullscreen_enabled: bool,
}

impl ViewerState {
    pub fn new(slide_count: usize) -> Self {
        Self {
            index: 0,
            slide_count,
            notes_visible: false,
            overview_visible: false,
            fullscreen: false,
            keyboard_enabled: true,
            fullscreen_enabled: false,
        }
    }

    pub fn with_keyboard(mut self, enabled: bool) -> Self {
        self.keyboard_enabled = enabled;
        self
    }

    pub fn with_fullscreen(mut self, enabled: bool) -> Self {
        self.fullscreen_enabled = enabled;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    pub fn overview_visible(&self) -> bool {
        self.overview_visible
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn last_index(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// A new deck was loaded; start again from the first slide.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        self.index = 0;
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1).min(self.last_index());
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn go_to(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }

    pub fn can_prev(&self) -> bool {
        self.index > 0
    }

    pub fn can_next(&self) -> bool {
        self.index < self.last_index()
    }

    pub fn toggle_notes(&mut self) {
        self.notes_visible = !self.notes_visible;
    }

    pub fn set_notes_visible(&mut self, visible: bool) {
        self.notes_visible = visible;
    }

    pub fn toggle_overview(&mut self) {
        self.overview_visible = !self.overview_visible;
    }

    pub fn set_overview_visible(&mut self, visible: bool) {
        self.overview_visible = visible;
    }

    pub fn close_panels(&mut self) {
        self.notes_visible = false;
        self.overview_visible = false;
    }

    /// Jump to a slide picked from the overview grid and close the grid.
    pub fn select_from_overview(&mut self, index: usize) {
        self.go_to(index);
        self.overview_visible = false;
    }

    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::Next => self.next(),
            ViewerAction::Prev => self.prev(),
            ViewerAction::ToggleOverview => self.toggle_overview(),
            ViewerAction::ToggleNotes => self.toggle_notes(),
            ViewerAction::ClosePanels => self.close_panels(),
        }
    }

    /// Handle a keydown event. `target_tag` is the event target's tag name;
    /// typing into form fields never drives the viewer.
    pub fn handle_key(&mut self, key: &str, target_tag: Option<&str>) -> KeyOutcome {
        if !self.keyboard_enabled {
            return KeyOutcome::default();
        }
        if let Some(tag) = target_tag {
            if tag.eq_ignore_ascii_case("INPUT") || tag.eq_ignore_ascii_case("TEXTAREA") {
                return KeyOutcome::default();
            }
        }
        let Some(action) = ViewerAction::from_key(key) else {
            return KeyOutcome::default();
        };
        self.apply(action);
        KeyOutcome { handled: true, prevent_default: action.prevents_default() }
    }

    /// The request to issue when the fullscreen button is pressed. The flag
    /// itself only changes through [`ViewerState::on_fullscreen_change`].
    pub fn toggle_fullscreen(&self) -> Option<FullscreenRequest> {
        if !self.fullscreen_enabled {
            return None;
        }
        Some(if self.fullscreen { FullscreenRequest::Exit } else { FullscreenRequest::Enter })
    }

    /// Mirror the browser's `fullscreenchange` event.
    pub fn on_fullscreen_change(&mut self, is_fullscreen: bool) {
        self.fullscreen = is_fullscreen;
    }

    /// Progress through the deck in percent.
    pub fn progress(&self) -> f64 {
        if self.slide_count == 0 {
            return 0.0;
        }
        (self.index + 1) as f64 / self.slide_count as f64 * 100.0
    }

    /// `"3 / 12"`, or `"0 / 0"` for an empty deck.
    pub fn position_label(&self) -> String {
        if self.slide_count == 0 {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.slide_count)
        }
    }
}
