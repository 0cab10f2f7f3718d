//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::render::RenderState;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Grid navigation
    /// Move the highlighted card by a signed number of cells
    MoveCursor(isize),
    SelectEntry,

    // Pagination
    NextPage,
    PrevPage,

    // Overlay
    CloseDetail,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// What the key handler needs to know about the current screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyContext {
    pub overlay_open: bool,
    pub show_help: bool,
    /// Number of grid columns currently drawn
    pub columns: usize,
}

impl KeyContext {
    pub fn from_render(state: &RenderState, columns: usize) -> Self {
        KeyContext {
            overlay_open: state.overlay.is_some(),
            show_help: state.show_help,
            columns,
        }
    }

    /// Account for an event already sent to the app layer, so keys typed
    /// before the next render state arrives map against the screen the
    /// user expects.
    pub fn apply(&mut self, event: &UiEvent) {
        match event {
            UiEvent::CloseDetail => self.overlay_open = false,
            UiEvent::ToggleHelp => self.show_help = !self.show_help,
            UiEvent::CloseHelp => self.show_help = false,
            _ => {}
        }
    }
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, ctx: KeyContext) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if ctx.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if ctx.overlay_open {
        return handle_overlay_keys(key);
    }

    handle_grid_keys(key, ctx.columns.max(1) as isize)
}

/// Keys while the Detail Overlay is shown
fn handle_overlay_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('c') => {
            Some(UiEvent::CloseDetail)
        }
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        _ => None,
    }
}

/// Keys while the grid has focus
fn handle_grid_keys(key: KeyEvent, columns: isize) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Left | KeyCode::Char('h') => Some(UiEvent::MoveCursor(-1)),
        KeyCode::Right | KeyCode::Char('l') => Some(UiEvent::MoveCursor(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MoveCursor(-columns)),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MoveCursor(columns)),
        KeyCode::Enter => Some(UiEvent::SelectEntry),
        KeyCode::Char('n') | KeyCode::PageDown => Some(UiEvent::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp => Some(UiEvent::PrevPage),
        _ => None,
    }
}
