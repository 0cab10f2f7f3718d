//! App state - pure data structure with no I/O logic

use crate::messages::{OverlayView, RenderState};
use crate::models::{Entry, Film, Place};

/// Listing View state: the current page and the selection
#[derive(Clone, Debug)]
pub struct ListingState {
    pub page: u32,
    pub entries: Vec<Entry>,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_loading: bool,
    pub total_count: u32,
    /// Highlighted grid cell
    pub cursor: usize,
    /// Clone of the entry shown in the Detail Overlay
    pub selected: Option<Entry>,
    pub pending_request_id: Option<u64>,
}

impl ListingState {
    pub fn new(start_page: u32) -> Self {
        ListingState {
            page: start_page.max(1),
            entries: Vec::new(),
            has_next: false,
            has_previous: false,
            is_loading: false,
            total_count: 0,
            cursor: 0,
            selected: None,
            pending_request_id: None,
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.has_next && !self.is_loading
    }

    pub fn can_go_previous(&self) -> bool {
        self.has_previous && !self.is_loading && self.page > 1
    }

    pub fn highlighted(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }
}

/// Detail Overlay state for one selection
///
/// Homeworld and films resolve independently; only the film batch drives
/// `is_loading`.
#[derive(Clone, Debug, Default)]
pub struct DetailState {
    pub entry: Option<Entry>,
    pub homeworld: Option<Place>,
    pub films: Vec<Film>,
    pub is_loading: bool,
    pub homeworld_request_id: Option<u64>,
    pub films_request_id: Option<u64>,
}

impl DetailState {
    pub fn view(&self) -> OverlayView {
        OverlayView {
            entry: self.entry.clone(),
            homeworld: self.homeworld.clone(),
            films: self.films.clone(),
            is_loading: self.is_loading,
        }
    }
}

/// Main application state - pure data, no I/O
pub struct AppState {
    pub listing: ListingState,
    pub detail: DetailState,
    pub show_help: bool,
    pub next_request_id: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl AppState {
    pub fn new(start_page: u32) -> Self {
        AppState {
            listing: ListingState::new(start_page),
            detail: DetailState::default(),
            show_help: false,
            next_request_id: 1,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn overlay_open(&self) -> bool {
        self.listing.selected.is_some()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            entries: self.listing.entries.clone(),
            cursor: self.listing.cursor,
            page: self.listing.page,
            total_count: self.listing.total_count,
            is_loading: self.listing.is_loading,
            can_go_previous: self.listing.can_go_previous(),
            can_go_next: self.listing.can_go_next(),
            overlay: self.overlay_open().then(|| self.detail.view()),
            show_help: self.show_help,
        }
    }
}
