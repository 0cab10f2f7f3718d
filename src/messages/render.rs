//! Render state - data structure sent from App layer to UI for rendering

use tokio::sync::mpsc;

use crate::models::{Entry, Film, Place};

/// Snapshot of the Detail Overlay
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayView {
    pub entry: Option<Entry>,
    pub homeworld: Option<Place>,
    pub films: Vec<Film>,
    pub is_loading: bool,
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Listing
    pub entries: Vec<Entry>,
    pub cursor: usize,
    pub page: u32,
    pub total_count: u32,
    pub is_loading: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,

    // Overlay, present while an entry is selected
    pub overlay: Option<OverlayView>,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            entries: Vec::new(),
            cursor: 0,
            page: 1,
            total_count: 0,
            is_loading: true,
            can_go_previous: false,
            can_go_next: false,
            overlay: None,
            show_help: false,
        }
    }
}

impl RenderState {
    /// Replace with the newest snapshot waiting on the channel, if any
    pub fn refresh(&mut self, rx: &mut mpsc::UnboundedReceiver<RenderState>) -> bool {
        let mut updated = false;
        while let Ok(state) = rx.try_recv() {
            *self = state;
            updated = true;
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_keeps_newest_snapshot() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut current = RenderState::default();
        assert!(!current.refresh(&mut rx));

        tx.send(RenderState { page: 2, ..RenderState::default() }).unwrap();
        tx.send(RenderState { page: 3, show_help: true, ..RenderState::default() }).unwrap();

        assert!(current.refresh(&mut rx));
        assert_eq!(current.page, 3);
        assert!(current.show_help);
    }
}
