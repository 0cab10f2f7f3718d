//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::{Entry, ListingPage};

impl AppState {
    // ========================
    // Listing View
    // ========================

    /// Start fetching `page`, replacing whatever the grid showed
    pub fn load_page(&mut self, page: u32) -> Option<NetworkCommand> {
        if page == 0 {
            return None;
        }

        let id = self.next_id();
        let listing = &mut self.listing;
        listing.page = page;
        listing.entries.clear();
        listing.cursor = 0;
        listing.selected = None;
        listing.is_loading = true;
        listing.pending_request_id = Some(id);
        self.reset_detail();

        Some(NetworkCommand::FetchPage { id, page })
    }

    /// Reload the current page (initial mount)
    pub fn load_current_page(&mut self) -> Option<NetworkCommand> {
        self.load_page(self.listing.page)
    }

    pub fn next_page(&mut self) -> Option<NetworkCommand> {
        if !self.listing.can_go_next() {
            return None;
        }
        self.load_page(self.listing.page + 1)
    }

    pub fn prev_page(&mut self) -> Option<NetworkCommand> {
        if !self.listing.can_go_previous() {
            return None;
        }
        self.load_page(self.listing.page - 1)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.listing.entries.len();
        if len == 0 {
            self.listing.cursor = 0;
            return;
        }
        let target = self.listing.cursor as isize + delta;
        self.listing.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    /// Select the highlighted entry and open the Detail Overlay on it
    pub fn select_entry(&mut self) -> Vec<NetworkCommand> {
        let Some(entry) = self.listing.highlighted().cloned() else {
            return Vec::new();
        };
        self.listing.selected = Some(entry.clone());
        self.open_detail(Some(entry))
    }

    fn apply_page(&mut self, page: ListingPage) {
        let listing = &mut self.listing;
        listing.has_next = page.has_next();
        listing.has_previous = page.has_previous();
        listing.total_count = page.count;
        listing.entries = page.results;
        listing.cursor = 0;
        listing.is_loading = false;
        listing.pending_request_id = None;
    }

    // ========================
    // Detail Overlay
    // ========================

    /// Show `entry` in the overlay and start resolving its details
    pub fn open_detail(&mut self, entry: Option<Entry>) -> Vec<NetworkCommand> {
        self.reset_detail();
        let mut commands = Vec::new();

        let Some(entry) = entry else {
            return commands;
        };

        if let Some(url) = entry.homeworld.clone() {
            let id = self.next_id();
            self.detail.homeworld_request_id = Some(id);
            commands.push(NetworkCommand::FetchHomeworld { id, url });
        }

        if !entry.films.is_empty() {
            let id = self.next_id();
            self.detail.is_loading = true;
            self.detail.films_request_id = Some(id);
            commands.push(NetworkCommand::FetchFilms {
                id,
                urls: entry.films.clone(),
            });
        }

        self.detail.entry = Some(entry);
        commands
    }

    /// Close the overlay; the selection is owned by the listing
    pub fn close_detail(&mut self) {
        self.listing.selected = None;
        self.reset_detail();
    }

    fn reset_detail(&mut self) {
        self.detail = Default::default();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Network responses
    // ========================

    /// Apply a network response; responses for superseded requests are dropped
    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::PageLoaded { id, page } => {
                if self.listing.pending_request_id == Some(id) {
                    self.apply_page(page);
                } else {
                    tracing::debug!(id, "Dropping stale listing page");
                }
            }
            NetworkResponse::PageFailed { id, message } => {
                if self.listing.pending_request_id == Some(id) {
                    tracing::error!(page = self.listing.page, error = %message, "Error fetching characters");
                    self.listing.entries.clear();
                    self.listing.is_loading = false;
                    self.listing.pending_request_id = None;
                } else {
                    tracing::debug!(id, "Dropping stale listing failure");
                }
            }
            NetworkResponse::HomeworldLoaded { id, place } => {
                if self.detail.homeworld_request_id == Some(id) {
                    self.detail.homeworld = Some(place);
                    self.detail.homeworld_request_id = None;
                }
            }
            NetworkResponse::HomeworldFailed { id, .. } => {
                // Unresolved homeworld is silent
                if self.detail.homeworld_request_id == Some(id) {
                    self.detail.homeworld_request_id = None;
                }
            }
            NetworkResponse::FilmsLoaded { id, films } => {
                if self.detail.films_request_id == Some(id) {
                    self.detail.films = films;
                    self.finish_films();
                }
            }
            NetworkResponse::FilmsFailed { id, .. } => {
                if self.detail.films_request_id == Some(id) {
                    self.finish_films();
                }
            }
        }
    }

    fn finish_films(&mut self) {
        self.detail.is_loading = false;
        self.detail.films_request_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Film, Place};

    fn entries(n: usize) -> Vec<Entry> {
        (0..n).map(|i| Entry::new(format!("Person {}", i))).collect()
    }

    fn page_with(results: Vec<Entry>, next: bool, previous: bool) -> ListingPage {
        ListingPage {
            count: 82,
            next: next.then(|| "https://swapi.dev/api/people/?page=2".to_string()),
            previous: previous.then(|| "https://swapi.dev/api/people/?page=1".to_string()),
            results,
        }
    }

    /// Mount the listing and answer its first fetch
    fn loaded_state(results: Vec<Entry>, next: bool, previous: bool) -> AppState {
        let mut state = AppState::new(1);
        let Some(NetworkCommand::FetchPage { id, .. }) = state.load_current_page() else {
            panic!("expected a page fetch");
        };
        state.handle_response(NetworkResponse::PageLoaded {
            id,
            page: page_with(results, next, previous),
        });
        state
    }

    fn film_request(commands: &[NetworkCommand]) -> (u64, Vec<String>) {
        commands
            .iter()
            .find_map(|cmd| match cmd {
                NetworkCommand::FetchFilms { id, urls } => Some((*id, urls.clone())),
                _ => None,
            })
            .expect("film batch requested")
    }

    fn homeworld_request(commands: &[NetworkCommand]) -> Option<u64> {
        commands.iter().find_map(|cmd| match cmd {
            NetworkCommand::FetchHomeworld { id, .. } => Some(*id),
            _ => None,
        })
    }

    #[test]
    fn test_mount_fetches_first_page() {
        let mut state = AppState::new(1);
        let cmd = state.load_current_page();

        assert!(matches!(cmd, Some(NetworkCommand::FetchPage { page: 1, .. })));
        assert!(state.listing.is_loading);
        assert!(!state.listing.can_go_next());
        assert!(!state.listing.can_go_previous());
    }

    #[test]
    fn test_first_page_enables_next_only() {
        let state = loaded_state(entries(10), true, false);
        let render = state.to_render_state();

        assert_eq!(render.entries.len(), 10);
        assert!(!render.is_loading);
        assert!(render.can_go_next);
        assert!(!render.can_go_previous);
        assert_eq!(render.total_count, 82);
    }

    #[test]
    fn test_page_change_clears_list_and_disables_navigation() {
        let mut state = loaded_state(entries(10), true, false);
        let cmd = state.next_page();

        assert!(matches!(cmd, Some(NetworkCommand::FetchPage { page: 2, .. })));
        assert!(state.listing.entries.is_empty());
        assert!(!state.listing.can_go_next());
        assert!(!state.listing.can_go_previous());

        // Navigation is ignored while the fetch is outstanding
        assert!(state.next_page().is_none());
        assert_eq!(state.listing.page, 2);
    }

    #[test]
    fn test_prev_page_requires_previous_link() {
        let mut state = loaded_state(entries(10), true, false);
        assert!(state.prev_page().is_none());
        assert_eq!(state.listing.page, 1);
    }

    #[test]
    fn test_prev_page_never_drops_below_one() {
        let mut state = loaded_state(entries(3), false, true);
        assert_eq!(state.listing.page, 1);
        assert!(state.prev_page().is_none());
        assert!(state.load_page(0).is_none());
    }

    #[test]
    fn test_listing_failure_leaves_empty_grid() {
        let mut state = loaded_state(entries(10), true, false);
        let Some(NetworkCommand::FetchPage { id, .. }) = state.next_page() else {
            panic!("expected a page fetch");
        };

        state.handle_response(NetworkResponse::PageFailed {
            id,
            message: "Connection failed".to_string(),
        });

        assert!(state.listing.entries.is_empty());
        assert!(!state.listing.is_loading);
        assert_eq!(state.listing.page, 2);
    }

    #[test]
    fn test_stale_page_is_dropped() {
        let mut state = AppState::new(1);
        let Some(NetworkCommand::FetchPage { id: first, .. }) = state.load_current_page() else {
            panic!("expected a page fetch");
        };
        let Some(NetworkCommand::FetchPage { id: second, .. }) = state.load_page(3) else {
            panic!("expected a page fetch");
        };

        state.handle_response(NetworkResponse::PageLoaded {
            id: first,
            page: page_with(entries(10), true, false),
        });
        assert!(state.listing.entries.is_empty());
        assert!(state.listing.is_loading);

        state.handle_response(NetworkResponse::PageLoaded {
            id: second,
            page: page_with(entries(4), true, true),
        });
        assert_eq!(state.listing.entries.len(), 4);
        assert!(!state.listing.is_loading);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut state = loaded_state(entries(5), false, false);
        state.move_cursor(-3);
        assert_eq!(state.listing.cursor, 0);
        state.move_cursor(4);
        assert_eq!(state.listing.cursor, 4);
        state.move_cursor(10);
        assert_eq!(state.listing.cursor, 4);
    }

    #[test]
    fn test_select_stores_highlighted_entry() {
        let mut state = loaded_state(entries(5), false, false);
        state.move_cursor(2);
        let commands = state.select_entry();

        assert!(commands.is_empty());
        assert_eq!(state.listing.selected.as_ref().map(|e| e.name.as_str()), Some("Person 2"));
        let overlay = state.to_render_state().overlay.expect("overlay open");
        assert_eq!(overlay.entry.map(|e| e.name), Some("Person 2".to_string()));
        assert!(!overlay.is_loading);
    }

    #[test]
    fn test_select_on_empty_grid_does_nothing() {
        let mut state = loaded_state(Vec::new(), false, false);
        assert!(state.select_entry().is_empty());
        assert!(!state.overlay_open());
    }

    #[test]
    fn test_films_resolve_in_reference_order() {
        let luke = Entry::new("Luke Skywalker").with_films(["urlA", "urlB"]);
        let mut state = loaded_state(vec![luke], false, false);
        let commands = state.select_entry();

        assert_eq!(homeworld_request(&commands), None);
        let (id, urls) = film_request(&commands);
        assert_eq!(urls, vec!["urlA".to_string(), "urlB".to_string()]);
        assert!(state.detail.is_loading);

        state.handle_response(NetworkResponse::FilmsLoaded {
            id,
            films: vec![
                Film { title: "A New Hope".to_string() },
                Film { title: "Attack of the Clones".to_string() },
            ],
        });

        let overlay = state.to_render_state().overlay.unwrap();
        assert!(!overlay.is_loading);
        let titles: Vec<&str> = overlay.films.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["A New Hope", "Attack of the Clones"]);
    }

    #[test]
    fn test_failed_film_batch_clears_loading_without_films() {
        let luke = Entry::new("Luke Skywalker").with_films(["urlA", "urlBroken"]);
        let mut state = loaded_state(vec![luke], false, false);
        let (id, _) = film_request(&state.select_entry());

        state.handle_response(NetworkResponse::FilmsFailed {
            id,
            message: "unexpected status 404".to_string(),
        });

        let overlay = state.to_render_state().overlay.unwrap();
        assert!(!overlay.is_loading);
        assert!(overlay.films.is_empty());
        assert_eq!(overlay.entry.unwrap().name, "Luke Skywalker");
    }

    #[test]
    fn test_homeworld_resolves_independently_of_films() {
        let luke = Entry::new("Luke Skywalker")
            .with_homeworld("https://swapi.dev/api/planets/1/")
            .with_films(["urlA"]);
        let mut state = loaded_state(vec![luke], false, false);
        let commands = state.select_entry();
        let homeworld_id = homeworld_request(&commands).expect("homeworld requested");

        state.handle_response(NetworkResponse::HomeworldLoaded {
            id: homeworld_id,
            place: Place { name: "Tatooine".to_string() },
        });

        assert!(state.detail.is_loading);
        assert_eq!(state.detail.homeworld.as_ref().map(|p| p.name.as_str()), Some("Tatooine"));
    }

    #[test]
    fn test_homeworld_failure_stays_unresolved() {
        let leia = Entry::new("Leia Organa").with_homeworld("https://swapi.dev/api/planets/2/");
        let mut state = loaded_state(vec![leia], false, false);
        let id = homeworld_request(&state.select_entry()).unwrap();

        state.handle_response(NetworkResponse::HomeworldFailed {
            id,
            message: "Connection failed".to_string(),
        });

        assert!(state.detail.homeworld.is_none());
        assert!(!state.detail.is_loading);
    }

    #[test]
    fn test_close_discards_details_and_late_responses() {
        let luke = Entry::new("Luke Skywalker")
            .with_homeworld("https://swapi.dev/api/planets/1/")
            .with_films(["urlA"]);
        let mut state = loaded_state(vec![luke], false, false);
        let commands = state.select_entry();
        let homeworld_id = homeworld_request(&commands).unwrap();
        let (films_id, _) = film_request(&commands);

        state.close_detail();
        assert!(!state.overlay_open());
        assert!(state.to_render_state().overlay.is_none());

        state.handle_response(NetworkResponse::HomeworldLoaded {
            id: homeworld_id,
            place: Place { name: "Tatooine".to_string() },
        });
        state.handle_response(NetworkResponse::FilmsLoaded {
            id: films_id,
            films: vec![Film { title: "A New Hope".to_string() }],
        });

        assert!(state.detail.homeworld.is_none());
        assert!(state.detail.films.is_empty());
    }

    #[test]
    fn test_reselect_ignores_previous_selection_responses() {
        let mut state = loaded_state(
            vec![
                Entry::new("Luke Skywalker").with_films(["urlA"]),
                Entry::new("C-3PO").with_films(["urlB"]),
            ],
            false,
            false,
        );
        let (old_id, _) = film_request(&state.select_entry());
        state.close_detail();
        state.move_cursor(1);
        let (new_id, _) = film_request(&state.select_entry());

        state.handle_response(NetworkResponse::FilmsLoaded {
            id: old_id,
            films: vec![Film { title: "A New Hope".to_string() }],
        });
        assert!(state.detail.is_loading);
        assert!(state.detail.films.is_empty());

        state.handle_response(NetworkResponse::FilmsLoaded {
            id: new_id,
            films: vec![Film { title: "The Phantom Menace".to_string() }],
        });
        assert_eq!(state.detail.films[0].title, "The Phantom Menace");
    }

    #[test]
    fn test_open_without_entry_requests_nothing() {
        let mut state = AppState::new(1);
        assert!(state.open_detail(None).is_empty());
        assert!(state.detail.entry.is_none());
        assert!(!state.detail.is_loading);
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(state.to_render_state().show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}
