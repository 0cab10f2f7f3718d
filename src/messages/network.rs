//! Network messages - communication between App and Network layers

use crate::models::{Film, ListingPage, Place};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch one page of the people listing
    FetchPage {
        id: u64,
        page: u32,
    },
    /// Resolve an entry's homeworld
    FetchHomeworld {
        id: u64,
        url: String,
    },
    /// Resolve all films of an entry as one all-or-nothing batch
    FetchFilms {
        id: u64,
        urls: Vec<String>,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    PageLoaded {
        id: u64,
        page: ListingPage,
    },
    PageFailed {
        id: u64,
        message: String,
    },
    HomeworldLoaded {
        id: u64,
        place: Place,
    },
    HomeworldFailed {
        id: u64,
        message: String,
    },
    /// Films in the same order as the requested URLs
    FilmsLoaded {
        id: u64,
        films: Vec<Film>,
    },
    FilmsFailed {
        id: u64,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PageLoaded { id, .. } => *id,
            NetworkResponse::PageFailed { id, .. } => *id,
            NetworkResponse::HomeworldLoaded { id, .. } => *id,
            NetworkResponse::HomeworldFailed { id, .. } => *id,
            NetworkResponse::FilmsLoaded { id, .. } => *id,
            NetworkResponse::FilmsFailed { id, .. } => *id,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            NetworkResponse::PageFailed { .. }
                | NetworkResponse::HomeworldFailed { .. }
                | NetworkResponse::FilmsFailed { .. }
        )
    }
}
