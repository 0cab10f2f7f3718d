//! # Holocron TUI
//!
//! A terminal directory viewer for the public Star Wars character API.
//!
//! ## Features
//! - Paginated character grid driven by the API's next/previous links
//! - Detail overlay resolving homeworld and films on demand
//! - Film batch fetched concurrently, all-or-nothing
//! - Stale responses from abandoned pages or selections are discarded
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use error::FetchError;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Entry, Film, ListingPage, Place};
pub use network::NetworkActor;
