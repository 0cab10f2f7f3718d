//! Network layer - HTTP fetches against the character API
//!
//! The Network actor receives fetch commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
