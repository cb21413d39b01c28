//! EventHub
//!
//! Core of an events and news website: public event listing and
//! registration, newsletter sign-up, and the admin back-office for events,
//! participants, subscribers and news. Every view is a handler that fetches
//! from the REST backend, filters and pages in memory, and refetches after
//! each change.

pub mod config;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventHubError, Result};

// Re-export main components for easy access
pub use services::ServiceFactory;
pub use state::{FilterState, PaginationState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
