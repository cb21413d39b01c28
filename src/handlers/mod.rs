//! View handlers module
//!
//! Each handler is the controller of one page: it owns the records fetched
//! for that page plus its ephemeral state, and reports every outcome through
//! the notification sink instead of returning errors.
//! - Admin handlers for the dashboard back-office
//! - Public handlers for the marketing site

pub mod admin;
pub mod public;

use crate::forms::FieldErrors;
use crate::utils::errors::EventHubError;

/// Result of submitting a form
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Client-side validation failed; nothing was sent
    Invalid(FieldErrors),
    /// The backend accepted the submission
    Saved(T),
    /// The backend call failed; the form stays open with its input
    Failed,
    /// A submission from this view is already in flight
    Busy,
    /// No form is open
    NoForm,
}

impl<T> SubmitOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }
}

/// Result of opening a detail page
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<T> {
    Loaded(T),
    /// The record could not be loaded; navigate to this listing instead
    Redirect(String),
}

impl<T> DetailOutcome<T> {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            DetailOutcome::Redirect(path) => Some(path),
            DetailOutcome::Loaded(_) => None,
        }
    }
}

/// The backend's own message when it sent one, else `fallback`
pub fn server_message_or(err: &EventHubError, fallback: &str) -> String {
    match err {
        EventHubError::Api { .. }
        | EventHubError::Unauthorized
        | EventHubError::NotFound { message: Some(_), .. } => err.user_message(),
        _ => fallback.to_string(),
    }
}
