//! Form drafts and their validation
//!
//! Drafts are the in-progress records held by the admin and public forms.
//! Validation runs before any network call and reports errors per field.

pub mod event_form;
pub mod news_form;
pub mod newsletter_form;
pub mod registration_form;

use std::collections::BTreeMap;
use std::fmt;

pub use event_form::{EventDraft, validate, validate_at, parse_datetime_local};
pub use news_form::NewsDraft;
pub use newsletter_form::validate_email;
pub use registration_form::RegistrationDraft;

/// Form fields that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    StartingDate,
    EndingDate,
    Location,
    Image,
    Email,
}

impl Field {
    /// Name of the field as the form and the backend know it
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::StartingDate => "startingDate",
            Field::EndingDate => "endingDate",
            Field::Location => "location",
            Field::Image => "image",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error message; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier one for the same field
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(field, message)| format!("{}: {}", field, message)).collect();
        f.write_str(&parts.join("; "))
    }
}
