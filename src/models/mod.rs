//! Data models module
//!
//! This module contains the records exchanged with the REST backend

pub mod event;
pub mod registration;
pub mod news;
pub mod newsletter;

// Re-export commonly used models
pub use event::{Event, EventPayload, EventCategory, EventStatus};
pub use registration::{EventRegistration, EventRef, EventSummary, CreateRegistrationRequest, UNKNOWN_EVENT, LOADING_EVENT};
pub use news::{News, NewsPayload, ImageUpload};
pub use newsletter::{Subscriber, SubscribeRequest};
