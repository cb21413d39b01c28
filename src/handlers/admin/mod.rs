//! Admin dashboard handlers

pub mod events;
pub mod news;
pub mod participants;
pub mod subscribers;

pub use events::{EventForm, EventsHandler};
pub use news::{NewsForm, NewsHandler};
pub use participants::{EventSelector, ParticipantStats, ParticipantsHandler};
pub use subscribers::{SubscriberStats, SubscribersHandler};
