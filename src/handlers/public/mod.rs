//! Public site handlers

pub mod event_detail;
pub mod landing;
pub mod news;

pub use event_detail::EventDetailHandler;
pub use landing::LandingHandler;
pub use news::{preview, NewsPageHandler};
