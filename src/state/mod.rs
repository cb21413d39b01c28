//! View state module
//!
//! Ephemeral, per-view state owned by a handler: filter selections,
//! pagination, in-flight flags and pending confirmations.

pub mod busy;
pub mod confirm;
pub mod filter;
pub mod pagination;

pub use busy::BusyState;
pub use confirm::{ConfirmationGate, ConfirmationRequest};
pub use filter::{DatePolicy, FilterState, StatusFilter};
pub use pagination::{paginate, LoadMoreState, Page, PaginationState};
