//! Test helpers module
//!
//! This module provides an in-memory backend, a wiremock-backed REST server,
//! fixture builders and a ready-wired test context.

#![allow(dead_code)]

pub mod api_mock;
pub mod backend;
pub mod test_context;
pub mod test_data;

pub use api_mock::*;
pub use backend::*;
pub use test_context::*;
pub use test_data::*;
