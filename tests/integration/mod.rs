//! Integration tests
//!
//! Exercise the assembled router end to end through `tower::ServiceExt`.

pub mod api;
pub mod database;
