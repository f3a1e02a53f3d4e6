//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod course;
pub mod dashboard;
pub mod study_session;
