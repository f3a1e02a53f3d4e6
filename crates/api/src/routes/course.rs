//! Route definitions for the `/courses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`. All require auth.
///
/// ```text
/// GET    /             -> catalog + enrollment flags
/// POST   /{id}/enroll  -> enroll
/// DELETE /{id}/enroll  -> drop enrollment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(course::list))
        .route(
            "/{id}/enroll",
            post(course::enroll).delete(course::unenroll),
        )
}
