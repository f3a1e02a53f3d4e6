//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::study_session;
use crate::state::AppState;

/// Routes mounted at `/sessions`. All require auth.
///
/// ```text
/// GET    /           -> upcoming sessions for enrolled courses
/// POST   /           -> create session
/// POST   /{id}/join  -> join session
/// DELETE /{id}/join  -> leave session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(study_session::list).post(study_session::create))
        .route(
            "/{id}/join",
            post(study_session::join).delete(study_session::leave),
        )
}
