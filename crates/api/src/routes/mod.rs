pub mod auth;
pub mod course;
pub mod dashboard;
pub mod health;
pub mod study_session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register              register (public)
/// /auth/login                 login (public)
/// /auth/refresh               refresh (public)
/// /auth/logout                logout (requires auth)
///
/// /courses                    catalog + enrollment flags (GET)
/// /courses/{id}/enroll        enroll (POST), drop (DELETE)
///
/// /sessions                   upcoming sessions (GET), create (POST)
/// /sessions/{id}/join         join (POST), leave (DELETE)
///
/// /dashboard                  enrolled courses + next 5 sessions (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account registration and token lifecycle.
        .nest("/auth", auth::router())
        // Course catalog and enrollment.
        .nest("/courses", course::router())
        // Study sessions and participation.
        .nest("/sessions", study_session::router())
        // Per-user dashboard summary.
        .nest("/dashboard", dashboard::router())
}
