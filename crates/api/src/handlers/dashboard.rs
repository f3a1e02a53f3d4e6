//! Handler for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use studybuddy_db::models::course::Course;
use studybuddy_db::models::study_session::UpcomingSession;
use studybuddy_db::repositories::{CourseRepo, StudySessionRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Number of upcoming sessions shown on the dashboard.
const UPCOMING_LIMIT: i64 = 5;

/// Dashboard payload: the caller's enrolled courses and their next few
/// upcoming sessions.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub courses: Vec<Course>,
    pub upcoming_sessions: Vec<UpcomingSession>,
}

/// GET /api/v1/dashboard
pub async fn get(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let courses = CourseRepo::list_enrolled_for_user(&state.pool, auth_user.user_id).await?;
    let upcoming_sessions =
        StudySessionRepo::list_upcoming_for_user(&state.pool, auth_user.user_id, Some(UPCOMING_LIMIT))
            .await?;

    Ok(Json(DataResponse {
        data: Dashboard {
            courses,
            upcoming_sessions,
        },
    }))
}
