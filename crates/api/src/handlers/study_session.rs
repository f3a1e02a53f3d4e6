//! Handlers for the `/sessions` resource (study sessions + participation).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use studybuddy_core::error::CoreError;
use studybuddy_core::types::DbId;
use studybuddy_db::models::participant::Participant;
use studybuddy_db::models::study_session::{CreateStudySession, StudySession, UpcomingSession};
use studybuddy_db::repositories::{CourseRepo, ParticipantRepo, StudySessionRepo};
use validator::Validate;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /sessions`.
///
/// Duration and participant cap are optional and fall back to the schema
/// defaults (60 minutes, 4 participants).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSessionRequest {
    pub course_id: DbId,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub max_participants: Option<i32>,
}

/// GET /api/v1/sessions
///
/// All upcoming sessions for the caller's enrolled courses, annotated with
/// participant counts and the caller's own participation status.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<UpcomingSession>>>> {
    let sessions =
        StudySessionRepo::list_upcoming_for_user(&state.pool, auth_user.user_id, None).await?;
    Ok(Json(DataResponse { data: sessions }))
}

/// POST /api/v1/sessions
///
/// Create a study session owned by the caller. The target course must exist,
/// but the caller need not be enrolled in it. No capacity or date-validity
/// check is made, and the creator is not auto-joined.
pub async fn create(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateSessionRequest>,
) -> AppResult<(StatusCode, Json<StudySession>)> {
    input.validate()?;

    if CourseRepo::find_by_id(&state.pool, input.course_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Course {} does not exist",
            input.course_id
        ))));
    }

    let create_dto = CreateStudySession {
        creator_id: auth_user.user_id,
        course_id: input.course_id,
        title: input.title,
        description: input.description,
        session_date: input.session_date,
        session_time: input.session_time,
        duration_minutes: input.duration_minutes,
        location: input.location,
        max_participants: input.max_participants,
    };

    let session = StudySessionRepo::create(&state.pool, &create_dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/v1/sessions/{id}/join
///
/// Join a study session as a confirmed participant. Joining twice is a
/// conflict and leaves exactly one row. The stored participant cap is
/// advisory and deliberately not enforced here.
pub async fn join(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(session_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Participant>)> {
    if StudySessionRepo::find_by_id(&state.pool, session_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Study session",
            id: session_id,
        }));
    }

    let participant = match ParticipantRepo::create(&state.pool, session_id, auth_user.user_id)
        .await
    {
        Ok(participant) => participant,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Core(CoreError::Conflict(
                "You have already joined this session".into(),
            )));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((StatusCode::CREATED, Json(participant)))
}

/// DELETE /api/v1/sessions/{id}/join
///
/// Leave a study session. A no-op (still 204) when the caller is not a
/// participant.
pub async fn leave(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(session_id): Path<DbId>,
) -> AppResult<StatusCode> {
    ParticipantRepo::delete(&state.pool, session_id, auth_user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
