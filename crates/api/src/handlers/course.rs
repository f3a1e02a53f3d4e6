//! Handlers for the `/courses` resource (catalog + enrollment).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use studybuddy_core::error::CoreError;
use studybuddy_core::types::DbId;
use studybuddy_db::models::course::Course;
use studybuddy_db::models::enrollment::Enrollment;
use studybuddy_db::repositories::{CourseRepo, EnrollmentRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Catalog payload for `GET /courses`: the full catalog plus the set of
/// course ids the caller is enrolled in.
#[derive(Debug, Serialize)]
pub struct CourseCatalog {
    pub courses: Vec<Course>,
    pub enrolled_course_ids: Vec<DbId>,
}

/// GET /api/v1/courses
///
/// Full catalog ordered by (department, course_code), with enrollment flags
/// for the caller.
pub async fn list(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<CourseCatalog>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    let enrolled_course_ids =
        EnrollmentRepo::list_course_ids_for_user(&state.pool, auth_user.user_id).await?;

    Ok(Json(DataResponse {
        data: CourseCatalog {
            courses,
            enrolled_course_ids,
        },
    }))
}

/// POST /api/v1/courses/{id}/enroll
///
/// Enroll the caller in a course. The course must exist; enrolling twice in
/// the same course is reported as a conflict and leaves exactly one row.
pub async fn enroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Enrollment>)> {
    if CourseRepo::find_by_id(&state.pool, course_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Course {course_id} does not exist"
        ))));
    }

    let enrollment = match EnrollmentRepo::create(&state.pool, auth_user.user_id, course_id).await {
        Ok(enrollment) => enrollment,
        Err(e) if is_unique_violation(&e) => {
            return Err(AppError::Core(CoreError::Conflict(
                "You are already enrolled in this course".into(),
            )));
        }
        Err(e) => return Err(e.into()),
    };

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// DELETE /api/v1/courses/{id}/enroll
///
/// Drop the caller's enrollment. A no-op (still 204) when no enrollment
/// exists.
pub async fn unenroll(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(course_id): Path<DbId>,
) -> AppResult<StatusCode> {
    EnrollmentRepo::delete(&state.pool, auth_user.user_id, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
