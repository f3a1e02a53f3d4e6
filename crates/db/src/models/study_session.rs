//! Study session model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;
use studybuddy_core::types::{DbId, Timestamp};

/// A study session row from the `study_sessions` table.
///
/// Sessions are never updated or deleted once created. The `status` column
/// defaults to `"open"` and no operation transitions it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudySession {
    pub id: DbId,
    pub creator_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub max_participants: i32,
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new study session.
///
/// `duration_minutes` and `max_participants` fall back to the schema defaults
/// (60 and 4) when `None`.
#[derive(Debug)]
pub struct CreateStudySession {
    pub creator_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub max_participants: Option<i32>,
}

/// A study session annotated for the upcoming-sessions view: course and
/// creator context, confirmed participant count, and the viewing user's own
/// relationship to the session.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UpcomingSession {
    pub id: DbId,
    pub creator_id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub session_date: NaiveDate,
    pub session_time: NaiveTime,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub max_participants: i32,
    pub status: String,
    pub course_code: String,
    pub course_name: String,
    pub creator_name: String,
    /// Count of participation rows with status `"confirmed"`.
    pub participant_count: i64,
    /// Whether the viewing user created this session.
    pub is_creator: bool,
    /// The viewing user's participation status, `"not_joined"` if none.
    pub user_status: String,
}
