//! Repository for the `study_sessions` table.

use sqlx::PgPool;
use studybuddy_core::types::DbId;

use crate::models::study_session::{CreateStudySession, StudySession, UpcomingSession};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, creator_id, course_id, title, description, session_date, \
                        session_time, duration_minutes, location, max_participants, \
                        status, created_at";

/// Provides CRUD operations for study sessions.
pub struct StudySessionRepo;

impl StudySessionRepo {
    /// Insert a new study session, returning the created row.
    ///
    /// Optional duration and participant cap fall back to the schema defaults
    /// (60 minutes, 4 participants). Status always starts as `"open"`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStudySession,
    ) -> Result<StudySession, sqlx::Error> {
        let query = format!(
            "INSERT INTO study_sessions
                (creator_id, course_id, title, description, session_date, session_time,
                 duration_minutes, location, max_participants)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 60), $8, COALESCE($9, 4))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudySession>(&query)
            .bind(input.creator_id)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.session_date)
            .bind(input.session_time)
            .bind(input.duration_minutes)
            .bind(&input.location)
            .bind(input.max_participants)
            .fetch_one(pool)
            .await
    }

    /// Find a study session by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudySession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_sessions WHERE id = $1");
        sqlx::query_as::<_, StudySession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List upcoming sessions visible to a user, annotated for display.
    ///
    /// Visible means: the session's course is among the user's enrollments
    /// and its date is today or later. Each row carries the course code/name,
    /// the creator's username, the confirmed participant count, and the
    /// user's own participation status (`"not_joined"` when absent). Ordered
    /// by (session_date, session_time) ascending.
    ///
    /// A `NULL` limit returns all rows.
    pub async fn list_upcoming_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<UpcomingSession>, sqlx::Error> {
        sqlx::query_as::<_, UpcomingSession>(
            "SELECT s.id, s.creator_id, s.course_id, s.title, s.description,
                    s.session_date, s.session_time, s.duration_minutes, s.location,
                    s.max_participants, s.status,
                    c.course_code, c.course_name, u.username AS creator_name,
                    COUNT(sp.id) AS participant_count,
                    (s.creator_id = $1) AS is_creator,
                    COALESCE(sp_user.status, 'not_joined') AS user_status
             FROM study_sessions s
             JOIN courses c ON c.id = s.course_id
             JOIN users u ON u.id = s.creator_id
             LEFT JOIN session_participants sp
                    ON sp.session_id = s.id AND sp.status = 'confirmed'
             LEFT JOIN session_participants sp_user
                    ON sp_user.session_id = s.id AND sp_user.user_id = $1
             WHERE s.course_id IN (SELECT course_id FROM enrollments WHERE user_id = $1)
               AND s.session_date >= CURRENT_DATE
             GROUP BY s.id, c.id, u.id, sp_user.status
             ORDER BY s.session_date, s.session_time
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
