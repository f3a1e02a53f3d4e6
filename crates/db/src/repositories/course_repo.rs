//! Repository for the `courses` table.
//!
//! The catalog is seeded by migration and read-only at runtime, so this
//! repository only exposes lookups.

use sqlx::PgPool;
use studybuddy_core::types::DbId;

use crate::models::course::Course;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, course_code, course_name, department";

/// Provides read operations for the course catalog.
pub struct CourseRepo;

impl CourseRepo {
    /// List the full catalog ordered by (department, course_code).
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY department, course_code");
        sqlx::query_as::<_, Course>(&query).fetch_all(pool).await
    }

    /// Find a course by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the courses a user is enrolled in, ordered by (department, course_code).
    pub async fn list_enrolled_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            "SELECT c.id, c.course_code, c.course_name, c.department
             FROM courses c
             JOIN enrollments e ON e.course_id = c.id
             WHERE e.user_id = $1
             ORDER BY c.department, c.course_code",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
