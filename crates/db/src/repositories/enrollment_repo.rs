//! Repository for the `enrollments` table.

use sqlx::PgPool;
use studybuddy_core::types::DbId;

use crate::models::enrollment::Enrollment;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, course_id, created_at";

/// Provides CRUD operations for enrollments.
pub struct EnrollmentRepo;

impl EnrollmentRepo {
    /// Insert a new enrollment, returning the created row.
    ///
    /// A duplicate (user, course) pair surfaces as a unique-constraint
    /// violation on `uq_enrollments_user_course`; the caller decides how to
    /// report it.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<Enrollment, sqlx::Error> {
        let query = format!(
            "INSERT INTO enrollments (user_id, course_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enrollment>(&query)
            .bind(user_id)
            .bind(course_id)
            .fetch_one(pool)
            .await
    }

    /// Delete the enrollment for a (user, course) pair.
    ///
    /// Returns `true` if a row was deleted, `false` if none existed.
    pub async fn delete(
        pool: &PgPool,
        user_id: DbId,
        course_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM enrollments WHERE user_id = $1 AND course_id = $2")
            .bind(user_id)
            .bind(course_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the course ids a user is enrolled in.
    pub async fn list_course_ids_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT course_id FROM enrollments WHERE user_id = $1 ORDER BY course_id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
