//! Repository for the `session_participants` table.

use sqlx::PgPool;
use studybuddy_core::types::DbId;

use crate::models::participant::Participant;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, user_id, status, joined_at";

/// Provides CRUD operations for session participation.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Insert a new participation row with the default `"confirmed"` status.
    ///
    /// A duplicate (session, user) pair surfaces as a unique-constraint
    /// violation on `uq_session_participants_session_user`; the caller
    /// decides how to report it.
    pub async fn create(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_participants (session_id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(session_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Delete the participation row for a (session, user) pair.
    ///
    /// Returns `true` if a row was deleted, `false` if none existed.
    pub async fn delete(
        pool: &PgPool,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM session_participants WHERE session_id = $1 AND user_id = $2")
                .bind(session_id)
                .bind(user_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
