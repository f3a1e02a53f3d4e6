//! Participation link entity (user <-> study session).

use serde::Serialize;
use sqlx::FromRow;
use studybuddy_core::types::{DbId, Timestamp};

/// A participation row from the `session_participants` table.
///
/// At most one row exists per (session, user) pair, enforced by
/// `uq_session_participants_session_user`. Status defaults to `"confirmed"`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participant {
    pub id: DbId,
    pub session_id: DbId,
    pub user_id: DbId,
    pub status: String,
    pub joined_at: Timestamp,
}
