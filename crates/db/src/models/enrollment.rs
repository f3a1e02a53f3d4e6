//! Enrollment link entity (user <-> course).

use serde::Serialize;
use sqlx::FromRow;
use studybuddy_core::types::{DbId, Timestamp};

/// An enrollment row from the `enrollments` table.
///
/// At most one row exists per (user, course) pair, enforced by
/// `uq_enrollments_user_course`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enrollment {
    pub id: DbId,
    pub user_id: DbId,
    pub course_id: DbId,
    pub created_at: Timestamp,
}
