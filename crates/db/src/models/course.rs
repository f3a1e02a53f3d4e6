//! Course catalog model.

use serde::Serialize;
use sqlx::FromRow;
use studybuddy_core::types::DbId;

/// A course row from the `courses` table.
///
/// The catalog is seeded by migration and read-only at runtime, so there are
/// no create/update DTOs.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub course_code: String,
    pub course_name: String,
    pub department: String,
}
