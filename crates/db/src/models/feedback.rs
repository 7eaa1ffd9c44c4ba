//! Feedback entity model.

use serde::Serialize;
use showcase_core::types::{EntityId, Timestamp};
use sqlx::FromRow;

/// A row from the `feedback` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: EntityId,
    pub name: String,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub project_name: Option<String>,
    pub feedback: String,
    pub rating: Option<i32>,
    pub created_at: Timestamp,
}
