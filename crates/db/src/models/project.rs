//! Project entity model.

use serde::Serialize;
use showcase_core::project::ProjectMedia;
use showcase_core::types::{EntityId, Timestamp};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: EntityId,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    /// Stored as JSONB, serialized as a plain array.
    pub media: Json<Vec<ProjectMedia>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
