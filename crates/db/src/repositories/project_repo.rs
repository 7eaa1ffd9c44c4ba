//! Repository for the `projects` table.

use showcase_core::project::NewProject;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::project::Project;

/// Column list shared across queries.
const COLUMNS: &str =
    "id, title, summary, description, tags, thumbnail, media, created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project, returning the stored row. `updated_at` starts equal
    /// to `created_at`.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (id, title, summary, description, tags, thumbnail, media) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(&input.thumbnail)
            .bind(Json(&input.media))
            .fetch_one(pool)
            .await
    }

    /// The whole collection, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }
}
