//! Repository for the `feedback` table.

use showcase_core::feedback::NewFeedback;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::feedback::Feedback;

/// Column list shared across queries.
const COLUMNS: &str = "id, name, mobile, email, project_name, feedback, rating, created_at";

pub struct FeedbackRepo;

impl FeedbackRepo {
    /// Insert a feedback record, returning the stored row.
    ///
    /// The id is a fresh UUIDv7 so ties on `created_at` still sort by
    /// insertion order.
    pub async fn create(pool: &PgPool, input: &NewFeedback) -> Result<Feedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO feedback (id, name, mobile, email, project_name, feedback, rating) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Feedback>(&query)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.mobile)
            .bind(&input.email)
            .bind(&input.project_name)
            .bind(&input.feedback)
            .bind(input.rating)
            .fetch_one(pool)
            .await
    }

    /// The whole collection, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Feedback>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM feedback ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Feedback>(&query).fetch_all(pool).await
    }
}
