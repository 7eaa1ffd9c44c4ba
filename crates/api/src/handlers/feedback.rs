//! Handlers for the feedback wall.
//!
//! Public endpoints: anyone can submit and anyone can read. The store keeps
//! its own, looser schema; form-level rules live on the client.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use showcase_core::feedback::NewFeedback;
use showcase_db::repositories::FeedbackRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedId, SubmitResponse};
use crate::state::AppState;

const SUBMITTED: &str = "Feedback submitted successfully.";
const SUBMIT_FAILED: &str = "Failed to submit feedback.";
const FETCH_FAILED: &str = "Failed to fetch feedback.";

// ---------------------------------------------------------------------------
// POST /feedback
// ---------------------------------------------------------------------------

/// Store one feedback record and return its id.
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<NewFeedback>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = input.normalized();
    input.check_store_rules()?;

    let feedback = FeedbackRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store(SUBMIT_FAILED))?;

    tracing::info!(
        feedback_id = %feedback.id,
        rating = ?feedback.rating,
        "Feedback submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse::ok(SUBMITTED, CreatedId { id: feedback.id })),
    ))
}

// ---------------------------------------------------------------------------
// GET /feedback
// ---------------------------------------------------------------------------

/// The full feedback collection, newest first. No paging.
pub async fn list_feedback(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let feedback = FeedbackRepo::list(&state.pool)
        .await
        .map_err(AppError::store(FETCH_FAILED))?;

    Ok(Json(feedback))
}
