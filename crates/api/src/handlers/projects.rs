//! Handlers for the project gallery.
//!
//! These endpoints are not authenticated. The access code only guards the
//! add-project form on the client.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use showcase_core::project::NewProject;
use showcase_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::{CreatedId, SubmitResponse};
use crate::state::AppState;

const SUBMITTED: &str = "Project submitted successfully.";
const SUBMIT_FAILED: &str = "Failed to submit project.";
const FETCH_FAILED: &str = "Failed to fetch projects.";

// ---------------------------------------------------------------------------
// POST /projects
// ---------------------------------------------------------------------------

/// Store one project and return its id.
pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = input.normalized();
    input.check_store_rules()?;

    let project = ProjectRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::store(SUBMIT_FAILED))?;

    tracing::info!(
        project_id = %project.id,
        tags = project.tags.len(),
        media = project.media.0.len(),
        "Project submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse::ok(SUBMITTED, CreatedId { id: project.id })),
    ))
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// The full project collection, newest first. No paging.
pub async fn list_projects(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool)
        .await
        .map_err(AppError::store(FETCH_FAILED))?;

    Ok(Json(projects))
}
