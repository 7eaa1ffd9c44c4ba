pub mod feedback;
pub mod health;
pub mod projects;

use axum::extract::OriginalUri;
use axum::http::Method;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /feedback        POST create, GET list
/// /projects        POST create, GET list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/feedback", feedback::router())
        .nest("/projects", projects::router())
}

/// Method fallback for the resource routes, so a wrong verb gets the same
/// error envelope as every other failure.
pub(crate) async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
