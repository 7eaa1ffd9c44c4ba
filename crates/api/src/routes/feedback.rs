//! Mounted at `/feedback` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::feedback;
use crate::state::AppState;

/// ```text
/// POST   /    -> create_feedback
/// GET    /    -> list_feedback
/// *      /    -> 405 envelope
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(feedback::create_feedback)
            .get(feedback::list_feedback)
            .fallback(super::method_not_allowed),
    )
}
