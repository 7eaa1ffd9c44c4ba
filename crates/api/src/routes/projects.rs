//! Mounted at `/projects` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// ```text
/// POST   /    -> create_project
/// GET    /    -> list_projects
/// *      /    -> 405 envelope
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(projects::create_project)
            .get(projects::list_projects)
            .fallback(super::method_not_allowed),
    )
}
