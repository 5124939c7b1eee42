pub mod health;

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                          list (GET), create (POST)
/// /todos/{id}                     get, replace (PUT), delete
/// /todos/{id}/actions/title       patch title (PATCH)
/// /todos/{id}/actions/status      patch status (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/todos",
            get(handlers::todo::list_todos).post(handlers::todo::create_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::todo::get_todo)
                .put(handlers::todo::replace_todo)
                .delete(handlers::todo::delete_todo),
        )
        .route(
            "/todos/{id}/actions/title",
            patch(handlers::todo::patch_todo_title),
        )
        .route(
            "/todos/{id}/actions/status",
            patch(handlers::todo::patch_todo_status),
        )
}
