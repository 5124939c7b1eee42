//! Handlers for the todo CRUD endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, PatchStatus, PatchTitle, ReplaceTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

fn todo_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Todo", id })
}

/// GET /todos
///
/// List all todos. Order is whatever the database returns.
pub async fn list_todos(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list_all(&state.pool).await?;
    Ok(Json(todos))
}

/// GET /todos/{id}
///
/// Get a single todo by ID.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| todo_not_found(id))?;

    Ok(Json(todo))
}

/// POST /todos
///
/// Create a new todo. The database assigns the id.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
///
/// Replace both fields of a todo.
pub async fn replace_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ReplaceTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = TodoRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or_else(|| todo_not_found(id))?;

    tracing::info!(todo_id = id, "Todo replaced");

    Ok(Json(todo))
}

/// PATCH /todos/{id}/actions/title
///
/// Update only the title. Responds with a bare 200 on success.
pub async fn patch_todo_title(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchTitle>,
) -> AppResult<impl IntoResponse> {
    let updated = TodoRepo::set_title(&state.pool, id, input.title.as_deref()).await?;
    if !updated {
        return Err(todo_not_found(id));
    }

    tracing::info!(todo_id = id, "Todo title updated");

    Ok(StatusCode::OK)
}

/// PATCH /todos/{id}/actions/status
///
/// Update only the status. Responds with a bare 200 on success.
pub async fn patch_todo_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<PatchStatus>,
) -> AppResult<impl IntoResponse> {
    let updated = TodoRepo::set_status(&state.pool, id, input.status.as_deref()).await?;
    if !updated {
        return Err(todo_not_found(id));
    }

    tracing::info!(todo_id = id, "Todo status updated");

    Ok(StatusCode::OK)
}

/// DELETE /todos/{id}
///
/// Delete a todo. Responds with the literal JSON string `"Success"`, which
/// is the wire format existing clients expect.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(todo_not_found(id));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json("Success"))
}
