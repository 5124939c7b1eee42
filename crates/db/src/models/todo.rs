//! Todo model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::DbId;

/// A row from the `todos` table.
///
/// `title` and `status` are nullable in the schema and optional on the
/// wire; absent fields serialize as JSON `null`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: Option<String>,
    pub status: Option<String>,
}

/// DTO for creating a new todo.
#[derive(Debug, Deserialize)]
pub struct CreateTodo {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// DTO for replacing a todo in full (PUT).
#[derive(Debug, Deserialize)]
pub struct ReplaceTodo {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// DTO for the title-only patch action.
#[derive(Debug, Deserialize)]
pub struct PatchTitle {
    pub title: Option<String>,
}

/// DTO for the status-only patch action.
#[derive(Debug, Deserialize)]
pub struct PatchStatus {
    pub status: Option<String>,
}
