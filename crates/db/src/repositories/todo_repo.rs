//! Repository for the `todos` table.

use sqlx::PgPool;
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, ReplaceTodo, Todo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, status";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List every todo. No ORDER BY; callers get database order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos");
        sqlx::query_as::<_, Todo>(&query).fetch_all(pool).await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new todo, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, status)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Replace both fields of a todo. Returns `None` when no row matched.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ReplaceTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "UPDATE todos SET title = $1, status = $2 WHERE id = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update only the title. Returns whether a row was affected.
    pub async fn set_title(
        pool: &PgPool,
        id: DbId,
        title: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET title = $1 WHERE id = $2")
            .bind(title)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Update only the status. Returns whether a row was affected.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE todos SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a todo. Returns whether a row was affected.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
