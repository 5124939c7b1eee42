//! Request handlers.
//!
//! Handlers delegate to [`TodoRepo`](todo_db::repositories::TodoRepo) and
//! map failures via [`AppError`](crate::error::AppError); request binding
//! failures (malformed JSON, non-numeric path ids) are rejected by the
//! extractors before a handler runs.

pub mod todo;
