use crate::types::DbId;

/// Domain-level errors.
///
/// The todo domain has a single failure mode of its own: a row that does
/// not exist. Everything else (bad input, database trouble) is classified
/// at the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
