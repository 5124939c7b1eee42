//! Domain types shared by the database and API crates.

pub mod error;
pub mod types;

pub use error::CoreError;
