//! Storage error types

use grocery_types::Entity;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{entity} {id} does not exist")]
    MissingReference { entity: Entity, id: i64 },

    #[error("{entity} {id} is still referenced by existing prices")]
    StillReferenced { entity: Entity, id: i64 },

    #[error("{entity} {id} was not found after commit")]
    Vanished { entity: Entity, id: i64 },
}

impl StorageError {
    /// True when SQLite itself rejected a write on a foreign key.
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            StorageError::Sqlx(sqlx::Error::Database(e)) => e.is_foreign_key_violation(),
            _ => false,
        }
    }
}
