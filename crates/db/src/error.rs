use scribe_core::error::{codes, CoreError};
use scribe_core::types::DbId;

/// Error type for persistence-layer operations.
///
/// Domain failures (validation, not-found) pass through as [`CoreError`];
/// sqlx failures surface as `Persistence` after the enclosing transaction
/// has rolled back.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Persistence failure: {0}")]
    Persistence(#[from] sqlx::Error),
}

impl DbError {
    /// The stable numeric code clients key their error handling on.
    pub fn code(&self) -> u32 {
        match self {
            DbError::Core(err) => err.code(),
            DbError::Persistence(_) => codes::PERSISTENCE,
        }
    }

    pub fn project_not_found(id: DbId) -> Self {
        DbError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        })
    }
}
