use crate::types::DbId;

/// Stable numeric error codes, preserved for client-side mapping.
pub mod codes {
    /// Project name outside the 2-50 character range.
    pub const NAME_LENGTH: u32 = 40201;
    /// Project description longer than 1000 characters.
    pub const DESCRIPTION_LENGTH: u32 = 40202;
    /// Project password outside the 6-20 byte range.
    pub const PASSWORD_LENGTH: u32 = 40203;
    /// Visibility value outside {0, 1, 2}.
    pub const INVALID_VISIBILITY: u32 = 40204;
    /// Referenced project does not exist.
    pub const PROJECT_NOT_FOUND: u32 = 40206;
    /// Transactional write failed; generic server-side code.
    pub const PERSISTENCE: u32 = 500;
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {message}")]
    Validation { code: u32, message: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    pub fn validation(code: u32, message: impl Into<String>) -> Self {
        CoreError::Validation {
            code,
            message: message.into(),
        }
    }

    /// The stable numeric code clients key their error handling on.
    pub fn code(&self) -> u32 {
        match self {
            CoreError::Validation { code, .. } => *code,
            CoreError::NotFound { .. } => codes::PROJECT_NOT_FOUND,
        }
    }
}
