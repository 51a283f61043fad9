//! Project visibility states and field validation.
//!
//! Validation runs before any transaction begins, so a rejected draft never
//! touches the database. Each rule carries the stable numeric code clients
//! rely on (see [`crate::error::codes`]).

use serde::{Deserialize, Serialize};

use crate::error::{codes, CoreError};
use crate::types::DbId;

/// Project name must be 2-50 characters.
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// Project description must be at most 1000 characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Password for password-protected projects must be 6-20 bytes.
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Who may view a project's documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityState {
    /// Creator and members only.
    Private,
    /// Anyone.
    Public,
    /// Anyone presenting the project password, plus creator and members.
    PasswordProtected,
}

impl VisibilityState {
    /// Decode the stored SMALLINT representation.
    pub fn from_i16(raw: i16) -> Option<Self> {
        match raw {
            0 => Some(VisibilityState::Private),
            1 => Some(VisibilityState::Public),
            2 => Some(VisibilityState::PasswordProtected),
            _ => None,
        }
    }

    pub fn as_i16(self) -> i16 {
        match self {
            VisibilityState::Private => 0,
            VisibilityState::Public => 1,
            VisibilityState::PasswordProtected => 2,
        }
    }
}

/// Caller-supplied fields for creating or updating a project.
///
/// `id: None` means a new project; the owner relationship for `creator_id`
/// is staged and persisted atomically with the row.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDraft {
    pub id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    /// Raw visibility value; validated against {0, 1, 2}.
    pub visibility: i16,
    pub password: Option<String>,
    pub creator_id: DbId,
}

/// Validate a project name (2-50 characters, counted as Unicode scalars).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let chars = name.chars().count();
    if chars < NAME_MIN_CHARS || chars > NAME_MAX_CHARS {
        return Err(CoreError::validation(
            codes::NAME_LENGTH,
            format!("Project name must be {NAME_MIN_CHARS}-{NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Validate a project description (at most 1000 characters).
pub fn validate_description(description: Option<&str>) -> Result<(), CoreError> {
    if let Some(desc) = description {
        if desc.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(CoreError::validation(
                codes::DESCRIPTION_LENGTH,
                format!("Project description must be at most {DESCRIPTION_MAX_CHARS} characters"),
            ));
        }
    }
    Ok(())
}

/// Validate the raw visibility value, returning the decoded state.
pub fn validate_visibility(raw: i16) -> Result<VisibilityState, CoreError> {
    VisibilityState::from_i16(raw).ok_or_else(|| {
        CoreError::validation(codes::INVALID_VISIBILITY, "Invalid project visibility state")
    })
}

/// Validate and normalize the password for the given visibility state.
///
/// Password-protected projects require a 6-20 byte password; every other
/// state forces the stored password to `None` so the invariant
/// `password is set <=> state is password-protected` holds after every
/// successful save.
pub fn normalize_password(
    state: VisibilityState,
    password: Option<&str>,
) -> Result<Option<String>, CoreError> {
    if state != VisibilityState::PasswordProtected {
        return Ok(None);
    }
    match password {
        Some(p) if (PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&p.len()) => {
            Ok(Some(p.to_string()))
        }
        _ => Err(CoreError::validation(
            codes::PASSWORD_LENGTH,
            format!("Project password must be {PASSWORD_MIN_LEN}-{PASSWORD_MAX_LEN} characters"),
        )),
    }
}

/// Run every field rule against a draft, returning the decoded visibility
/// state and the normalized password on success.
pub fn validate_draft(draft: &ProjectDraft) -> Result<(VisibilityState, Option<String>), CoreError> {
    validate_name(&draft.name)?;
    validate_description(draft.description.as_deref())?;
    let state = validate_visibility(draft.visibility)?;
    let password = normalize_password(state, draft.password.as_deref())?;
    Ok((state, password))
}

/// Case-insensitive password comparison for the password gate.
pub fn password_matches(supplied: &str, stored: &str) -> bool {
    supplied.eq_ignore_ascii_case(stored)
}
