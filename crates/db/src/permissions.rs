//! Visibility and permission resolution.
//!
//! `can_view` evaluates its gates in a fixed order: project existence,
//! public state, password match, creator override, then the relationship
//! lookup. A successful password check short-circuits before any
//! relationship query, keeping the common anonymous-with-password path to
//! a single cache read.

use sqlx::PgPool;

use scribe_core::membership::Membership;
use scribe_core::project::{password_matches, VisibilityState};
use scribe_core::types::DbId;

use crate::cache::ProjectCache;
use crate::repositories::RelationshipRepo;

/// Whether a caller may view a project's documents.
pub async fn can_view(
    pool: &PgPool,
    cache: &ProjectCache,
    project_id: DbId,
    member_id: Option<DbId>,
    password: Option<&str>,
) -> Result<bool, sqlx::Error> {
    let Some(project) = cache.get(pool, project_id, false).await? else {
        return Ok(false);
    };

    match project.visibility_state() {
        Some(VisibilityState::Public) => return Ok(true),
        Some(VisibilityState::PasswordProtected) => {
            if let (Some(supplied), Some(stored)) = (password, project.password.as_deref()) {
                if password_matches(supplied, stored) {
                    return Ok(true);
                }
            }
        }
        // Private, or an undecodable legacy value treated as private.
        _ => {}
    }

    let Some(member_id) = member_id else {
        return Ok(false);
    };
    if member_id == project.created_by {
        return Ok(true);
    }

    let rel = RelationshipRepo::find_by_project_and_member(pool, project_id, member_id).await?;
    Ok(rel.is_some())
}

/// Whether a caller may edit a project's documents.
///
/// Any recorded relationship grants edit, owner or participant alike.
/// Non-positive ids short-circuit to false without a lookup.
pub async fn can_edit(
    pool: &PgPool,
    project_id: DbId,
    member_id: DbId,
) -> Result<bool, sqlx::Error> {
    if project_id <= 0 || member_id <= 0 {
        return Ok(false);
    }
    let rel = RelationshipRepo::find_by_project_and_member(pool, project_id, member_id).await?;
    Ok(rel.is_some())
}

/// Resolve a member's membership in a project with a single lookup.
pub async fn membership(
    pool: &PgPool,
    project_id: DbId,
    member_id: DbId,
) -> Result<Membership, sqlx::Error> {
    let rel = RelationshipRepo::find_by_project_and_member(pool, project_id, member_id).await?;
    Ok(Membership::from_role(rel.map(|r| r.role)))
}

/// Whether the member holds the owner role for the project.
pub async fn is_owner(pool: &PgPool, project_id: DbId, member_id: DbId) -> Result<bool, sqlx::Error> {
    Ok(membership(pool, project_id, member_id).await?.is_owner())
}

/// Whether the member holds the participant role for the project.
pub async fn is_partner(
    pool: &PgPool,
    project_id: DbId,
    member_id: DbId,
) -> Result<bool, sqlx::Error> {
    Ok(membership(pool, project_id, member_id).await?.is_partner())
}
