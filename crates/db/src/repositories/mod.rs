//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod document_history_repo;
pub mod document_repo;
pub mod project_repo;
pub mod relationship_repo;

pub use document_history_repo::DocumentHistoryRepo;
pub use document_repo::DocumentRepo;
pub use project_repo::ProjectRepo;
pub use relationship_repo::RelationshipRepo;
