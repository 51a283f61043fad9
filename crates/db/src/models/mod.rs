//! Row structs and DTOs for the wiki tables.

pub mod document;
pub mod project;
pub mod relationship;
