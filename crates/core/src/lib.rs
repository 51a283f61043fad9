//! Domain logic for the scribe wiki backend.
//!
//! This crate has zero internal dependencies so the repository layer, the
//! API, and any future CLI tooling can all share the same visibility rules,
//! field validation, membership roles, and document-tree algorithms.

pub mod error;
pub mod membership;
pub mod project;
pub mod tree;
pub mod types;
