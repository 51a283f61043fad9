//! HTTP handler functions, grouped by resource.

pub mod document;
pub mod project;
