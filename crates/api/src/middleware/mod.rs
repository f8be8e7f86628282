//! Request extractors and response-header helpers.
//!
//! - [`doc_id::DocIdPath`] -- Parses and validates the `{id}` path segment.
//! - [`cors::preflight`] -- Answers `OPTIONS` without touching the database.

pub mod cors;
pub mod doc_id;
