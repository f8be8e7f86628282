//! Domain vocabulary shared by the db and api crates.

pub mod error;
pub mod id;
pub mod types;
