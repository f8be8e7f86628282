pub mod project;
pub mod race;
