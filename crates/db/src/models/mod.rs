mod decode;

pub mod project;
pub mod race;
