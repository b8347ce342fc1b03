// JSON API handlers.

pub mod directory;
pub mod supervisors;
