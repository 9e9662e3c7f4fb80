//! SeaORM entities for the pearlboard database.

pub mod pearl;
pub mod prelude;
