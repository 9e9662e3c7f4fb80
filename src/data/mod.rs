//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! service layer never sees database rows. All queries, inserts, and deletes are
//! performed through these repositories.

pub mod pearl;

#[cfg(test)]
mod test;
