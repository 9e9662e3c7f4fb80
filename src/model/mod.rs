//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and are what the service, render, and bot layers work with.

pub mod color;
pub mod leaderboard;
pub mod map;
pub mod pearl;
