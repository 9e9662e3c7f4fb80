//! Pearlboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the pearlboard
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting pearl records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Pearl;
//!
//! #[tokio::test]
//! async fn test_pearl_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Pearl)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
