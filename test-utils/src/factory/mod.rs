//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let pearl = factory::create_pearl(&db).await?;
//!
//!     // Customize through the builder
//!     let pearl = factory::pearl::PearlFactory::new(&db)
//!         .coordinates(-12, 40)
//!         .color("blue")
//!         .submitted_by("harbor_watch")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod helpers;
pub mod pearl;

pub use pearl::create_pearl;
