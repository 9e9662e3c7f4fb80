//! Pearl factory for creating test pearl entities.

use crate::factory::helpers::{next_id, sector_label};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test pearls with customizable fields.
///
/// The stored sector and day are always derived from the coordinates and creation
/// time so factory rows look exactly like rows written by the application. Two
/// pearls at the same coordinates on the same UTC day violate the location index.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::pearl::PearlFactory;
///
/// let pearl = PearlFactory::new(&db)
///     .coordinates(100, -20)
///     .color("cyan")
///     .created_at(Utc::now() - chrono::Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct PearlFactory<'a> {
    db: &'a DatabaseConnection,
    x: i32,
    y: i32,
    color: String,
    submitted_by: String,
    created_at: DateTime<Utc>,
}

impl<'a> PearlFactory<'a> {
    /// Creates a new PearlFactory with default values.
    ///
    /// Defaults:
    /// - coordinates: `(0, 0)`
    /// - color: `"red"`
    /// - submitted_by: `"user_{id}"` where id is auto-incremented
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            x: 0,
            y: 0,
            color: "red".to_string(),
            submitted_by: format!("user_{}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the world coordinates of the pearl.
    pub fn coordinates(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the stored color text.
    ///
    /// Any string is accepted so tests can exercise malformed records.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the name of the user who recorded the pearl.
    pub fn submitted_by(mut self, submitted_by: impl Into<String>) -> Self {
        self.submitted_by = submitted_by.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the pearl entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::pearl::Model)` - Created pearl entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pearl::Model, DbErr> {
        entity::pearl::ActiveModel {
            id: ActiveValue::NotSet,
            x: ActiveValue::Set(self.x),
            y: ActiveValue::Set(self.y),
            color: ActiveValue::Set(self.color),
            sector: ActiveValue::Set(sector_label(self.x, self.y).to_string()),
            submitted_by: ActiveValue::Set(self.submitted_by),
            created_at: ActiveValue::Set(self.created_at),
            day: ActiveValue::Set(self.created_at.date_naive()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pearl with default values.
///
/// Shorthand for `PearlFactory::new(db).build().await`.
pub async fn create_pearl(db: &DatabaseConnection) -> Result<entity::pearl::Model, DbErr> {
    PearlFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_pearl_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let pearl = create_pearl(db).await?;

        assert_eq!((pearl.x, pearl.y), (0, 0));
        assert_eq!(pearl.color, "red");
        assert_eq!(pearl.sector, "bottom_right");
        assert!(pearl.submitted_by.starts_with("user_"));

        Ok(())
    }

    #[tokio::test]
    async fn derives_sector_from_custom_coordinates() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let pearl = PearlFactory::new(db)
            .coordinates(-5, -7)
            .color("blue")
            .submitted_by("scout")
            .build()
            .await?;

        assert_eq!(pearl.sector, "top_left");
        assert_eq!(pearl.color, "blue");
        assert_eq!(pearl.submitted_by, "scout");

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_pearls() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_pearl(db).await?;
        let second = PearlFactory::new(db).coordinates(3, 4).build().await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.submitted_by, second.submitted_by);

        Ok(())
    }
}
