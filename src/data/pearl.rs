use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{
    leaderboard::LeaderboardEntry,
    pearl::{CreatePearlParam, Pearl, PearlSector},
};

pub struct PearlRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PearlRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new pearl
    ///
    /// The sector column is derived from the coordinates and the day column from
    /// `created_at`. A second pearl at the same coordinates on the same UTC day
    /// fails with a unique constraint violation.
    ///
    /// # Arguments
    /// - `param`: Coordinates, color and submitting user
    /// - `created_at`: Time the pearl was recorded
    ///
    /// # Returns
    /// - `Ok(Pearl)`: The created pearl
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        param: CreatePearlParam,
        created_at: DateTime<Utc>,
    ) -> Result<Pearl, DbErr> {
        let sector = PearlSector::from_coordinates(param.x, param.y);

        let pearl = entity::pearl::ActiveModel {
            x: ActiveValue::Set(param.x),
            y: ActiveValue::Set(param.y),
            color: ActiveValue::Set(param.color.name().to_string()),
            sector: ActiveValue::Set(sector.as_str().to_string()),
            submitted_by: ActiveValue::Set(param.submitted_by),
            created_at: ActiveValue::Set(created_at),
            day: ActiveValue::Set(created_at.date_naive()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Pearl::from_entity(pearl))
    }

    /// Finds the pearl recorded at the given coordinates since `today_start`
    ///
    /// # Returns
    /// - `Ok(Some(Pearl))`: A pearl is already recorded there today
    /// - `Ok(None)`: No pearl at these coordinates today
    /// - `Err(DbErr)`: Database error
    pub async fn find_today_at(
        &self,
        x: i32,
        y: i32,
        today_start: DateTime<Utc>,
    ) -> Result<Option<Pearl>, DbErr> {
        let pearl = entity::prelude::Pearl::find()
            .filter(entity::pearl::Column::X.eq(x))
            .filter(entity::pearl::Column::Y.eq(y))
            .filter(entity::pearl::Column::CreatedAt.gte(today_start))
            .order_by_asc(entity::pearl::Column::Id)
            .one(self.db)
            .await?;

        Ok(pearl.map(Pearl::from_entity))
    }

    /// Gets pearls created in `[start, end)`, in insertion order
    pub async fn get_created_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Pearl>, DbErr> {
        let pearls = entity::prelude::Pearl::find()
            .filter(entity::pearl::Column::CreatedAt.gte(start))
            .filter(entity::pearl::Column::CreatedAt.lt(end))
            .order_by_asc(entity::pearl::Column::Id)
            .all(self.db)
            .await?;

        Ok(pearls.into_iter().map(Pearl::from_entity).collect())
    }

    /// Gets pearls created at or after `start`, in insertion order
    pub async fn get_created_since(&self, start: DateTime<Utc>) -> Result<Vec<Pearl>, DbErr> {
        let pearls = entity::prelude::Pearl::find()
            .filter(entity::pearl::Column::CreatedAt.gte(start))
            .order_by_asc(entity::pearl::Column::Id)
            .all(self.db)
            .await?;

        Ok(pearls.into_iter().map(Pearl::from_entity).collect())
    }

    /// Deletes today's pearl at the given coordinates
    ///
    /// Matches on the stored sector as well as the coordinates so rows written with
    /// a stale sector label are left alone.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of pearls deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_today_at(
        &self,
        x: i32,
        y: i32,
        sector: PearlSector,
        today_start: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Pearl::delete_many()
            .filter(entity::pearl::Column::X.eq(x))
            .filter(entity::pearl::Column::Y.eq(y))
            .filter(entity::pearl::Column::Sector.eq(sector.as_str()))
            .filter(entity::pearl::Column::CreatedAt.gte(today_start))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes pearls created before `cutoff`
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of pearls deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Pearl::delete_many()
            .filter(entity::pearl::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts pearls per submitting user created in `[start, end)`
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)`: Entries sorted by count descending, then name
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_user_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let rows: Vec<(String, i64)> = entity::prelude::Pearl::find()
            .select_only()
            .column(entity::pearl::Column::SubmittedBy)
            .column_as(entity::pearl::Column::Id.count(), "count")
            .filter(entity::pearl::Column::CreatedAt.gte(start))
            .filter(entity::pearl::Column::CreatedAt.lt(end))
            .group_by(entity::pearl::Column::SubmittedBy)
            .order_by_desc(entity::pearl::Column::Id.count())
            .order_by_asc(entity::pearl::Column::SubmittedBy)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(submitted_by, count)| LeaderboardEntry {
                submitted_by,
                count: count.unsigned_abs(),
            })
            .collect())
    }
}
