use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::pearl::PearlRepository,
    error::AppError,
    model::{
        color::PearlColor,
        map::MapGeometry,
        pearl::{AddPearlOutcome, CreatePearlParam, ListPearlsParam, Pearl, PearlListing, PearlSector},
    },
    util::date::utc_day_start,
};

/// Pearl rules applied on top of the repository.
///
/// Every operation scopes "today" to the UTC day containing the `now` argument, so the
/// caller decides the clock.
pub struct PearlService<'a> {
    db: &'a DatabaseConnection,
    geometry: MapGeometry,
}

impl<'a> PearlService<'a> {
    pub fn new(db: &'a DatabaseConnection, geometry: MapGeometry) -> Self {
        Self { db, geometry }
    }

    /// Records a pearl unless it duplicates today's data or repeats yesterday's.
    ///
    /// The today check is advisory; the unique `(x, y, day)` index settles races
    /// between concurrent adds and the loser gets `AlreadyExists`.
    ///
    /// # Arguments
    /// - `param` - Coordinates, color and submitting user
    /// - `now` - Current time
    ///
    /// # Returns
    /// - `Ok(AddPearlOutcome::Added)` - Pearl stored
    /// - `Ok(AddPearlOutcome::AlreadyExists)` - A pearl is already recorded there today
    /// - `Ok(AddPearlOutcome::NeedsConfirmation)` - Yesterday had the same color there
    /// - `Err(AppError::BadRequest)` - Coordinates outside the world bounds
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add(
        &self,
        param: CreatePearlParam,
        now: DateTime<Utc>,
    ) -> Result<AddPearlOutcome, AppError> {
        self.check_bounds(param.x, param.y)?;

        let repo = PearlRepository::new(self.db);
        let today_start = utc_day_start(now);

        if repo.find_today_at(param.x, param.y, today_start).await?.is_some() {
            return Ok(AddPearlOutcome::AlreadyExists);
        }

        let yesterday = repo
            .get_created_between(today_start - Duration::days(1), today_start)
            .await?;
        if yesterday
            .iter()
            .any(|p| p.x == param.x && p.y == param.y && p.color == param.color)
        {
            return Ok(AddPearlOutcome::NeedsConfirmation);
        }

        insert_unless_taken(&repo, param, now).await
    }

    /// Records a pearl the user confirmed despite yesterday's match.
    ///
    /// Today's duplicate check is repeated since another user may have recorded the
    /// same location while the confirmation was pending.
    pub async fn add_confirmed(
        &self,
        param: CreatePearlParam,
        now: DateTime<Utc>,
    ) -> Result<AddPearlOutcome, AppError> {
        self.check_bounds(param.x, param.y)?;

        let repo = PearlRepository::new(self.db);

        if repo
            .find_today_at(param.x, param.y, utc_day_start(now))
            .await?
            .is_some()
        {
            return Ok(AddPearlOutcome::AlreadyExists);
        }

        insert_unless_taken(&repo, param, now).await
    }

    /// Removes today's pearl at the given coordinates.
    ///
    /// # Returns
    /// - `Ok(true)` - A pearl was removed
    /// - `Ok(false)` - No pearl recorded there today
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn clear(&self, x: i32, y: i32, now: DateTime<Utc>) -> Result<bool, AppError> {
        let repo = PearlRepository::new(self.db);
        let sector = PearlSector::from_coordinates(x, y);

        let deleted = repo
            .delete_today_at(x, y, sector, utc_day_start(now))
            .await?;

        Ok(deleted > 0)
    }

    /// Lists today's pearls grouped by color.
    ///
    /// The sector filter applies before the color filter, and the first one that
    /// empties the list is reported.
    pub async fn list(
        &self,
        filter: ListPearlsParam,
        now: DateTime<Utc>,
    ) -> Result<PearlListing, AppError> {
        let repo = PearlRepository::new(self.db);
        let mut pearls = repo.get_created_since(utc_day_start(now)).await?;

        if pearls.is_empty() {
            return Ok(PearlListing::Empty);
        }

        if let Some(sector) = filter.sector {
            pearls.retain(|p| p.sector() == sector);
            if pearls.is_empty() {
                return Ok(PearlListing::NoneInSector(sector));
            }
        }

        if let Some(color) = filter.color {
            pearls.retain(|p| p.color == color);
            if pearls.is_empty() {
                return Ok(PearlListing::NoneWithColor(color));
            }
        }

        Ok(PearlListing::Grouped(group_by_color(pearls)))
    }

    /// Gets today's pearls in paint order, optionally limited to one color.
    pub async fn map_pearls(
        &self,
        color: Option<PearlColor>,
        now: DateTime<Utc>,
    ) -> Result<Vec<Pearl>, AppError> {
        let repo = PearlRepository::new(self.db);
        let mut pearls = repo.get_created_since(utc_day_start(now)).await?;

        if let Some(color) = color {
            pearls.retain(|p| p.color == color);
        }

        Ok(pearls)
    }

    /// Deletes pearls recorded more than `retention_days` days before today.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of pearls removed
    pub async fn cleanup(&self, retention_days: u32, now: DateTime<Utc>) -> Result<u64, AppError> {
        let repo = PearlRepository::new(self.db);
        let cutoff = utc_day_start(now) - Duration::days(i64::from(retention_days));

        Ok(repo.delete_older_than(cutoff).await?)
    }

    fn check_bounds(&self, x: i32, y: i32) -> Result<(), AppError> {
        if self.geometry.contains(x, y) {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Coordinates must be between {} and {}.",
                self.geometry.world_min, self.geometry.world_max
            )))
        }
    }
}

/// Inserts a pearl, reporting a lost race on the location index as `AlreadyExists`.
async fn insert_unless_taken(
    repo: &PearlRepository<'_>,
    param: CreatePearlParam,
    now: DateTime<Utc>,
) -> Result<AddPearlOutcome, AppError> {
    match repo.create(param, now).await {
        Ok(pearl) => Ok(AddPearlOutcome::Added(pearl)),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::debug!("Concurrent add lost the race for its location: {}", e);
            Ok(AddPearlOutcome::AlreadyExists)
        }
        Err(e) => Err(e.into()),
    }
}

/// Groups pearls by color in display order, each group sorted by x then y.
fn group_by_color(pearls: Vec<Pearl>) -> Vec<(PearlColor, Vec<Pearl>)> {
    let mut groups: Vec<(PearlColor, Vec<Pearl>)> = Vec::new();

    for color in PearlColor::ALL {
        let mut group: Vec<Pearl> = pearls.iter().filter(|p| p.color == color).cloned().collect();
        if group.is_empty() {
            continue;
        }
        group.sort_by_key(|p| (p.x, p.y));
        groups.push((color, group));
    }

    groups
}
