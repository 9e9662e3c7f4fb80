use crate::{
    data::pearl::PearlRepository,
    model::{
        color::PearlColor,
        pearl::{CreatePearlParam, PearlSector},
    },
    util::date::utc_day_start,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory::pearl::PearlFactory};

mod count_by_user_between;
mod create;
mod delete_older_than;
mod delete_today_at;
mod find_today_at;
mod get_created_between;

/// Fixed reference time, a Wednesday afternoon.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 13, 15, 30, 0).unwrap()
}
