use sea_orm::entity::prelude::*;

/// A recorded pearl location.
///
/// `color` holds the lowercase color name and `sector` the snake_case quadrant
/// label. Both are written by the application layer and validated on read.
/// `day` is the UTC date of `created_at`; `(x, y, day)` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pearl")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub x: i32,
    pub y: i32,
    pub color: String,
    pub sector: String,
    pub submitted_by: String,
    pub created_at: DateTimeUtc,
    pub day: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
