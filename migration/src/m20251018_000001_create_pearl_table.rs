use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pearl::Table)
                    .if_not_exists()
                    .col(pk_auto(Pearl::Id))
                    .col(integer(Pearl::X))
                    .col(integer(Pearl::Y))
                    .col(string(Pearl::Color))
                    .col(string(Pearl::Sector))
                    .col(string(Pearl::SubmittedBy))
                    .col(
                        timestamp_with_time_zone(Pearl::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(date(Pearl::Day))
                    .to_owned(),
            )
            .await?;

        // Day and week windows all filter on created_at
        manager
            .create_index(
                Index::create()
                    .name("idx_pearl_created_at")
                    .table(Pearl::Table)
                    .col(Pearl::CreatedAt)
                    .to_owned(),
            )
            .await?;

        // One pearl per location per day
        manager
            .create_index(
                Index::create()
                    .name("idx_pearl_location_day")
                    .table(Pearl::Table)
                    .col(Pearl::X)
                    .col(Pearl::Y)
                    .col(Pearl::Day)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pearl_location_day")
                    .table(Pearl::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_pearl_created_at")
                    .table(Pearl::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pearl::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pearl {
    Table,
    Id,
    X,
    Y,
    Color,
    Sector,
    SubmittedBy,
    CreatedAt,
    Day,
}
