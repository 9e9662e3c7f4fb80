use super::*;

/// Tests deleting today's pearl at the given coordinates.
///
/// Expected: Ok(1) with the pearl removed
#[tokio::test]
async fn deletes_todays_pearl() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pearl = PearlFactory::new(db)
        .coordinates(-20, -30)
        .created_at(now())
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let deleted = repo
        .delete_today_at(-20, -30, PearlSector::TopLeft, utc_day_start(now()))
        .await?;

    assert_eq!(deleted, 1);
    let check = entity::prelude::Pearl::find_by_id(pearl.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests that pearls from previous days are kept.
///
/// Expected: Ok(0) with yesterday's pearl still stored
#[tokio::test]
async fn keeps_older_pearls() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PearlFactory::new(db)
        .coordinates(-20, -30)
        .created_at(now() - Duration::days(1))
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let deleted = repo
        .delete_today_at(-20, -30, PearlSector::TopLeft, utc_day_start(now()))
        .await?;

    assert_eq!(deleted, 0);
    assert_eq!(entity::prelude::Pearl::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the sector must match the stored label.
///
/// Expected: Ok(0) when the sector differs
#[tokio::test]
async fn requires_matching_sector() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PearlFactory::new(db)
        .coordinates(-20, -30)
        .created_at(now())
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let deleted = repo
        .delete_today_at(-20, -30, PearlSector::BottomRight, utc_day_start(now()))
        .await?;

    assert_eq!(deleted, 0);

    Ok(())
}
