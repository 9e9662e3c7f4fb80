use super::*;

/// Tests that the window includes its start and excludes its end.
///
/// Expected: Ok with only pearls inside `[start, end)`
#[tokio::test]
async fn includes_start_and_excludes_end() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = utc_day_start(now()) - Duration::days(1);
    let end = utc_day_start(now());

    let at_start = PearlFactory::new(db).created_at(start).build().await?;
    let inside = PearlFactory::new(db)
        .coordinates(1, 1)
        .created_at(start + Duration::hours(12))
        .build()
        .await?;
    PearlFactory::new(db)
        .coordinates(2, 2)
        .created_at(end)
        .build()
        .await?;
    PearlFactory::new(db)
        .coordinates(3, 3)
        .created_at(start - Duration::seconds(1))
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let pearls = repo.get_created_between(start, end).await?;

    let ids: Vec<i32> = pearls.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![at_start.id, inside.id]);

    Ok(())
}

/// Tests that results come back in insertion order regardless of timestamps.
///
/// Expected: Ok with pearls ordered by id
#[tokio::test]
async fn returns_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = PearlFactory::new(db)
        .coordinates(10, 10)
        .created_at(now())
        .build()
        .await?;
    let second = PearlFactory::new(db)
        .coordinates(-10, 10)
        .created_at(now() - Duration::hours(3))
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let pearls = repo.get_created_since(utc_day_start(now())).await?;

    let ids: Vec<i32> = pearls.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that malformed stored colors degrade to white instead of failing.
///
/// Expected: Ok with the pearl returned as white
#[tokio::test]
async fn degrades_malformed_colors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PearlFactory::new(db)
        .color("not-a-color")
        .created_at(now())
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let pearls = repo.get_created_since(utc_day_start(now())).await?;

    assert_eq!(pearls.len(), 1);
    assert_eq!(pearls[0].color, PearlColor::White);

    Ok(())
}
