use super::*;

/// Tests finding a pearl recorded today at the given coordinates.
///
/// Expected: Ok(Some) with the matching pearl
#[tokio::test]
async fn finds_pearl_recorded_today() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = PearlFactory::new(db)
        .coordinates(5, -5)
        .created_at(now() - Duration::hours(2))
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let found = repo.find_today_at(5, -5, utc_day_start(now())).await?;

    assert_eq!(found.map(|p| p.id), Some(created.id));

    Ok(())
}

/// Tests that pearls from previous days are ignored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_pearls_before_today() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PearlFactory::new(db)
        .coordinates(5, -5)
        .created_at(utc_day_start(now()) - Duration::seconds(1))
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let found = repo.find_today_at(5, -5, utc_day_start(now())).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that only exact coordinates match.
///
/// Expected: Ok(None) for neighboring coordinates
#[tokio::test]
async fn requires_exact_coordinates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PearlFactory::new(db)
        .coordinates(5, -5)
        .created_at(now())
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let today = utc_day_start(now());

    assert!(repo.find_today_at(5, 5, today).await?.is_none());
    assert!(repo.find_today_at(-5, -5, today).await?.is_none());

    Ok(())
}
