use super::*;

/// Tests removing pearls older than the cutoff.
///
/// Verifies that pearls strictly before the cutoff are deleted and pearls at or
/// after it are kept.
///
/// Expected: Ok with the count of deleted pearls
#[tokio::test]
async fn deletes_pearls_before_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = utc_day_start(now()) - Duration::days(30);

    PearlFactory::new(db)
        .created_at(cutoff - Duration::days(3))
        .build()
        .await?;
    PearlFactory::new(db)
        .coordinates(1, 0)
        .created_at(cutoff - Duration::seconds(1))
        .build()
        .await?;
    let kept_at_cutoff = PearlFactory::new(db)
        .coordinates(2, 0)
        .created_at(cutoff)
        .build()
        .await?;
    let kept_recent = PearlFactory::new(db)
        .coordinates(3, 0)
        .created_at(now())
        .build()
        .await?;

    let repo = PearlRepository::new(db);
    let deleted = repo.delete_older_than(cutoff).await?;

    assert_eq!(deleted, 2);
    let remaining: Vec<i32> = entity::prelude::Pearl::find()
        .all(db)
        .await?
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(remaining, vec![kept_at_cutoff.id, kept_recent.id]);

    Ok(())
}

/// Tests cleanup on an empty table.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deletes_nothing_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PearlRepository::new(db);
    assert_eq!(repo.delete_older_than(now()).await?, 0);

    Ok(())
}
