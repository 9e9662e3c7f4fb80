use super::*;

async fn record(
    db: &sea_orm::DatabaseConnection,
    user: &str,
    x: i32,
    created_at: DateTime<Utc>,
) -> Result<(), DbErr> {
    PearlFactory::new(db)
        .coordinates(x, 0)
        .submitted_by(user)
        .created_at(created_at)
        .build()
        .await?;
    Ok(())
}

/// Tests ranking users by pearl count.
///
/// Verifies that counts are grouped per user, sorted by count descending, with
/// ties broken by user name.
///
/// Expected: Ok with entries in rank order
#[tokio::test]
async fn ranks_users_by_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let t = now();
    record(db, "zed", 0, t).await?;
    record(db, "zed", 1, t).await?;
    record(db, "zed", 2, t).await?;
    record(db, "bob", 3, t).await?;
    record(db, "amy", 4, t).await?;

    let repo = PearlRepository::new(db);
    let entries = repo
        .count_by_user_between(t - Duration::days(1), t + Duration::days(1))
        .await?;

    let ranked: Vec<(&str, u64)> = entries
        .iter()
        .map(|e| (e.submitted_by.as_str(), e.count))
        .collect();
    assert_eq!(ranked, vec![("zed", 3), ("amy", 1), ("bob", 1)]);

    Ok(())
}

/// Tests that pearls outside the window are not counted.
///
/// Expected: Ok with only in-window pearls counted
#[tokio::test]
async fn counts_only_inside_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let start = utc_day_start(now()) - Duration::days(7);
    let end = utc_day_start(now());

    record(db, "amy", 0, start).await?;
    record(db, "amy", 1, end - Duration::seconds(1)).await?;
    record(db, "amy", 2, end).await?;
    record(db, "bob", 3, start - Duration::seconds(1)).await?;

    let repo = PearlRepository::new(db);
    let entries = repo.count_by_user_between(start, end).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].submitted_by, "amy");
    assert_eq!(entries[0].count, 2);

    Ok(())
}
