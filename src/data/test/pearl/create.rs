use super::*;

/// Tests creating a new pearl.
///
/// Verifies that the repository stores the coordinates, color name, submitting user
/// and the provided creation time, and derives the sector column.
///
/// Expected: Ok with pearl created
#[tokio::test]
async fn creates_pearl() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PearlRepository::new(db);
    let pearl = repo
        .create(
            CreatePearlParam {
                x: -12,
                y: 40,
                color: PearlColor::Cyan,
                submitted_by: "scout".to_string(),
            },
            now(),
        )
        .await?;

    assert_eq!((pearl.x, pearl.y), (-12, 40));
    assert_eq!(pearl.color, PearlColor::Cyan);
    assert_eq!(pearl.submitted_by, "scout");
    assert_eq!(pearl.created_at, now());
    assert_eq!(pearl.sector(), PearlSector::BottomLeft);

    let stored = entity::prelude::Pearl::find_by_id(pearl.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.color, "cyan");
    assert_eq!(stored.sector, "bottom_left");

    Ok(())
}

/// Tests that ids follow insertion order.
///
/// Expected: Ok with strictly increasing ids
#[tokio::test]
async fn assigns_increasing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PearlRepository::new(db);
    let mut last = 0;
    for x in 0..3 {
        let pearl = repo
            .create(
                CreatePearlParam {
                    x,
                    y: 0,
                    color: PearlColor::Red,
                    submitted_by: "scout".to_string(),
                },
                now(),
            )
            .await?;
        assert!(pearl.id > last);
        last = pearl.id;
    }

    assert_eq!(entity::prelude::Pearl::find().count(db).await?, 3);

    Ok(())
}

/// Tests that a location holds one pearl per UTC day.
///
/// Verifies that a second insert at the same coordinates on the same day hits the
/// unique location index, while the same coordinates on another day are accepted.
///
/// Expected: Err(UniqueConstraintViolation) for the same day, Ok for the next day
#[tokio::test]
async fn rejects_second_pearl_at_location_same_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pearl_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PearlRepository::new(db);
    let param = |color| CreatePearlParam {
        x: 8,
        y: -8,
        color,
        submitted_by: "scout".to_string(),
    };

    repo.create(param(PearlColor::Red), now()).await?;

    let err = repo
        .create(param(PearlColor::Blue), now() + Duration::hours(1))
        .await
        .unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    repo.create(param(PearlColor::Red), now() + Duration::days(1))
        .await?;
    assert_eq!(entity::prelude::Pearl::find().count(db).await?, 2);

    Ok(())
}
