use super::*;

/// Tests that adding to the same week accumulates in one row.
///
/// Expected: one row per week, 1500 seconds for the first week
#[tokio::test]
async fn accumulates_per_week() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = WeeklyHoursRepository::new(db);
    let first = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
    let second = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    let at = Utc.with_ymd_and_hms(2026, 1, 12, 0, 0, 0).unwrap();

    repo.add_seconds(user.id, first, 1000, at).await?;
    repo.add_seconds(user.id, first, 500, at).await?;
    repo.add_seconds(user.id, second, 60, at).await?;

    assert_eq!(repo.find(user.id, first).await?.unwrap().seconds, 1500);

    let history = repo.get_by_user(user.id).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].week_start, second);

    Ok(())
}
