use super::*;

/// Tests the per-field mutators against a stored event.
///
/// Expected: each mutator changes exactly its own column
#[tokio::test]
async fn updates_single_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::create_event(db, "77").await?;
    let repo = EventRepository::new(db);

    let updated = repo
        .update_title(&stored.id, "Renamed".to_string())
        .await?
        .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.short_name, stored.short_name);

    let updated = repo.update_organiser(&stored.id, 999).await?.unwrap();
    assert_eq!(updated.organiser_id, "999");

    let new_start = Utc.with_ymd_and_hms(2032, 1, 1, 12, 0, 0).unwrap();
    let updated = repo.update_start(&stored.id, new_start).await?.unwrap();
    assert_eq!(updated.start, new_start);

    let updated = repo
        .update_duration(&stored.id, Duration::minutes(45))
        .await?
        .unwrap();
    assert_eq!(updated.duration_minutes, 45);

    let updated = repo.update_attendee_role(&stored.id, 4242).await?.unwrap();
    assert_eq!(updated.attendee_role_id, "4242");

    let updated = repo.update_cosmetic_role(&stored.id, 0).await?.unwrap();
    assert_eq!(updated.cosmetic_role_id, "0");

    Ok(())
}

/// Tests completing and reopening an event.
///
/// Expected: completion flag flips both ways
#[tokio::test]
async fn updates_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::create_event(db, "77").await?;
    let repo = EventRepository::new(db);

    let updated = repo.update_completion(&stored.id, true).await?.unwrap();
    assert!(updated.is_completed);

    let updated = repo.update_completion(&stored.id, false).await?.unwrap();
    assert!(!updated.is_completed);

    Ok(())
}

/// Tests mutating an event that does not exist.
///
/// Expected: Ok(None) without touching the database
#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo.update_title("404", "Ghost".to_string()).await?;
    assert!(result.is_none());

    Ok(())
}
