use super::*;

/// Tests creating an event from fully resolved parameters.
///
/// Verifies that every snowflake is stored as a string, the duration is stored
/// in minutes, and a fresh event starts out incomplete.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_event_with_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let event = repo.create(sample_params(77, "LP1")).await?;

    assert_eq!(event.id, "111222333");
    assert_eq!(event.guild_id, "77");
    assert_eq!(event.organiser_id, "42");
    assert_eq!(event.title, "Launch Party");
    assert_eq!(event.short_name, "LP1");
    assert_eq!(event.duration_minutes, 120);
    assert_eq!(event.attendee_role_id, "2003");
    assert_eq!(event.cosmetic_role_id, "0");
    assert!(!event.is_completed);

    Ok(())
}

/// Tests that the scheduled-event id is the primary key.
///
/// Expected: Err on inserting a second event with the same id
#[tokio::test]
async fn rejects_duplicate_event_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    repo.create(sample_params(77, "LP1")).await?;

    let result = repo.create(sample_params(77, "LP2")).await;
    assert!(result.is_err());

    Ok(())
}
