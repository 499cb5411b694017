use super::*;

/// Tests fetching an event by its scheduled-event id.
///
/// Expected: Ok(Some) for a stored id, Ok(None) for an unknown id
#[tokio::test]
async fn gets_event_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::create_event(db, "77").await?;

    let repo = EventRepository::new(db);
    let found = repo.get_by_id(&stored.id).await?;
    assert_eq!(found, Some(stored));

    let missing = repo.get_by_id("404").await?;
    assert_eq!(missing, None);

    Ok(())
}

/// Tests listing events per guild ordered by start time.
///
/// Expected: only the requested guild's events, soonest first
#[tokio::test]
async fn gets_all_by_guild_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = factory::event::EventFactory::new(db, "77")
        .start(Utc.with_ymd_and_hms(2031, 6, 1, 18, 0, 0).unwrap())
        .build()
        .await?;
    let sooner = factory::event::EventFactory::new(db, "77")
        .start(Utc.with_ymd_and_hms(2030, 6, 1, 18, 0, 0).unwrap())
        .build()
        .await?;
    factory::event::create_event(db, "88").await?;

    let repo = EventRepository::new(db);
    let events = repo.get_all_by_guild(77).await?;

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, sooner.id);
    assert_eq!(events[1].id, later.id);

    Ok(())
}

/// Tests filtering events by completion state.
///
/// Expected: completed and incomplete events split correctly
#[tokio::test]
async fn gets_by_completion_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let open = factory::event::create_event(db, "77").await?;
    let done = factory::event::EventFactory::new(db, "77")
        .is_completed(true)
        .build()
        .await?;

    let repo = EventRepository::new(db);

    let incomplete = repo.get_by_completion(77, false).await?;
    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, open.id);

    let completed = repo.get_by_completion(77, true).await?;
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, done.id);

    Ok(())
}
