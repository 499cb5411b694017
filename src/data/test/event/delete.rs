use super::*;

/// Tests deleting an event record.
///
/// Expected: Ok(true) then the event is gone
#[tokio::test]
async fn deletes_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::event::create_event(db, "77").await?;
    let repo = EventRepository::new(db);

    assert!(repo.delete(&stored.id).await?);
    assert!(repo.get_by_id(&stored.id).await?.is_none());

    Ok(())
}

/// Tests deleting an event that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    assert!(!repo.delete("404").await?);

    Ok(())
}
