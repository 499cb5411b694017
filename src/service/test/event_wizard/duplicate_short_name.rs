use super::*;

/// Tests that a taken short name re-prompts until a free one is given.
///
/// Expected: the duplicate is rejected with the uniqueness message and the
/// event is stored under the second name
#[tokio::test]
async fn taken_short_name_reprompts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db, "77")
        .short_name("LP1")
        .build()
        .await?;

    let chat = ScriptedChat::new([
        Some("Launch Party"),
        Some("Join us"),
        Some("lp1"),
        Some("LP2"),
        Some("12/31/2030 20:00:00"),
        Some("02:00:00"),
        Some("skip"),
        Some("skip"),
        Some("skip"),
    ]);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    let rows = entity::prelude::Event::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|event| event.short_name == "LP2"));

    assert!(chat
        .sent_messages()
        .iter()
        .any(|message| message.contains("already exists")));

    Ok(())
}

/// Tests that a completed event's short name can be reused.
///
/// Expected: no uniqueness rejection for a name only used by a completed event
#[tokio::test]
async fn completed_event_frees_short_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::event::EventFactory::new(db, "77")
        .short_name("LP1")
        .is_completed(true)
        .build()
        .await?;

    let chat = ScriptedChat::new(happy_path_replies());
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    assert_eq!(provisioner.calls(), 1);
    assert!(!chat
        .sent_messages()
        .iter()
        .any(|message| message.contains("already exists")));

    Ok(())
}
