use super::*;

/// Tests that an out-of-range duration answer re-prompts instead of failing.
///
/// Expected: an extra round-trip on the duration question, then a normal run
#[tokio::test]
async fn short_duration_reprompts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = ScriptedChat::new([
        Some("Launch Party"),
        Some("Join us"),
        Some("LP1"),
        Some("12/31/2030 20:00:00"),
        Some("00:05:00"),
        Some("02:00:00"),
        Some("skip"),
        Some("skip"),
        Some("skip"),
    ]);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    assert_eq!(provisioner.calls(), 1);

    let rows = entity::prelude::Event::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].duration_minutes, 120);

    assert!(chat
        .sent_messages()
        .iter()
        .any(|message| message.contains("between 10 minutes and 24 hours")));

    Ok(())
}
