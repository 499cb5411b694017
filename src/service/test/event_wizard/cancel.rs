use super::*;

/// Tests cancelling midway through the dialogue.
///
/// Expected: no event row, the provisioner never runs, and the cancel notice
/// is the last thing said
#[tokio::test]
async fn cancel_discards_draft() -> Result<(), AppError> {
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
        Some("cancel"),
    ]);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    assert_eq!(provisioner.calls(), 0);
    assert!(entity::prelude::Event::find()
        .all(db)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        chat.sent_messages().last().map(String::as_str),
        Some("Cancelled.")
    );

    Ok(())
}
