use super::*;

/// Tests that a member without an admitting role is refused outright.
///
/// Expected: the denial message is the only thing said and nothing is created
#[tokio::test]
async fn denies_unpermitted_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = ScriptedChat::new(happy_path_replies());
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard
        .run(&member_invoker(vec![6001]), &roomy_guild())
        .await?;

    assert_eq!(provisioner.calls(), 0);
    assert_eq!(
        chat.sent_messages(),
        vec!["You don't have permission to create events on this server.".to_string()]
    );

    Ok(())
}

/// Tests that holding any permitted role admits a non-admin member.
///
/// Expected: the first question is asked
#[tokio::test]
async fn admits_member_with_permitted_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::permitted_role::create_permitted_role(db, "77", "6001").await?;

    // End the dialogue immediately; admission is what's under test.
    let chat = ScriptedChat::new([Some("cancel")]);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard
        .run(&member_invoker(vec![9999, 6001]), &roomy_guild())
        .await?;

    assert!(chat
        .sent_messages()
        .first()
        .is_some_and(|message| message.contains("call the event")));

    Ok(())
}
