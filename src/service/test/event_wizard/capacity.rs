use super::*;

/// Tests refusal when the guild is near the channel cap.
///
/// Expected: the channel capacity message and no prompts
#[tokio::test]
async fn refuses_near_channel_cap() -> Result<(), AppError> {
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
        .run(
            &admin_invoker(),
            &GuildUsage {
                channel_count: 498,
                role_count: 15,
            },
        )
        .await?;

    assert_eq!(provisioner.calls(), 0);
    assert_eq!(
        chat.sent_messages(),
        vec!["This server is too close to the channel limit to fit another event.".to_string()]
    );

    Ok(())
}

/// Tests refusal when the guild is near the role cap.
///
/// Expected: the role capacity message and no prompts
#[tokio::test]
async fn refuses_near_role_cap() -> Result<(), AppError> {
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
        .run(
            &admin_invoker(),
            &GuildUsage {
                channel_count: 20,
                role_count: 247,
            },
        )
        .await?;

    assert_eq!(provisioner.calls(), 0);
    assert_eq!(
        chat.sent_messages(),
        vec!["This server is too close to the role limit to fit another event.".to_string()]
    );

    Ok(())
}

/// Tests that a guild just inside both margins proceeds.
///
/// Expected: the first question is asked
#[tokio::test]
async fn proceeds_within_margins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let chat = ScriptedChat::new([Some("cancel")]);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard
        .run(
            &admin_invoker(),
            &GuildUsage {
                channel_count: 497,
                role_count: 246,
            },
        )
        .await?;

    assert!(chat
        .sent_messages()
        .first()
        .is_some_and(|message| message.contains("call the event")));

    Ok(())
}
