use super::*;

/// Tests the complete happy path from first question to stored record.
///
/// Expected: one event row with the drafted fields, provisioned ids, no
/// cosmetic role, and a success edit on the status message
#[tokio::test]
async fn creates_event_from_full_dialogue() -> Result<(), AppError> {
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
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    assert_eq!(provisioner.calls(), 1);

    let rows = entity::prelude::Event::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 1);

    let event = &rows[0];
    assert_eq!(event.id, "9001");
    assert_eq!(event.guild_id, "77");
    assert_eq!(event.organiser_id, "42");
    assert_eq!(event.title, "Launch Party");
    assert_eq!(event.description, "Join us");
    assert_eq!(event.short_name, "LP1");
    assert_eq!(event.duration_minutes, 120);
    assert_eq!(event.steward_role_id, "9201");
    assert_eq!(event.attendee_role_id, "9203");
    assert_eq!(event.cosmetic_role_id, "0");
    assert!(!event.is_completed);

    let status = chat.last_status_edit().unwrap();
    assert!(status.contains("Launch Party"));
    assert!(status.contains("2 hours"));

    Ok(())
}

/// Tests that an admin's cosmetic role answer lands in the record.
///
/// Expected: cosmetic_role_id holds the mentioned role
#[tokio::test]
async fn stores_admin_cosmetic_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut replies = happy_path_replies();
    *replies.last_mut().unwrap() = Some("<@&5001>");

    let chat = ScriptedChat::new(replies);
    let directory = FixtureDirectory::new([5001], []);
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&admin_invoker(), &roomy_guild()).await?;

    let rows = entity::prelude::Event::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cosmetic_role_id, "5001");

    Ok(())
}

/// Tests that non-admin invokers never see the cosmetic role prompt.
///
/// Expected: the dialogue completes on one fewer answer and stores no
/// cosmetic role
#[tokio::test]
async fn skips_cosmetic_prompt_for_non_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::permitted_role::create_permitted_role(db, "77", "6001").await?;

    let mut replies = happy_path_replies();
    replies.pop();

    let chat = ScriptedChat::new(replies);
    let directory = FixtureDirectory::empty();
    let provisioner = FakeProvisioner::new();

    let wizard = EventWizard::new(db, &chat, &directory, &provisioner, true);
    wizard.run(&member_invoker(vec![6001]), &roomy_guild()).await?;

    let rows = entity::prelude::Event::find().all(db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cosmetic_role_id, "0");

    Ok(())
}
