use super::*;

/// Tests listing a guild's permitted roles.
///
/// Expected: only roles granted in the requested guild
#[tokio::test]
async fn lists_roles_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::permitted_role::create_permitted_role(db, "77", "5001").await?;
    factory::permitted_role::create_permitted_role(db, "77", "5002").await?;
    factory::permitted_role::create_permitted_role(db, "88", "5003").await?;

    let repo = PermittedRoleRepository::new(db);
    let roles = repo.get_all_by_guild(77).await?;

    assert_eq!(roles.len(), 2);
    assert!(roles.iter().all(|role| role.guild_id == "77"));

    Ok(())
}

/// Tests listing a guild with no grants.
///
/// Expected: empty vector
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedRoleRepository::new(db);
    assert!(repo.get_all_by_guild(99).await?.is_empty());

    Ok(())
}
