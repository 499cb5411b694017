use super::*;

/// Tests granting a role permission to create events.
///
/// Expected: Ok with the grant stored and visible to exists
#[tokio::test]
async fn creates_permitted_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedRoleRepository::new(db);
    let created = repo.create(77, 5001).await?;

    assert_eq!(created.guild_id, "77");
    assert_eq!(created.role_id, "5001");
    assert!(repo.exists(5001).await?);
    assert!(!repo.exists(5002).await?);

    Ok(())
}

/// Tests granting the same role twice.
///
/// Expected: Err from the primary key constraint
#[tokio::test]
async fn rejects_duplicate_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedRoleRepository::new(db);
    repo.create(77, 5001).await?;

    assert!(repo.create(77, 5001).await.is_err());

    Ok(())
}
