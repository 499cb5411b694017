use super::*;

/// Tests revoking a granted role.
///
/// Expected: Ok(true) and the grant disappears
#[tokio::test]
async fn deletes_permitted_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::permitted_role::create_permitted_role(db, "77", "5001").await?;

    let repo = PermittedRoleRepository::new(db);
    assert!(repo.delete(5001).await?);
    assert!(!repo.exists(5001).await?);

    Ok(())
}

/// Tests revoking a role that was never granted.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PermittedRoleRepository::new(db);
    assert!(!repo.delete(5001).await?);

    Ok(())
}
