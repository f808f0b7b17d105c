use super::*;

/// Tests looking up a user by email.
///
/// Expected: Ok(Some) for a registered email, Ok(None) otherwise
#[tokio::test]
async fn finds_registered_email_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::usuario::UsuarioFactory::new(db)
        .email("dono@example.com")
        .build()
        .await?;

    let repo = UsuarioRepository::new(db);
    let found = repo.find_by_email("dono@example.com").await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));
    assert!(repo.find_by_email("outro@example.com").await?.is_none());
    assert!(!repo.email_exists("outro@example.com").await?);

    Ok(())
}
