use super::*;

fn params(email: &str) -> CreateUsuarioParams {
    CreateUsuarioParams {
        full_name: "Ana Souza".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        tipo: Role::User,
    }
}

/// Tests creating a user.
///
/// Verifies that every field is stored and a creation timestamp is set.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UsuarioRepository::new(db);
    let usuario = repo
        .create("usuario-1".to_string(), params("ana@example.com"))
        .await?;

    assert_eq!(usuario.id, "usuario-1");
    assert_eq!(usuario.email, "ana@example.com");
    assert_eq!(usuario.tipo, Role::User);
    assert!(repo.find_by_id("usuario-1").await?.is_some());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Verifies that inserting a second user with the same email fails at the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UsuarioRepository::new(db);
    repo.create("usuario-1".to_string(), params("ana@example.com"))
        .await?;
    let result = repo
        .create("usuario-2".to_string(), params("ana@example.com"))
        .await;

    assert!(result.is_err());
    assert!(repo.email_exists("ana@example.com").await?);

    Ok(())
}
