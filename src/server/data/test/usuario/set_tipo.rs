use super::*;

/// Tests promoting a user to administrator.
///
/// Expected: Ok(Some) with the new role persisted
#[tokio::test]
async fn promotes_user_to_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let usuario = factory::create_usuario(db).await?;

    let repo = UsuarioRepository::new(db);
    let updated = repo.set_tipo(&usuario.id, Role::Adm).await?.unwrap();

    assert_eq!(updated.tipo, Role::Adm);
    assert!(repo.find_by_id(&usuario.id).await?.unwrap().is_admin());

    Ok(())
}

/// Tests changing the role of an unknown user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Usuario)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UsuarioRepository::new(db)
        .set_tipo("inexistente", Role::Adm)
        .await?;

    assert!(result.is_none());

    Ok(())
}
