use entity::prelude::Usuario;

use super::*;

/// Tests a valid token of an existing user without extra permissions.
///
/// Expected: Ok(Usuario) matching the token subject
#[tokio::test]
async fn returns_user_for_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let usuario = factory::create_usuario(db).await?;
    let token = jwt.generate(&usuario.id, &usuario.email, usuario.tipo)?;
    let headers = headers(&format!("Bearer {}", token));

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(result.id, usuario.id);

    Ok(())
}

/// Tests an administrator passing the admin check.
///
/// Expected: Ok(Usuario)
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let admin = factory::usuario::UsuarioFactory::new(db)
        .tipo(Role::Adm)
        .build()
        .await?;
    let token = jwt.generate(&admin.id, &admin.email, admin.tipo)?;
    let headers = headers(&format!("Bearer {}", token));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a regular user failing the admin check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let usuario = factory::create_usuario(db).await?;
    let token = jwt.generate(&usuario.id, &usuario.email, usuario.tipo)?;
    let headers = headers(&format!("Bearer {}", token));

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the header checks done before the token is verified.
///
/// Expected: MissingHeader, InvalidFormat and MissingToken respectively
#[tokio::test]
async fn rejects_malformed_headers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let empty = HeaderMap::new();
    let result = AuthGuard::new(db, &jwt, &empty).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingHeader))));

    let basic = headers("Basic abc");
    let result = AuthGuard::new(db, &jwt, &basic).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidFormat))));

    let blank = headers("Bearer  ");
    let result = AuthGuard::new(db, &jwt, &blank).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests tokens that fail verification or point to a deleted user.
///
/// Expected: InvalidToken for a foreign signature, UserNotInDatabase for an unknown subject
#[tokio::test]
async fn rejects_untrusted_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Usuario).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = jwt();

    let forged = JwtConfig::new("outro-segredo", 1).generate("u1", "a@b.com", Role::Adm)?;
    let headers_forged = headers(&format!("Bearer {}", forged));
    let result = AuthGuard::new(db, &jwt, &headers_forged).require(&[]).await;
    assert!(matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))));

    let ghost = jwt.generate("fantasma", "f@b.com", Role::User)?;
    let headers_ghost = headers(&format!("Bearer {}", ghost));
    let result = AuthGuard::new(db, &jwt, &headers_ghost).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}
