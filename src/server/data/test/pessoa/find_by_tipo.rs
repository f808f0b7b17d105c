use super::*;

/// Tests listing people by role.
///
/// Expected: Ok with only people of the requested role
#[tokio::test]
async fn filters_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Vistoriador).await?;
    factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Vistoriador).await?;
    factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario).await?;

    let repo = PessoaRepository::new(db);

    let vistoriadores = repo.find_by_tipo(RolePessoa::Vistoriador).await?;
    assert_eq!(vistoriadores.len(), 2);
    assert!(vistoriadores
        .iter()
        .all(|p| p.tipo == RolePessoa::Vistoriador));
    assert!(repo.find_by_tipo(RolePessoa::Inquilino).await?.is_empty());
    assert_eq!(repo.get_all().await?.len(), 3);

    Ok(())
}

/// Tests loading several people at once.
///
/// Expected: Ok with known ids returned and unknown ids skipped
#[tokio::test]
async fn finds_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_pessoa(db).await?;
    let b = factory::create_pessoa(db).await?;

    let pessoas = PessoaRepository::new(db)
        .find_by_ids(vec![a.id.clone(), b.id.clone(), "inexistente".to_string()])
        .await?;

    assert_eq!(pessoas.len(), 2);

    Ok(())
}
