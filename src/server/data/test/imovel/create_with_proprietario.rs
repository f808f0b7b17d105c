use super::*;

/// Tests creating a property with its owner link.
///
/// Expected: Ok with both the property and the link persisted
#[tokio::test]
async fn creates_property_and_owner_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dono = factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario).await?;

    let (imovel, vinculo) = ImovelRepository::new(db)
        .create_with_proprietario(
            "Imovel7".to_string(),
            "Vinculo7".to_string(),
            params("ICM-7"),
            dono.id.clone(),
        )
        .await?;

    assert_eq!(imovel.id, "Imovel7");
    assert_eq!(vinculo.imovel_id, "Imovel7");
    assert_eq!(vinculo.proprietario_id, dono.id);

    let owners = VinculoRepository::new(db)
        .proprietario_ids_by_imovel(vec!["Imovel7".to_string()])
        .await?;
    assert_eq!(owners.get("Imovel7"), Some(&vec![dono.id]));

    Ok(())
}

/// Tests that a failing owner link rolls back the property insert.
///
/// The link reuses an existing link id, so the second insert fails after the
/// property row was written inside the transaction.
///
/// Expected: Err, and the property does not exist
#[tokio::test]
async fn rolls_back_property_when_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dono = factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario).await?;
    let repo = ImovelRepository::new(db);
    repo.create_with_proprietario(
        "Imovel1".to_string(),
        "Vinculo1".to_string(),
        params("ICM-1"),
        dono.id.clone(),
    )
    .await?;

    let result = repo
        .create_with_proprietario(
            "Imovel2".to_string(),
            "Vinculo1".to_string(),
            params("ICM-2"),
            dono.id,
        )
        .await;

    assert!(result.is_err());
    assert!(!repo.exists("Imovel2").await?);

    Ok(())
}
