use super::*;

/// Tests replacing the fields of a property.
///
/// Expected: Ok(Some) with new values, Ok(None) for an unknown id
#[tokio::test]
async fn updates_existing_property_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;

    let repo = ImovelRepository::new(db);
    let updated = repo.update(&imovel.id, params("ICM-NOVO")).await?.unwrap();

    assert_eq!(updated.icm, "ICM-NOVO");
    assert_eq!(updated.tipo, TipoImovel::Apartamento);
    assert!(repo.update("inexistente", params("X")).await?.is_none());

    Ok(())
}

/// Tests the ICM uniqueness check.
///
/// Expected: in use for other properties, free for the property that owns it
#[tokio::test]
async fn detects_icm_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::imovel::ImovelFactory::new(db)
        .icm("ICM-123")
        .build()
        .await?;

    let repo = ImovelRepository::new(db);
    assert!(repo.icm_in_use("ICM-123", None).await?);
    assert!(!repo.icm_in_use("ICM-123", Some(&imovel.id)).await?);
    assert!(!repo.icm_in_use("ICM-999", None).await?);

    Ok(())
}
