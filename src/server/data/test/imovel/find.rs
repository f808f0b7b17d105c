use super::*;

/// Tests the ICM, type and street lookups.
///
/// Expected: Ok with the matching properties only
#[tokio::test]
async fn finds_by_icm_tipo_and_street() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let casa = factory::imovel::ImovelFactory::new(db)
        .icm("ICM-CASA")
        .rua("Rua dos Ipês")
        .build()
        .await?;
    factory::imovel::ImovelFactory::new(db)
        .tipo(TipoImovel::Terreno)
        .rua("Estrada Velha")
        .build()
        .await?;

    let repo = ImovelRepository::new(db);

    assert_eq!(
        repo.find_by_icm("ICM-CASA").await?.map(|i| i.id),
        Some(casa.id)
    );
    assert!(repo.find_by_icm("ICM-NADA").await?.is_none());
    assert_eq!(repo.find_by_tipo(TipoImovel::Terreno).await?.len(), 1);
    assert_eq!(repo.find_by_rua_contains("Ipês").await?.len(), 1);
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
