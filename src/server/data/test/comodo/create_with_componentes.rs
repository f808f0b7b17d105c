use super::*;

/// Tests creating a room with its preset components.
///
/// Expected: Ok with every component tied to the room and the inspection
#[tokio::test]
async fn creates_room_with_components() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoria = factory::create_vistoria(db, &imovel.id).await?;

    let repo = ComodoRepository::new(db);
    let criado = repo
        .create_with_componentes(
            "Comodo1".to_string(),
            imovel.id.clone(),
            TipoComodo::Quarto,
            1,
            vistoria.id.clone(),
            vec![componente("Teto"), componente("Parede")],
        )
        .await?;

    assert_eq!(criado.comodo.id, "Comodo1");
    assert_eq!(criado.componentes.len(), 2);
    assert!(criado
        .componentes
        .iter()
        .all(|c| c.comodo_id == "Comodo1" && c.vistoria_id == vistoria.id));

    let stored = repo.find_by_imovel_with_componentes(&imovel.id).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].componentes.len(), 2);

    Ok(())
}

/// Tests that a room insert failure leaves no components behind.
///
/// Expected: Err, with no extra room stored
#[tokio::test]
async fn fails_atomically_on_duplicate_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (imovel, vistoria, comodo) =
        factory::helpers::create_vistoria_with_dependencies(db).await?;

    let repo = ComodoRepository::new(db);
    let result = repo
        .create_with_componentes(
            comodo.id.clone(),
            imovel.id.clone(),
            TipoComodo::Sala,
            2,
            vistoria.id,
            vec![componente("Piso")],
        )
        .await;

    assert!(result.is_err());
    let stored = repo.find_by_imovel_with_componentes(&imovel.id).await?;
    assert_eq!(stored.len(), 1);
    assert!(stored[0].componentes.is_empty());

    Ok(())
}

/// Tests filtering room components by inspection.
///
/// Expected: each inspection only sees its own components
#[tokio::test]
async fn keeps_only_components_of_the_inspection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (imovel, entrada, comodo) =
        factory::helpers::create_vistoria_with_dependencies(db).await?;
    let saida = factory::create_vistoria(db, &imovel.id).await?;

    factory::create_componente(db, &comodo.id, &entrada.id).await?;
    factory::create_componente(db, &comodo.id, &entrada.id).await?;
    factory::create_componente(db, &comodo.id, &saida.id).await?;

    let repo = ComodoRepository::new(db);
    let da_entrada = repo.find_by_imovel_for_vistoria(&imovel.id, &entrada.id).await?;
    let da_saida = repo.find_by_imovel_for_vistoria(&imovel.id, &saida.id).await?;

    assert_eq!(da_entrada[0].componentes.len(), 2);
    assert_eq!(da_saida[0].componentes.len(), 1);

    Ok(())
}
