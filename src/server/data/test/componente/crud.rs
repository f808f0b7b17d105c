use super::*;

fn params(tipo: &str, estado: Estado) -> ComponenteParams {
    ComponenteParams {
        tipo: tipo.to_string(),
        obs: "Riscos leves".to_string(),
        cor: Cor::Cinza,
        estado,
        material: Material::Madeira,
    }
}

/// Tests creating components and listing them by room.
///
/// Expected: Ok with the room's components sorted by type
#[tokio::test]
async fn creates_and_lists_by_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vistoria, comodo) = factory::helpers::create_vistoria_with_dependencies(db).await?;

    let repo = ComponenteRepository::new(db);
    repo.create(
        "Componente2".to_string(),
        comodo.id.clone(),
        vistoria.id.clone(),
        params("Porta", Estado::UA),
    )
    .await?;
    let armario = repo
        .create(
            "Componente1".to_string(),
            comodo.id.clone(),
            vistoria.id.clone(),
            params("Armário", Estado::NP),
        )
        .await?;

    assert_eq!(armario.material, Material::Madeira);

    let tipos: Vec<String> = repo
        .find_by_comodo(&comodo.id)
        .await?
        .into_iter()
        .map(|c| c.tipo)
        .collect();
    assert_eq!(tipos, vec!["Armário".to_string(), "Porta".to_string()]);

    Ok(())
}

/// Tests moving a component to another room while replacing its fields.
///
/// Expected: Ok(Some) with the new room and values
#[tokio::test]
async fn updates_and_moves_component() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (imovel, vistoria, comodo) =
        factory::helpers::create_vistoria_with_dependencies(db).await?;
    let destino = factory::create_comodo(db, &imovel.id).await?;
    let componente = factory::create_componente(db, &comodo.id, &vistoria.id).await?;

    let repo = ComponenteRepository::new(db);
    let updated = repo
        .update(&componente.id, &destino.id, params("Janela", Estado::IA))
        .await?
        .unwrap();

    assert_eq!(updated.comodo_id, destino.id);
    assert_eq!(updated.tipo, "Janela");
    assert_eq!(updated.estado, Estado::IA);
    assert_eq!(updated.vistoria_id, vistoria.id);

    assert!(repo
        .update("inexistente", &destino.id, params("Janela", Estado::IA))
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a component.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_component() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vistoria, comodo) = factory::helpers::create_vistoria_with_dependencies(db).await?;
    let componente = factory::create_componente(db, &comodo.id, &vistoria.id).await?;

    let repo = ComponenteRepository::new(db);
    assert!(repo.delete(&componente.id).await?);
    assert!(!repo.delete(&componente.id).await?);

    Ok(())
}
