use super::*;

/// Tests deleting a room with components.
///
/// Expected: Ok(true), the room and its components are gone
#[tokio::test]
async fn deletes_room_and_components() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, vistoria, comodo) = factory::helpers::create_vistoria_with_dependencies(db).await?;
    let componente = factory::create_componente(db, &comodo.id, &vistoria.id).await?;

    let repo = ComodoRepository::new(db);
    assert!(repo.delete_with_componentes(&comodo.id).await?);
    assert!(!repo.exists(&comodo.id).await?);

    let componentes = crate::server::data::componente::ComponenteRepository::new(db);
    assert!(!componentes.exists(&componente.id).await?);

    Ok(())
}

/// Tests deleting an unknown room.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_room() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ComodoRepository::new(db)
        .delete_with_componentes("inexistente")
        .await?);

    Ok(())
}
