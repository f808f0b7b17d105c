use super::*;

/// Tests a partial update.
///
/// Expected: only the provided fields change
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoria = factory::create_vistoria(db, &imovel.id).await?;

    let updated = VistoriaRepository::new(db)
        .update(
            &vistoria.id,
            UpdateVistoriaParams {
                tipo: Some(TipoVistoria::Saida),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tipo, TipoVistoria::Saida);
    assert_eq!(updated.imovel_id, imovel.id);
    assert_eq!(updated.data, vistoria.data);

    Ok(())
}

/// Tests updating an unknown inspection.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_inspection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = VistoriaRepository::new(db)
        .update("inexistente", UpdateVistoriaParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
