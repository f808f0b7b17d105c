use super::*;

/// Tests the numbering lookups used when adding rooms.
///
/// Expected: per-type and overall maximums, None for an empty property
#[tokio::test]
async fn finds_highest_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vazio = factory::create_imovel(db).await?;
    for (tipo, numero) in [
        (TipoComodo::Quarto, 1),
        (TipoComodo::Quarto, 2),
        (TipoComodo::Cozinha, 5),
    ] {
        factory::comodo::ComodoFactory::new(db, &imovel.id)
            .tipo(tipo)
            .numero(numero)
            .build()
            .await?;
    }

    let repo = ComodoRepository::new(db);
    assert_eq!(
        repo.last_numero_of_tipo(&imovel.id, TipoComodo::Quarto).await?,
        Some(2)
    );
    assert_eq!(
        repo.last_numero_of_tipo(&imovel.id, TipoComodo::Sala).await?,
        None
    );
    assert_eq!(repo.max_numero(&imovel.id).await?, Some(5));
    assert_eq!(repo.max_numero(&vazio.id).await?, None);

    Ok(())
}

/// Tests changing a room type.
///
/// Expected: updated only when the room belongs to the given property
#[tokio::test]
async fn updates_tipo_within_property() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let outro = factory::create_imovel(db).await?;
    let comodo = factory::create_comodo(db, &imovel.id).await?;

    let repo = ComodoRepository::new(db);
    assert!(repo
        .update_tipo(&comodo.id, &outro.id, TipoComodo::Copa)
        .await?
        .is_none());

    let updated = repo
        .update_tipo(&comodo.id, &imovel.id, TipoComodo::Copa)
        .await?
        .unwrap();
    assert_eq!(updated.tipo, TipoComodo::Copa);

    Ok(())
}
