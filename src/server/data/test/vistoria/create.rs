use super::*;

/// Tests creating an inspection with an inspector.
///
/// Expected: Ok with the inspection found by id and as the open one of its type
#[tokio::test]
async fn creates_inspection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoriador =
        factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Vistoriador).await?;

    let repo = VistoriaRepository::new(db);
    let vistoria = repo
        .create(
            "Vistoria1".to_string(),
            CreateVistoriaParams {
                imovel_id: imovel.id.clone(),
                vistoriador_id: Some(vistoriador.id.clone()),
                tipo: TipoVistoria::Entrada,
            },
        )
        .await?;

    assert_eq!(vistoria.vistoriador_id, Some(vistoriador.id));
    assert_eq!(repo.find_by_id("Vistoria1").await?, Some(vistoria.clone()));
    assert_eq!(
        repo.find_open(&imovel.id, TipoVistoria::Entrada).await?,
        Some(vistoria)
    );
    assert!(repo.find_open(&imovel.id, TipoVistoria::Saida).await?.is_none());

    Ok(())
}

/// Tests deleting an inspection.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_inspection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoria = factory::create_vistoria(db, &imovel.id).await?;

    let repo = VistoriaRepository::new(db);
    assert!(repo.delete(&vistoria.id).await?);
    assert!(!repo.exists(&vistoria.id).await?);
    assert!(!repo.delete(&vistoria.id).await?);

    Ok(())
}
