use super::*;

/// Tests listing inspections in both date orders.
///
/// Expected: oldest first for `Asc`, newest first for `Desc`, `latest` is the newest
#[tokio::test]
async fn sorts_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let antiga = factory::vistoria::VistoriaFactory::new(db, &imovel.id)
        .data(Utc.with_ymd_and_hms(2023, 3, 1, 12, 0, 0).unwrap())
        .build()
        .await?;
    let recente = factory::vistoria::VistoriaFactory::new(db, &imovel.id)
        .tipo(TipoVistoria::Saida)
        .data(Utc.with_ymd_and_hms(2024, 8, 1, 12, 0, 0).unwrap())
        .build()
        .await?;

    let repo = VistoriaRepository::new(db);

    let asc: Vec<String> = repo
        .get_all(SortOrder::Asc)
        .await?
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(asc, vec![antiga.id.clone(), recente.id.clone()]);

    let desc: Vec<String> = repo
        .get_all(SortOrder::Desc)
        .await?
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(desc, vec![recente.id.clone(), antiga.id]);

    assert_eq!(repo.latest().await?.map(|v| v.id), Some(recente.id));
    assert_eq!(repo.find_by_imovel(&imovel.id).await?.len(), 2);

    Ok(())
}

/// Tests `latest` on an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn latest_is_none_without_inspections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(VistoriaRepository::new(db).latest().await?.is_none());

    Ok(())
}
