use super::*;

/// Tests the highest-numbered rooms of a property.
///
/// Expected: at most `limit` rooms, highest number first, with their components
#[tokio::test]
async fn returns_highest_numbered_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoria = factory::create_vistoria(db, &imovel.id).await?;
    let mut ids = Vec::new();
    for numero in 1..=3 {
        let comodo = factory::comodo::ComodoFactory::new(db, &imovel.id)
            .numero(numero)
            .build()
            .await?;
        factory::create_componente(db, &comodo.id, &vistoria.id).await?;
        ids.push(comodo.id);
    }

    let repo = ComodoRepository::new(db);
    let latest = repo.latest_in_imovel_with_componentes(&imovel.id, 2).await?;

    assert_eq!(latest.len(), 2);
    assert_eq!(latest[0].comodo.id, ids[2]);
    assert_eq!(latest[1].comodo.id, ids[1]);
    assert!(latest.iter().all(|c| c.componentes.len() == 1));

    assert_eq!(repo.latest().await?.map(|c| c.numero), Some(3));

    Ok(())
}
