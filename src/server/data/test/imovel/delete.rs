use super::*;

/// Tests deleting a property.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_property() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;

    let repo = ImovelRepository::new(db);
    assert!(repo.delete(&imovel.id).await?);
    assert!(!repo.exists(&imovel.id).await?);
    assert!(!repo.delete(&imovel.id).await?);

    Ok(())
}
