use super::*;

/// Tests that each item kind uses its own catalogue.
///
/// Expected: an item is only found through the repository of its kind
#[tokio::test]
async fn keeps_catalogues_apart() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let principais = ItemRepository::new(db, ItemKind::Principal);
    let acessorios = ItemRepository::new(db, ItemKind::Acessorio);

    let fogao = principais
        .create("ItemP1".to_string(), "Fogão".to_string())
        .await?;

    assert_eq!(principais.find_by_id("ItemP1").await?, Some(fogao));
    assert!(acessorios.find_by_id("ItemP1").await?.is_none());

    Ok(())
}

/// Tests deleting catalogue items.
///
/// Expected: Ok(true) for the stored item, Ok(false) afterwards
#[tokio::test]
async fn deletes_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ItemRepository::new(db, ItemKind::Acessorio);
    repo.create("ItemA1".to_string(), "Cortina".to_string())
        .await?;

    assert!(repo.delete("ItemA1").await?);
    assert!(!repo.delete("ItemA1").await?);

    Ok(())
}
