use super::*;

fn nova(nome: &str) -> NovaFoto {
    NovaFoto {
        mimetype: "image/png".to_string(),
        file_name: Some(nome.to_string()),
        data: vec![0x89, b'P', b'N', b'G'],
    }
}

/// Tests storing a batch of photos for a property.
///
/// Expected: Ok with every photo listed under its owner only
#[tokio::test]
async fn stores_batch_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let owner = FotoOwner::Imovel(imovel.id.clone());

    let repo = FotoRepository::new(db);
    let stored = repo
        .create_many(&owner, vec![nova("fachada.png"), nova("garagem.png")])
        .await?;

    assert_eq!(stored.len(), 2);
    assert_eq!(repo.find_by_owner(&owner).await?.len(), 2);
    assert!(repo
        .find_by_owner(&FotoOwner::Vistoria(imovel.id))
        .await?
        .is_empty());

    let found = repo.find_by_id(&stored[0].id).await?.unwrap();
    assert_eq!(found.data, vec![0x89, b'P', b'N', b'G']);

    Ok(())
}

/// Tests listing and deleting inspection photos.
///
/// Expected: the deleted photo disappears from the owner's list
#[tokio::test]
async fn deletes_inspection_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let vistoria = factory::create_vistoria(db, &imovel.id).await?;
    let foto = factory::create_foto_for_vistoria(db, &vistoria.id, "image/jpeg", vec![1, 2, 3])
        .await?;

    let owner = FotoOwner::Vistoria(vistoria.id);
    let repo = FotoRepository::new(db);
    assert_eq!(repo.find_by_owner(&owner).await?.len(), 1);

    assert!(repo.delete(&foto.id).await?);
    assert!(repo.find_by_owner(&owner).await?.is_empty());

    Ok(())
}
