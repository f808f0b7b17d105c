use super::*;

/// Tests finding people by the city and state of their address.
///
/// Expected: Ok with only people living in the requested city and state
#[tokio::test]
async fn filters_by_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let santos = factory::endereco_pessoa::EnderecoFactory::new(db)
        .cidade("Santos")
        .build()
        .await?;
    let morador = factory::pessoa::PessoaFactory::new(db)
        .endereco_id(santos.id)
        .build()
        .await?;
    factory::create_pessoa(db).await?;

    let repo = PessoaRepository::new(db);
    let encontrados = repo.find_by_cidade_estado("Santos", "SP").await?;

    assert_eq!(encontrados.len(), 1);
    assert_eq!(encontrados[0].id, morador.id);
    assert!(repo.find_by_cidade_estado("Santos", "RJ").await?.is_empty());

    Ok(())
}
