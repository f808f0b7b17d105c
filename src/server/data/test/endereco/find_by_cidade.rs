use super::*;

/// Tests the street, city and postal code lookups.
///
/// Expected: Ok with only exact matches returned
#[tokio::test]
async fn filters_by_exact_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EnderecoPessoa)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::endereco_pessoa::EnderecoFactory::new(db)
        .cidade("Campinas")
        .rua("Rua B")
        .cep("13000-001")
        .build()
        .await?;
    factory::endereco_pessoa::EnderecoFactory::new(db)
        .cidade("Santos")
        .build()
        .await?;

    let repo = EnderecoRepository::new(db);

    assert_eq!(repo.find_by_cidade("Campinas").await?.len(), 1);
    assert_eq!(repo.find_by_rua("Rua B").await?.len(), 1);
    assert_eq!(repo.find_by_cep("13000-001").await?.len(), 1);
    assert!(repo.find_by_cidade("Recife").await?.is_empty());
    assert_eq!(repo.get_all().await?.len(), 2);

    Ok(())
}
