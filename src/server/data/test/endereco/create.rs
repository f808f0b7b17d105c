use super::*;

/// Tests creating a standalone address.
///
/// Expected: Ok with the address retrievable by id
#[tokio::test]
async fn creates_address() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::EnderecoPessoa)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EnderecoRepository::new(db);
    let endereco = repo
        .create(
            "Endereco1".to_string(),
            EnderecoParams {
                rua: "Rua A".to_string(),
                complemento: "Casa".to_string(),
                numero: 12,
                bairro: "Centro".to_string(),
                cidade: "Campinas".to_string(),
                estado: "SP".to_string(),
                cep: "13000-000".to_string(),
            },
        )
        .await?;

    assert_eq!(endereco.numero, 12);
    assert!(repo.exists("Endereco1").await?);
    assert_eq!(repo.find_by_id("Endereco1").await?, Some(endereco));

    Ok(())
}
