use super::*;

/// Tests creating a person with their address.
///
/// Verifies that both rows are written and the person is returned with the address.
///
/// Expected: Ok with person and address persisted
#[tokio::test]
async fn creates_person_with_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PessoaRepository::new(db);
    let pessoa = repo
        .create(
            "PessoaProprietario10".to_string(),
            "Endereco10".to_string(),
            create_params("Carlos Alberto Lima", RolePessoa::Proprietario),
        )
        .await?;

    assert_eq!(pessoa.first_name, "Carlos");
    assert_eq!(pessoa.middle_name.as_deref(), Some("Alberto"));
    assert_eq!(pessoa.endereco.id, "Endereco10");

    let stored = repo.find_by_id("PessoaProprietario10").await?.unwrap();
    assert_eq!(stored, pessoa);

    Ok(())
}

/// Tests that a failed person insert leaves no address behind.
///
/// Creates a person, then tries to reuse its id. The second address insert runs first
/// inside the same transaction and must be rolled back.
///
/// Expected: Err, and only the first address exists
#[tokio::test]
async fn rolls_back_address_when_person_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PessoaRepository::new(db);
    repo.create(
        "PessoaInquilino1".to_string(),
        "Endereco1".to_string(),
        create_params("Ana Lima", RolePessoa::Inquilino),
    )
    .await?;

    let result = repo
        .create(
            "PessoaInquilino1".to_string(),
            "Endereco2".to_string(),
            create_params("Bia Lima", RolePessoa::Inquilino),
        )
        .await;

    assert!(result.is_err());
    let enderecos = crate::server::data::endereco::EnderecoRepository::new(db)
        .get_all()
        .await?;
    assert_eq!(enderecos.len(), 1);

    Ok(())
}

/// Tests the email uniqueness check used before inserts and updates.
///
/// Expected: Ok(true) for another person's email, Ok(false) for the owner's own
#[tokio::test]
async fn detects_email_in_use() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pessoa = factory::pessoa::PessoaFactory::new(db)
        .email("ana@example.com")
        .build()
        .await?;

    let repo = PessoaRepository::new(db);
    assert!(repo.email_in_use("ana@example.com", None).await?);
    assert!(!repo.email_in_use("ana@example.com", Some(&pessoa.id)).await?);
    assert!(!repo.email_in_use("bia@example.com", None).await?);

    Ok(())
}
