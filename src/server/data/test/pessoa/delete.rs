use super::*;

/// Tests deleting a person.
///
/// Verifies that the person and their address are removed.
///
/// Expected: Ok(true), then Ok(false) on a second delete
#[tokio::test]
async fn deletes_person_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pessoa = factory::create_pessoa(db).await?;

    let repo = PessoaRepository::new(db);
    assert!(repo.delete(&pessoa.id).await?);
    assert!(!repo.exists(&pessoa.id).await?);
    assert!(
        !crate::server::data::endereco::EnderecoRepository::new(db)
            .exists(&pessoa.endereco_id)
            .await?
    );
    assert!(!repo.delete(&pessoa.id).await?);

    Ok(())
}
