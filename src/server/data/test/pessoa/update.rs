use super::*;

/// Tests a partial update of person and address.
///
/// Expected: Ok(Some) with the changed fields updated and the rest kept
#[tokio::test]
async fn updates_person_and_address() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_pessoa(db).await?;

    let repo = PessoaRepository::new(db);
    let updated = repo
        .update(UpdatePessoaParams {
            id: existing.id.clone(),
            nome: split_full_name("Maria Clara"),
            tel: Some("11911112222".to_string()),
            endereco: Some(endereco_params("Santos")),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Maria");
    assert_eq!(updated.last_name.as_deref(), Some("Clara"));
    assert_eq!(updated.tel, "11911112222");
    assert_eq!(updated.cpf, existing.cpf);
    assert_eq!(updated.endereco.cidade, "Santos");
    assert_eq!(updated.endereco.id, existing.endereco_id);

    Ok(())
}

/// Tests updating an unknown person.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_pessoa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PessoaRepository::new(db)
        .update(UpdatePessoaParams {
            id: "inexistente".to_string(),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
