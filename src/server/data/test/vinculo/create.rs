use super::*;

/// Tests creating an owner link.
///
/// Expected: Ok with the link listed afterwards
#[tokio::test]
async fn creates_owner_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let dono = factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario).await?;

    let repo = VinculoRepository::new(db);
    let vinculo = repo
        .create("Vinculo5".to_string(), imovel.id.clone(), dono.id.clone())
        .await?;

    assert_eq!(vinculo.proprietario_id, dono.id);
    assert!(repo.exists("Vinculo5").await?);
    assert_eq!(repo.get_all().await?, vec![vinculo]);

    Ok(())
}

/// Tests creating rentals.
///
/// Expected: Ok with rentals listed by most recent move-in first
#[tokio::test]
async fn creates_rentals_listed_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_imovel_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let imovel = factory::create_imovel(db).await?;
    let inquilino = factory::create_pessoa(db).await?;

    let repo = AlugaRepository::new(db);
    for (id, year) in [("Aluguel1", 2022), ("Aluguel2", 2024)] {
        repo.create(
            id.to_string(),
            CreateAluguelParams {
                imovel_id: imovel.id.clone(),
                inquilino_id: inquilino.id.clone(),
                data_entrada: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
                data_saida: None,
            },
        )
        .await?;
    }

    let alugueis = repo.get_all().await?;
    assert_eq!(alugueis.len(), 2);
    assert_eq!(alugueis[0].id, "Aluguel2");
    assert!(repo.exists("Aluguel1").await?);

    Ok(())
}
