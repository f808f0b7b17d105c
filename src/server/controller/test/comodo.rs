use super::*;

async fn create(app: Router, imovel_id: &str, tipo: &str) -> (StatusCode, Value) {
    send_json(
        app,
        json_request(
            Method::POST,
            &format!("/Comodo/{}/CriarComodo", imovel_id),
            json!({ "tipo": tipo }),
        ),
    )
    .await
}

/// Tests room numbering per type within a property.
///
/// Expected: Quarto 1, Quarto 2, then Sala 1
#[tokio::test]
async fn create_comodo_numbers_per_tipo() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let imovel = factory::create_imovel(db).await.unwrap();

    let mut numeros = Vec::new();
    for tipo in ["Quarto", "Quarto", "Sala"] {
        let (status, body) = create(app(db), &imovel.id, tipo).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["comodo"]["tipo"], tipo);
        numeros.push(body["comodo"]["numero"].as_i64().unwrap());
    }

    assert_eq!(numeros, vec![1, 2, 1]);
}

/// Tests adding a room to an unknown property.
///
/// Expected: 404
#[tokio::test]
async fn create_comodo_unknown_imovel() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = create(app(db), "Imovel0", "Sala").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests the `quantidade` query of the latest rooms listing.
///
/// Expected: 400 for a non-numeric value, 200 with the default otherwise
#[tokio::test]
async fn ultimos_comodos_validates_quantidade() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, vistoria, comodo) = factory::helpers::create_vistoria_with_dependencies(db)
        .await
        .unwrap();
    factory::create_componente(db, &comodo.id, &vistoria.id)
        .await
        .unwrap();

    let (status, body) = send_json(
        app(db),
        get(&format!("/Comodo/{}/UltimoComodoComponente?quantidade=abc", comodo.id)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Quantidade inválida. Deve ser um número positivo.");

    let (status, body) = send_json(
        app(db),
        get(&format!("/Comodo/{}/UltimoComodoComponente", comodo.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], comodo.id.as_str());
}
