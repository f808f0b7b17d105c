use super::*;

fn endereco_body() -> Value {
    json!({
        "rua": "Rua Barão de Jaguara",
        "complemento": "Sala 4",
        "numero": 1200,
        "bairro": "Centro",
        "cidade": "Campinas",
        "estado": "SP",
        "cep": "13015-000"
    })
}

/// Tests creating a complete address and reading it back by city.
///
/// Expected: 201 with an `Endereco` id, then listed under its city
#[tokio::test]
async fn create_endereco_then_find_by_cidade() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send_json(
        app(db),
        json_request(Method::POST, "/Endereco/CreateEndereco", endereco_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().unwrap().starts_with("Endereco"));

    let (status, found) =
        send_json(app(db), get("/Endereco/PegarEnderecosPorCidade/Campinas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found[0]["id"], body["id"]);
}

/// Tests creating an address without a CEP.
///
/// Expected: 422
#[tokio::test]
async fn create_endereco_requires_every_field() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = endereco_body();
    body["cep"] = Value::Null;
    let (status, body) = send_json(
        app(db),
        json_request(Method::POST, "/Endereco/CreateEndereco", body),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["mensagem"], "Todos os campos do endereço são obrigatórios.");
}

/// Tests looking up an unknown address id.
///
/// Expected: 404
#[tokio::test]
async fn get_unknown_endereco() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = send_json(app(db), get("/Endereco/PegarEnderecoPorId/Endereco0")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
