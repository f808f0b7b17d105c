use entity::sea_orm_active_enums::RolePessoa;

use super::*;

fn create_body(icm: &str, proprietario_id: &str) -> Value {
    json!({
        "icm": icm,
        "tipo": "Apartamento",
        "rua": "Rua das Palmeiras",
        "complemento": "Bloco B",
        "numero": 210,
        "bairro": "Cambuí",
        "cidade": "Campinas",
        "estado": "SP",
        "cep": "13025-000",
        "proprietarioId": proprietario_id
    })
}

async fn create(app: Router, body: Value) -> (StatusCode, Value) {
    send_json(app, json_request(Method::POST, "/imovel/criar", body)).await
}

/// Tests creating a property for a registered owner.
///
/// Expected: 201 with the new id, and the owner listed on the property
#[tokio::test]
async fn create_imovel_links_owner() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dono = factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario)
        .await
        .unwrap();

    let (status, body) = create(app(db), create_body("ICM-100", &dono.id)).await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["idImovel"].as_str().unwrap();
    assert!(id.starts_with("Imovel"));

    let (status, imovel) = send_json(app(db), get(&format!("/imovel/por-id/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(imovel["icm"], "ICM-100");
    assert_eq!(imovel["proprietarios"][0]["id"], dono.id.as_str());
}

/// Tests creating a property for an unknown owner.
///
/// Expected: 404
#[tokio::test]
async fn create_imovel_unknown_owner() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = create(app(db), create_body("ICM-100", "PessoaProprietario9999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests registering the same ICM twice.
///
/// Expected: 400 on the second request
#[tokio::test]
async fn create_imovel_rejects_duplicate_icm() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let dono = factory::pessoa::create_pessoa_with_tipo(db, RolePessoa::Proprietario)
        .await
        .unwrap();

    create(app(db), create_body("ICM-100", &dono.id)).await;
    let (status, body) = create(app(db), create_body("ICM-100", &dono.id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Já existe um imóvel com este ICM.");
}
