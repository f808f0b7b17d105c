use super::*;

fn create_body(email: &str, birth_date: &str) -> Value {
    json!({
        "cpf": "123.456.789-00",
        "fullName": "João Pedro Silva",
        "tel": "(19) 98888-7777",
        "email": email,
        "birthDate": birth_date,
        "type": "Proprietario",
        "endereco": {
            "rua": "Rua A",
            "complemento": "Apto 1",
            "numero": 100,
            "bairro": "Centro",
            "cidade": "Campinas",
            "estado": "SP",
            "cep": "13000-000"
        }
    })
}

async fn create(app: Router, body: Value) -> (StatusCode, Value) {
    send_json(app, json_request(Method::POST, "/criarPessoa", body)).await
}

/// Tests creating a person with a mixed-case email.
///
/// Expected: 201 with the email stored lowercased and the phone reduced to digits
#[tokio::test]
async fn create_pessoa_normalizes_contact() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = create(app(db), create_body(" Joao@Example.com ", "10/05/1990")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "joao@example.com");
    assert_eq!(body["tel"], "19988887777");
    assert_eq!(body["endereco"]["cidade"], "Campinas");
}

/// Tests creating two people whose emails differ only by case.
///
/// Expected: 400 on the second request
#[tokio::test]
async fn create_pessoa_rejects_email_differing_in_case() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = create(app(db), create_body("Joao@Example.com", "10/05/1990")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create(app(db), create_body("joao@example.com", "10/05/1990")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Usuário já existe.");
}

/// Tests updating a person to an email already used by someone else, in another case.
///
/// Expected: 400
#[tokio::test]
async fn update_pessoa_rejects_email_of_other_person() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    create(app(db), create_body("joao@example.com", "10/05/1990")).await;
    let (_, segunda) = create(app(db), create_body("maria@example.com", "10/05/1990")).await;

    let (status, _) = send_json(
        app(db),
        json_request(
            Method::PUT,
            "/atualizarPessoa",
            json!({ "id": segunda["id"], "email": "JOAO@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests creating a person with an ISO birth date.
///
/// Expected: 400 and nothing stored
#[tokio::test]
async fn create_pessoa_rejects_iso_birth_date() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _) = create(app(db), create_body("joao@example.com", "1990-05-10")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, pessoas) = send_json(app(db), get("/buscarPessoas")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(pessoas.as_array().unwrap().is_empty());
}

/// Tests creating a person without an address.
///
/// Expected: 400 asking for every required field
#[tokio::test]
async fn create_pessoa_requires_address() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut body = create_body("joao@example.com", "10/05/1990");
    body["endereco"] = Value::Null;
    let (status, body) = create(app(db), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Por favor, forneça todos os dados necessários.");
}
