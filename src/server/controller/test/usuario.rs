use entity::sea_orm_active_enums::Role;

use super::*;

fn create_user_body(email: &str) -> Value {
    json!({
        "fullName": "Maria da Silva",
        "email": email,
        "password": "senha123",
        "confirmPassword": "senha123",
        "birthDate": "29/01/1990",
        "type": "User"
    })
}

async fn register(app: Router, email: &str) -> (StatusCode, Value) {
    send_json(
        app,
        json_request(Method::POST, "/User/CreateUser", create_user_body(email)),
    )
    .await
}

async fn login(app: Router, email: &str, password: &str) -> (StatusCode, Value) {
    send_json(
        app,
        json_request(
            Method::POST,
            "/User/Login",
            json!({ "email": email, "password": password }),
        ),
    )
    .await
}

/// Tests registering a new user.
///
/// Expected: 201 with the lowercased email and no password hash
#[tokio::test]
async fn create_user_returns_created() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = register(app(db), "Maria@Example.com").await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "maria@example.com");
    assert_eq!(body["type"], "User");
    assert!(body.get("passwordHash").is_none());
}

/// Tests registering the same email twice.
///
/// Expected: 400 "Usuário já existe."
#[tokio::test]
async fn create_user_rejects_duplicate_email() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    register(app(db), "maria@example.com").await;
    let (status, body) = register(app(db), "maria@example.com").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Usuário já existe.");
}

/// Tests field validation of the registration body.
///
/// Expected: 400 "Erro de validação" listing every failed rule
#[tokio::test]
async fn create_user_reports_validation_errors() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let body = json!({
        "fullName": "Ana",
        "email": "not-an-email",
        "password": "senha123",
        "confirmPassword": "outra123",
        "birthDate": "2000-01-01"
    });
    let (status, body) = send_json(
        app(db),
        json_request(Method::POST, "/User/CreateUser", body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Erro de validação");
    let detalhes = body["detalhes"].as_array().unwrap();
    assert_eq!(detalhes.len(), 4);
}

/// Tests logging in with the registered credentials.
///
/// Expected: 200 with a bearer token and the user id
#[tokio::test]
async fn login_returns_bearer_token() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = register(app(db), "maria@example.com").await;
    let (status, body) = login(app(db), "MARIA@example.com", "senha123").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["jwt"].as_str().unwrap().starts_with("Bearer "));
    assert_eq!(body["userId"], created["id"]);
}

/// Tests logging in with a wrong password.
///
/// Expected: 400 with the generic credentials message
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    register(app(db), "maria@example.com").await;
    let (status, body) = login(app(db), "maria@example.com", "errada123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["mensagem"], "Usuário não encontrado ou senha incorreta.");
}

fn change_permission(authorization: Option<&str>, user_id: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::PUT)
        .uri("/Permission/ChangePermission")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    builder
        .body(Body::from(
            json!({ "userId": user_id, "type": "Adm" }).to_string(),
        ))
        .unwrap()
}

/// Tests changing a role without an authorization header.
///
/// Expected: 400
#[tokio::test]
async fn change_permission_requires_header() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let usuario = factory::create_usuario(db).await.unwrap();

    let (status, _) = send_json(app(db), change_permission(None, &usuario.id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests changing a role as a regular user.
///
/// Expected: 403
#[tokio::test]
async fn change_permission_rejects_non_admin() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = register(app(db), "maria@example.com").await;
    let (_, logged) = login(app(db), "maria@example.com", "senha123").await;

    let (status, _) = send_json(
        app(db),
        change_permission(
            logged["jwt"].as_str(),
            created["id"].as_str().unwrap(),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests an administrator promoting another user.
///
/// Expected: 200 with the new role
#[tokio::test]
async fn admin_changes_permission() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtConfig::new("segredo-de-teste", 1);

    let admin = factory::usuario::UsuarioFactory::new(db)
        .tipo(Role::Adm)
        .build()
        .await
        .unwrap();
    let token = jwt.generate(&admin.id, &admin.email, admin.tipo).unwrap();
    let usuario = factory::create_usuario(db).await.unwrap();

    let (status, body) = send_json(
        app(db),
        change_permission(Some(format!("Bearer {}", token).as_str()), &usuario.id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "Adm");
}

/// Tests an administrator targeting an unknown user.
///
/// Expected: 404
#[tokio::test]
async fn change_permission_unknown_user() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = JwtConfig::new("segredo-de-teste", 1);

    let admin = factory::usuario::UsuarioFactory::new(db)
        .tipo(Role::Adm)
        .build()
        .await
        .unwrap();
    let token = jwt.generate(&admin.id, &admin.email, admin.tipo).unwrap();

    let (status, _) = send_json(
        app(db),
        change_permission(Some(format!("Bearer {}", token).as_str()), "inexistente"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
