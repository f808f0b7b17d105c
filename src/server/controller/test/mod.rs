use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, service::auth::jwt::JwtConfig, state::AppState};

mod comodo;
mod endereco;
mod foto;
mod imovel;
mod pessoa;
mod usuario;

fn app(db: &DatabaseConnection) -> Router {
    router::app(AppState::new(
        db.clone(),
        JwtConfig::new("segredo-de-teste", 1),
        None,
    ))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Sends a request and returns the status, headers and raw body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, value)
}

/// Tests the health endpoint.
///
/// Expected: 200 with the plain text status message
#[tokio::test]
async fn health_check() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, _, body) = send(app(db), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, router::HEALTH_MESSAGE.as_bytes());
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 with the export paths listed
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, doc) = send_json(app(db), get("/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/Vistoria/GerarPDF/{id}"].is_object());
    assert!(doc["paths"]["/User/CreateUser"].is_object());
}
