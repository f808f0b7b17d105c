use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use entity::sea_orm_active_enums::Role;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::jwt::JwtConfig,
};

mod require;

fn jwt() -> JwtConfig {
    JwtConfig::new("segredo-de-teste", 1)
}

fn headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
