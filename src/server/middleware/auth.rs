use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::usuario::UsuarioRepository,
    error::{auth::AuthError, AppError},
    model::usuario::Usuario,
    service::auth::jwt::JwtConfig,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Admin,
}

/// Resolves the user behind a bearer token and checks their permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtConfig, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    pub async fn require(&self, permissions: &[Permission]) -> Result<Usuario, AppError> {
        let token = self.bearer_token()?;

        let claims = self
            .jwt
            .validate(token)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let Some(usuario) = UsuarioRepository::new(self.db)
            .find_by_id(&claims.sub)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !usuario.is_admin() {
                        return Err(AuthError::AccessDenied(
                            usuario.id.clone(),
                            "User attempted an administrator action without the Adm role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(usuario)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let Some(value) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingHeader);
        };

        let value = value.to_str().map_err(|_| AuthError::InvalidFormat)?;
        let Some(token) = value.strip_prefix(BEARER_PREFIX) else {
            return Err(AuthError::InvalidFormat);
        };

        let token = token.trim();
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        Ok(token)
    }
}
