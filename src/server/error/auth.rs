use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on a protected request.
    #[error("Authorization header missing")]
    MissingHeader,

    /// Header present but not of the form `Bearer <token>`.
    #[error("Authorization header is not a bearer token")]
    InvalidFormat,

    /// `Bearer` prefix without a token.
    #[error("Bearer token missing")]
    MissingToken,

    /// Signature, expiry or claims check failed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token refers to a user that no longer exists.
    #[error("User {0} from token not found")]
    UserNotInDatabase(String),

    /// User lacks the permission required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Description of the attempted action, for logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(String, String),

    /// Login with unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingHeader` / `InvalidCredentials` → 400 Bad Request
/// - `InvalidFormat` / `MissingToken` → 401 Unauthorized
/// - `InvalidToken` / `UserNotInDatabase` / `AccessDenied` → 403 Forbidden
///
/// Details are logged at debug level; client messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingHeader => error_response(StatusCode::BAD_REQUEST, "Token inválido."),
            Self::InvalidFormat => {
                error_response(StatusCode::UNAUTHORIZED, "Formato do token inválido.")
            }
            Self::MissingToken => error_response(StatusCode::UNAUTHORIZED, "Token ausente."),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                error_response(StatusCode::FORBIDDEN, "Não autorizado.")
            }
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "Você não tem permissão para modificar as permissões.",
            ),
            Self::InvalidCredentials => error_response(
                StatusCode::BAD_REQUEST,
                "Usuário não encontrado ou senha incorreta.",
            ),
        }
    }
}
