//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the top-level error
//! type returned by every service and controller; it wraps domain-specific errors and
//! implements `IntoResponse` so handlers can use `?` throughout.

pub mod auth;
pub mod config;
pub mod internal;
pub mod report;

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, report::ReportError,
    },
};

/// Message returned for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. `AuthError` handles its own
/// response mapping, the message variants carry the text sent to the client, and every
/// infrastructure failure becomes a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Report rendering failed.
    #[error(transparent)]
    ReportErr(#[from] ReportError),

    /// Unexpected internal state such as exhausted id generation.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Token signing failure. Verification failures are reported as `AuthError`.
    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request listing every failed rule in `detalhes`.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Malformed multipart upload.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    MultipartErr(#[from] MultipartError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Well-formed request missing required data.
    ///
    /// Results in 422 Unprocessable Entity with the provided message.
    #[error("{0}")]
    Unprocessable(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged, a generic one is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ValidationErr` and `MultipartErr`
/// - 404 Not Found - For `NotFound`
/// - 422 Unprocessable Entity - For `Unprocessable`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Unprocessable(msg) => error_response(StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::ValidationErr(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    mensagem: "Erro de validação".to_string(),
                    detalhes: Some(validation_messages(&errors)),
                }),
            )
                .into_response(),
            Self::MultipartErr(err) => {
                tracing::debug!("Multipart inválido: {}", err);
                error_response(StatusCode::BAD_REQUEST, "Envio de arquivos inválido.")
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds an error response with a plain message.
pub fn error_response(status: StatusCode, mensagem: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            mensagem: mensagem.into(),
            detalhes: None,
        }),
    )
        .into_response()
}

/// Flattens validator errors into their messages, sorted for stable output.
fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("Campo inválido: {}", field),
            })
        })
        .collect();
    messages.sort();
    messages
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}
