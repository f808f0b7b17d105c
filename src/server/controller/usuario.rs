use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        usuario::{
            ChangePermissionDto, CreateUsuarioDto, LoginDto, LoginResponseDto, UsuarioDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::usuario::RegisterUsuarioParams,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USUARIO_TAG: &str = "usuario";

/// Register a new user.
///
/// Validates the request body, hashes the password and stores the user. The email is
/// stored lowercased and must not be registered yet.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Name, email, password with confirmation, birth date and optional role
///
/// # Returns
/// - `201 Created` - User registered
/// - `400 Bad Request` - Validation failed or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/User/CreateUser",
    tag = USUARIO_TAG,
    request_body = CreateUsuarioDto,
    responses(
        (status = 201, description = "User registered", body = UsuarioDto),
        (status = 400, description = "Validation failed or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUsuarioDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let params = RegisterUsuarioParams::from_dto(payload)?;
    let usuario = AuthService::new(&state.db, &state.jwt)
        .register(params)
        .await?;

    Ok((StatusCode::CREATED, Json(usuario.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - `{jwt: "Bearer <token>", userId}`
/// - `400 Bad Request` - Unknown user or wrong password
/// - `500 Internal Server Error` - Database or token signing error
#[utoipa::path(
    post,
    path = "/User/Login",
    tag = USUARIO_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Unknown user or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = AuthService::new(&state.db, &state.jwt)
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponseDto {
        jwt: result.jwt,
        user_id: result.user_id,
    }))
}

/// Change the role of a user.
///
/// # Access Control
/// - `Admin` - Requires `Authorization: Bearer <jwt>` of an `Adm` user
///
/// # Arguments
/// - `state` - Application state containing the database connection and token settings
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Target user id and new role
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Authorization header missing
/// - `401 Unauthorized` - Malformed header or empty token
/// - `403 Forbidden` - Invalid token, unknown requester or requester is not an admin
/// - `404 Not Found` - Target user does not exist
#[utoipa::path(
    put,
    path = "/Permission/ChangePermission",
    tag = USUARIO_TAG,
    request_body = ChangePermissionDto,
    responses(
        (status = 200, description = "Role changed", body = UsuarioDto),
        (status = 400, description = "Authorization header missing", body = ErrorDto),
        (status = 401, description = "Malformed authorization header", body = ErrorDto),
        (status = 403, description = "Invalid token or not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_permission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let usuario = AuthService::new(&state.db, &state.jwt)
        .change_permission(&admin, &payload.user_id, payload.tipo)
        .await?;

    Ok(Json(usuario.into_dto()))
}
