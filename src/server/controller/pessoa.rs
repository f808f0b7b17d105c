use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::RolePessoa;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        pessoa::{CreatePessoaDto, PessoaDto, PessoasAgrupadasDto, UpdatePessoaDto},
    },
    server::{
        error::AppError,
        model::pessoa::{CreatePessoaParams, Pessoa, UpdatePessoaParams},
        service::pessoa::PessoaService,
        state::AppState,
    },
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PESSOA_TAG: &str = "pessoa";

fn into_dtos(pessoas: Vec<Pessoa>) -> Vec<PessoaDto> {
    pessoas.into_iter().map(Pessoa::into_dto).collect()
}

/// Register a person together with their address.
///
/// The full name is split into first, middle and last name and the phone number is
/// reduced to its digits.
///
/// # Returns
/// - `201 Created` - Person with address
/// - `400 Bad Request` - Missing data, email already registered or birth date not `DD/MM/AAAA`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/criarPessoa",
    tag = PESSOA_TAG,
    request_body = CreatePessoaDto,
    responses(
        (status = 201, description = "Person created", body = PessoaDto),
        (status = 400, description = "Missing or invalid data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pessoa(
    State(state): State<AppState>,
    Json(payload): Json<CreatePessoaDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePessoaParams::from_dto(payload)?;

    let pessoa = PessoaService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(pessoa.into_dto())))
}

/// Update a person and, when given, their address.
///
/// # Returns
/// - `200 OK` - Updated person
/// - `400 Bad Request` - Invalid birth date, incomplete address or email in use
/// - `404 Not Found` - Person does not exist
#[utoipa::path(
    put,
    path = "/atualizarPessoa",
    tag = PESSOA_TAG,
    request_body = UpdatePessoaDto,
    responses(
        (status = 200, description = "Person updated", body = PessoaDto),
        (status = 400, description = "Invalid data", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pessoa(
    State(state): State<AppState>,
    Json(payload): Json<UpdatePessoaDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdatePessoaParams::from_dto(payload)?;

    let pessoa = PessoaService::new(&state.db).update(params).await?;

    Ok(Json(pessoa.into_dto()))
}

#[utoipa::path(
    get,
    path = "/buscarPessoas",
    tag = PESSOA_TAG,
    responses(
        (status = 200, description = "All persons with address", body = Vec<PessoaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pessoas(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pessoas = PessoaService::new(&state.db).get_all().await?;

    Ok(Json(into_dtos(pessoas)))
}

/// Get all persons grouped by role.
#[utoipa::path(
    get,
    path = "/buscarPessoasAgrupadas",
    tag = PESSOA_TAG,
    responses(
        (status = 200, description = "Persons grouped by role", body = PessoasAgrupadasDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pessoas_agrupadas(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let agrupadas = PessoaService::new(&state.db).get_grouped().await?;

    Ok(Json(agrupadas.into_dto()))
}

#[utoipa::path(
    get,
    path = "/buscarPessoa/{id}",
    tag = PESSOA_TAG,
    params(
        ("id" = String, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person with address", body = PessoaDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pessoa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pessoa = PessoaService::new(&state.db).get_by_id(&id).await?;

    Ok(Json(pessoa.into_dto()))
}

/// Delete a person and their address.
#[utoipa::path(
    delete,
    path = "/excluirPessoa/{id}",
    tag = PESSOA_TAG,
    params(
        ("id" = String, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Person deleted", body = MessageDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pessoa(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    PessoaService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Pessoa excluída com sucesso.")))
}

async fn by_tipo(state: &AppState, tipo: RolePessoa) -> Result<Json<Vec<PessoaDto>>, AppError> {
    let pessoas = PessoaService::new(&state.db).get_by_tipo(tipo).await?;

    Ok(Json(into_dtos(pessoas)))
}

#[utoipa::path(
    get,
    path = "/buscarInquilino",
    tag = PESSOA_TAG,
    responses(
        (status = 200, description = "All tenants", body = Vec<PessoaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inquilinos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    by_tipo(&state, RolePessoa::Inquilino).await
}

#[utoipa::path(
    get,
    path = "/buscarVistoriador",
    tag = PESSOA_TAG,
    responses(
        (status = 200, description = "All inspectors", body = Vec<PessoaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vistoriadores(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    by_tipo(&state, RolePessoa::Vistoriador).await
}

#[utoipa::path(
    get,
    path = "/buscarProprietario",
    tag = PESSOA_TAG,
    responses(
        (status = 200, description = "All owners", body = Vec<PessoaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_proprietarios(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    by_tipo(&state, RolePessoa::Proprietario).await
}

/// Get persons whose address is in the given city and state.
#[utoipa::path(
    get,
    path = "/buscarPorEndereco/{cidade}/{estado}",
    tag = PESSOA_TAG,
    params(
        ("cidade" = String, Path, description = "City"),
        ("estado" = String, Path, description = "State")
    ),
    responses(
        (status = 200, description = "Matching persons", body = Vec<PessoaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pessoas_por_endereco(
    State(state): State<AppState>,
    Path((cidade, estado)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let pessoas = PessoaService::new(&state.db)
        .get_by_cidade_estado(&cidade, &estado)
        .await?;

    Ok(Json(into_dtos(pessoas)))
}
