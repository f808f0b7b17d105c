use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        endereco::{CreateEnderecoDto, EnderecoDto},
    },
    server::{
        error::AppError,
        model::endereco::{Endereco, EnderecoParams},
        service::endereco::EnderecoService,
        state::AppState,
    },
};

/// Tag for grouping address endpoints in OpenAPI documentation
pub static ENDERECO_TAG: &str = "endereco";

fn into_dtos(enderecos: Vec<Endereco>) -> Json<Vec<EnderecoDto>> {
    Json(enderecos.into_iter().map(Endereco::into_dto).collect())
}

/// Create a standalone address. Every field is required.
#[utoipa::path(
    post,
    path = "/Endereco/CreateEndereco",
    tag = ENDERECO_TAG,
    request_body = CreateEnderecoDto,
    responses(
        (status = 201, description = "Address created", body = EnderecoDto),
        (status = 422, description = "Missing fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_endereco(
    State(state): State<AppState>,
    Json(payload): Json<CreateEnderecoDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = EnderecoParams::from_dto(payload).ok_or_else(|| {
        AppError::Unprocessable("Todos os campos do endereço são obrigatórios.".to_string())
    })?;

    let endereco = EnderecoService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(endereco.into_dto())))
}

#[utoipa::path(
    get,
    path = "/Endereco/PegarEnderecos",
    tag = ENDERECO_TAG,
    responses(
        (status = 200, description = "All addresses", body = Vec<EnderecoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enderecos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(EnderecoService::new(&state.db).get_all().await?))
}

#[utoipa::path(
    get,
    path = "/Endereco/PegarEnderecoPorId/{id}",
    tag = ENDERECO_TAG,
    params(
        ("id" = String, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "Address", body = EnderecoDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_endereco(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let endereco = EnderecoService::new(&state.db).get_by_id(&id).await?;

    Ok(Json(endereco.into_dto()))
}

#[utoipa::path(
    get,
    path = "/Endereco/PegarEnderecoPorRua/{rua}",
    tag = ENDERECO_TAG,
    params(
        ("rua" = String, Path, description = "Street name")
    ),
    responses(
        (status = 200, description = "Addresses on the street", body = Vec<EnderecoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enderecos_por_rua(
    State(state): State<AppState>,
    Path(rua): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(EnderecoService::new(&state.db).get_by_rua(&rua).await?))
}

#[utoipa::path(
    get,
    path = "/Endereco/PegarEnderecosPorCidade/{cidade}",
    tag = ENDERECO_TAG,
    params(
        ("cidade" = String, Path, description = "City")
    ),
    responses(
        (status = 200, description = "Addresses in the city", body = Vec<EnderecoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enderecos_por_cidade(
    State(state): State<AppState>,
    Path(cidade): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(
        EnderecoService::new(&state.db).get_by_cidade(&cidade).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/Endereco/PegarEnderecosPorCep/{cep}",
    tag = ENDERECO_TAG,
    params(
        ("cep" = String, Path, description = "Postal code")
    ),
    responses(
        (status = 200, description = "Addresses with the postal code", body = Vec<EnderecoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_enderecos_por_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(EnderecoService::new(&state.db).get_by_cep(&cep).await?))
}
