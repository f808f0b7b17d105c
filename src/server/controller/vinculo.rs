use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        vinculo::{AluguelDto, CreateAluguelDto, CreateVinculoDto, VinculoDto},
    },
    server::{
        error::AppError,
        model::vinculo::{Aluguel, Vinculo},
        service::vinculo::VinculoService,
        state::AppState,
    },
};

/// Tag for grouping ownership and rental endpoints in OpenAPI documentation
pub static VINCULO_TAG: &str = "vinculo";

/// Link an owner to a property.
///
/// # Returns
/// - `201 Created` - Created link
/// - `404 Not Found` - Property or owner does not exist
/// - `422 Unprocessable Entity` - `imovelId` or `proprietarioId` missing
#[utoipa::path(
    post,
    path = "/Vinculo/CreateVinculo",
    tag = VINCULO_TAG,
    request_body = CreateVinculoDto,
    responses(
        (status = 201, description = "Link created", body = VinculoDto),
        (status = 404, description = "Property or owner not found", body = ErrorDto),
        (status = 422, description = "Missing ids", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vinculo(
    State(state): State<AppState>,
    Json(payload): Json<CreateVinculoDto>,
) -> Result<impl IntoResponse, AppError> {
    let vinculo = VinculoService::new(&state.db)
        .create_vinculo(payload.imovel_id, payload.proprietario_id)
        .await?;

    Ok((StatusCode::CREATED, Json(vinculo.into_dto())))
}

#[utoipa::path(
    get,
    path = "/Vinculo/PegarVinculos",
    tag = VINCULO_TAG,
    responses(
        (status = 200, description = "All owner links", body = Vec<VinculoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vinculos(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let vinculos = VinculoService::new(&state.db).get_vinculos().await?;

    Ok(Json(
        vinculos
            .into_iter()
            .map(Vinculo::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Register a tenant moving into a property.
///
/// `dataEntrada` defaults to the current time.
///
/// # Returns
/// - `201 Created` - Created rental
/// - `404 Not Found` - Property or tenant does not exist
/// - `422 Unprocessable Entity` - `imovelId` or `inquilinoId` missing
#[utoipa::path(
    post,
    path = "/Aluga/CreateAluguel",
    tag = VINCULO_TAG,
    request_body = CreateAluguelDto,
    responses(
        (status = 201, description = "Rental created", body = AluguelDto),
        (status = 404, description = "Property or tenant not found", body = ErrorDto),
        (status = 422, description = "Missing ids", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_aluguel(
    State(state): State<AppState>,
    Json(payload): Json<CreateAluguelDto>,
) -> Result<impl IntoResponse, AppError> {
    let aluguel = VinculoService::new(&state.db)
        .create_aluguel(
            payload.imovel_id,
            payload.inquilino_id,
            payload.data_entrada,
            payload.data_saida,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(aluguel.into_dto())))
}

#[utoipa::path(
    get,
    path = "/Aluga/PegarAluga",
    tag = VINCULO_TAG,
    responses(
        (status = 200, description = "All rentals", body = Vec<AluguelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alugueis(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let alugueis = VinculoService::new(&state.db).get_alugueis().await?;

    Ok(Json(
        alugueis
            .into_iter()
            .map(Aluguel::into_dto)
            .collect::<Vec<_>>(),
    ))
}
