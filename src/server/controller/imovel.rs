use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        imovel::{
            CreateImovelDto, IcmQuery, ImovelCriadoDto, ImovelDto, NomeQuery, TipoImovelQuery,
            UpdateImovelDto,
        },
    },
    server::{
        error::AppError,
        model::imovel::{ImovelDetalhado, ImovelParams},
        service::imovel::ImovelService,
        state::AppState,
    },
};

/// Tag for grouping property endpoints in OpenAPI documentation
pub static IMOVEL_TAG: &str = "imovel";

fn into_dtos(imoveis: Vec<ImovelDetalhado>) -> Json<Vec<ImovelDto>> {
    Json(imoveis.into_iter().map(ImovelDetalhado::into_dto).collect())
}

/// Create a property and link it to its owner.
///
/// Both rows are written in one transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Property fields plus `proprietarioId`
///
/// # Returns
/// - `201 Created` - `{idImovel}`
/// - `400 Bad Request` - ICM already registered
/// - `404 Not Found` - Owner does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/imovel/criar",
    tag = IMOVEL_TAG,
    request_body = CreateImovelDto,
    responses(
        (status = 201, description = "Property created", body = ImovelCriadoDto),
        (status = 400, description = "ICM already registered", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_imovel(
    State(state): State<AppState>,
    Json(payload): Json<CreateImovelDto>,
) -> Result<impl IntoResponse, AppError> {
    let (params, proprietario_id) = ImovelParams::from_create_dto(payload);

    let imovel = ImovelService::new(&state.db)
        .create(params, proprietario_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ImovelCriadoDto {
            id_imovel: imovel.id,
        }),
    ))
}

/// Replace the fields of a property.
///
/// # Returns
/// - `200 OK` - Updated property with owners and inspections
/// - `400 Bad Request` - ICM used by another property
/// - `404 Not Found` - Property does not exist
#[utoipa::path(
    put,
    path = "/imovel/atualizar/{id}",
    tag = IMOVEL_TAG,
    params(
        ("id" = String, Path, description = "Property id")
    ),
    request_body = UpdateImovelDto,
    responses(
        (status = 200, description = "Property updated", body = ImovelDto),
        (status = 400, description = "ICM already registered", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_imovel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateImovelDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ImovelService::new(&state.db);

    let imovel = service.update(&id, ImovelParams::from(payload)).await?;
    let detalhado = service.get_by_id(&imovel.id).await?;

    Ok(Json(detalhado.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/imovel/excluir/{id}",
    tag = IMOVEL_TAG,
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Property deleted", body = MessageDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_imovel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ImovelService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Imóvel excluído com sucesso.")))
}

/// List properties with their owners.
#[utoipa::path(
    get,
    path = "/imovel/listar",
    tag = IMOVEL_TAG,
    responses(
        (status = 200, description = "All properties", body = Vec<ImovelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imoveis(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(ImovelService::new(&state.db).get_all().await?))
}

/// Get a property with its owners and inspections.
#[utoipa::path(
    get,
    path = "/imovel/por-id/{id}",
    tag = IMOVEL_TAG,
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Property", body = ImovelDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imovel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let imovel = ImovelService::new(&state.db).get_by_id(&id).await?;

    Ok(Json(imovel.into_dto()))
}

#[utoipa::path(
    get,
    path = "/imovel/por-icm",
    tag = IMOVEL_TAG,
    params(
        ("icm" = String, Query, description = "Municipal registration code")
    ),
    responses(
        (status = 200, description = "Property", body = ImovelDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imovel_por_icm(
    State(state): State<AppState>,
    Query(query): Query<IcmQuery>,
) -> Result<impl IntoResponse, AppError> {
    let imovel = ImovelService::new(&state.db).get_by_icm(&query.icm).await?;

    Ok(Json(imovel.into_dto()))
}

#[utoipa::path(
    get,
    path = "/imovel/por-tipo",
    tag = IMOVEL_TAG,
    params(
        ("tipo" = String, Query, description = "Property type")
    ),
    responses(
        (status = 200, description = "Properties of the type", body = Vec<ImovelDto>),
        (status = 400, description = "Unknown property type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imoveis_por_tipo(
    State(state): State<AppState>,
    Query(query): Query<TipoImovelQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(
        ImovelService::new(&state.db).get_by_tipo(query.tipo).await?,
    ))
}

/// Properties whose street contains `nome`.
#[utoipa::path(
    get,
    path = "/imovel/por-nome",
    tag = IMOVEL_TAG,
    params(
        ("nome" = String, Query, description = "Part of the street name")
    ),
    responses(
        (status = 200, description = "Matching properties", body = Vec<ImovelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imoveis_por_nome(
    State(state): State<AppState>,
    Query(query): Query<NomeQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(
        ImovelService::new(&state.db).get_by_nome(&query.nome).await?,
    ))
}
