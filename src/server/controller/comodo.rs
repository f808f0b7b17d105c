use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, LatestIdDto, MessageDto},
        comodo::{ComodoCriadoDto, ComodoDto, CreateComodoDto, QuantidadeQuery, UpdateComodoDto},
    },
    server::{
        error::AppError,
        model::comodo::ComodoComComponentes,
        service::comodo::ComodoService,
        state::AppState,
        util::parse::parse_quantidade,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static COMODO_TAG: &str = "comodo";

const DEFAULT_QUANTIDADE: usize = 5;

fn into_dtos(comodos: Vec<ComodoComComponentes>) -> Json<Vec<ComodoDto>> {
    Json(
        comodos
            .into_iter()
            .map(ComodoComComponentes::into_dto)
            .collect(),
    )
}

/// Add a room to a property, numbered after the last room of the same type.
#[utoipa::path(
    post,
    path = "/Comodo/{imovelId}/CriarComodo",
    tag = COMODO_TAG,
    params(
        ("imovelId" = String, Path, description = "Property id")
    ),
    request_body = CreateComodoDto,
    responses(
        (status = 201, description = "Room created", body = ComodoCriadoDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comodo(
    State(state): State<AppState>,
    Path(imovel_id): Path<String>,
    Json(payload): Json<CreateComodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let comodo = ComodoService::new(&state.db)
        .create(&imovel_id, payload.tipo)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ComodoCriadoDto {
            comodo: comodo.into_dto(),
        }),
    ))
}

/// Add a room with the preset component checklist of its type.
///
/// The room number is one above the highest number in the property. The preset
/// components are recorded for the given inspection.
///
/// # Returns
/// - `201 Created` - Room with its components
/// - `404 Not Found` - Property or inspection does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/Comodo/{imovelId}/{vistoriaId}/CriarComodoComComponentes",
    tag = COMODO_TAG,
    params(
        ("imovelId" = String, Path, description = "Property id"),
        ("vistoriaId" = String, Path, description = "Inspection id")
    ),
    request_body = CreateComodoDto,
    responses(
        (status = 201, description = "Room created with components", body = ComodoCriadoDto),
        (status = 404, description = "Property or inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comodo_com_componentes(
    State(state): State<AppState>,
    Path((imovel_id, vistoria_id)): Path<(String, String)>,
    Json(payload): Json<CreateComodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let comodo = ComodoService::new(&state.db)
        .create_with_componentes(&imovel_id, &vistoria_id, payload.tipo)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ComodoCriadoDto {
            comodo: comodo.into_dto(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/comodoget/{imovelId}",
    tag = COMODO_TAG,
    params(
        ("imovelId" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Rooms with components", body = Vec<ComodoDto>),
        (status = 404, description = "No rooms for the property", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comodos(
    State(state): State<AppState>,
    Path(imovel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(into_dtos(
        ComodoService::new(&state.db).get_by_imovel(&imovel_id).await?,
    ))
}

/// Highest-numbered room.
#[utoipa::path(
    get,
    path = "/Comodo/UltimoComodo",
    tag = COMODO_TAG,
    responses(
        (status = 200, description = "Latest room", body = ComodoDto),
        (status = 404, description = "No rooms", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ultimo_comodo(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let comodo = ComodoService::new(&state.db)
        .latest()
        .await?
        .ok_or_else(|| AppError::NotFound("Nenhum comodo encontrado.".to_string()))?;

    Ok(Json(comodo.into_dto()))
}

#[utoipa::path(
    get,
    path = "/obterUltimoComodoUsuario",
    tag = COMODO_TAG,
    responses(
        (status = 200, description = "Latest room id", body = LatestIdDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ultimo_comodo_id(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let comodo = ComodoService::new(&state.db).latest().await?;

    Ok(Json(LatestIdDto {
        id: comodo.map(|c| c.id),
    }))
}

/// Latest rooms, with components, of the property the given room belongs to.
///
/// # Returns
/// - `200 OK` - Up to `quantidade` rooms (default 5), highest number first
/// - `400 Bad Request` - `quantidade` is not a positive integer
/// - `404 Not Found` - Room unknown or no rooms found
#[utoipa::path(
    get,
    path = "/Comodo/{comodoId}/UltimoComodoComponente",
    tag = COMODO_TAG,
    params(
        ("comodoId" = String, Path, description = "Room id"),
        ("quantidade" = Option<u32>, Query, description = "Number of rooms (default: 5)")
    ),
    responses(
        (status = 200, description = "Latest rooms with components", body = Vec<ComodoDto>),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ultimos_comodos_componentes(
    State(state): State<AppState>,
    Path(comodo_id): Path<String>,
    Query(query): Query<QuantidadeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let quantidade = parse_quantidade(query.quantidade.as_deref(), DEFAULT_QUANTIDADE)?;

    Ok(into_dtos(
        ComodoService::new(&state.db)
            .latest_with_componentes(&comodo_id, quantidade)
            .await?,
    ))
}

/// Change the type of a room of the property.
#[utoipa::path(
    put,
    path = "/Comodo/{imovelId}/{comodoId}",
    tag = COMODO_TAG,
    params(
        ("imovelId" = String, Path, description = "Property id"),
        ("comodoId" = String, Path, description = "Room id")
    ),
    request_body = UpdateComodoDto,
    responses(
        (status = 200, description = "Room updated", body = ComodoDto),
        (status = 404, description = "Room not found in the property", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comodo(
    State(state): State<AppState>,
    Path((imovel_id, comodo_id)): Path<(String, String)>,
    Json(payload): Json<UpdateComodoDto>,
) -> Result<impl IntoResponse, AppError> {
    let comodo = ComodoService::new(&state.db)
        .update_tipo(&imovel_id, &comodo_id, payload.tipo)
        .await?;

    Ok(Json(comodo.into_dto()))
}

/// Delete a room together with its components.
#[utoipa::path(
    delete,
    path = "/Comodo/{comodoId}",
    tag = COMODO_TAG,
    params(
        ("comodoId" = String, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comodo(
    State(state): State<AppState>,
    Path(comodo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ComodoService::new(&state.db).delete(&comodo_id).await?;

    Ok(Json(MessageDto::new("Comodo excluído com sucesso.")))
}
