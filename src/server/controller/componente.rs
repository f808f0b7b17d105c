use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        componente::{ComponenteDto, ComponenteInputDto},
    },
    server::{
        error::AppError,
        model::componente::{Componente, ComponenteParams},
        service::componente::ComponenteService,
        state::AppState,
    },
};

/// Tag for grouping component endpoints in OpenAPI documentation
pub static COMPONENTE_TAG: &str = "componente";

/// Record a component of a room for an inspection.
///
/// # Returns
/// - `201 Created` - Created component
/// - `404 Not Found` - Room or inspection does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/{vistoriaId}/{comodoId}/criarComponente",
    tag = COMPONENTE_TAG,
    params(
        ("vistoriaId" = String, Path, description = "Inspection id"),
        ("comodoId" = String, Path, description = "Room id")
    ),
    request_body = ComponenteInputDto,
    responses(
        (status = 201, description = "Component created", body = ComponenteDto),
        (status = 404, description = "Room or inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_componente(
    State(state): State<AppState>,
    Path((vistoria_id, comodo_id)): Path<(String, String)>,
    Json(payload): Json<ComponenteInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let componente = ComponenteService::new(&state.db)
        .create(&vistoria_id, &comodo_id, ComponenteParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(componente.into_dto())))
}

#[utoipa::path(
    put,
    path = "/atualizarComponente/{componenteId}/{comodoId}",
    tag = COMPONENTE_TAG,
    params(
        ("componenteId" = String, Path, description = "Component id"),
        ("comodoId" = String, Path, description = "Room id")
    ),
    request_body = ComponenteInputDto,
    responses(
        (status = 200, description = "Component updated", body = ComponenteDto),
        (status = 404, description = "Component or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_componente(
    State(state): State<AppState>,
    Path((componente_id, comodo_id)): Path<(String, String)>,
    Json(payload): Json<ComponenteInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let componente = ComponenteService::new(&state.db)
        .update(&componente_id, &comodo_id, ComponenteParams::from(payload))
        .await?;

    Ok(Json(componente.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/excluirComponente/{id}",
    tag = COMPONENTE_TAG,
    params(
        ("id" = String, Path, description = "Component id")
    ),
    responses(
        (status = 200, description = "Component deleted", body = MessageDto),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_componente(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ComponenteService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Componente excluído com sucesso.")))
}

/// Components recorded for a room across all inspections.
#[utoipa::path(
    get,
    path = "/buscarComponentesPorComodo/{comodoId}",
    tag = COMPONENTE_TAG,
    params(
        ("comodoId" = String, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Components of the room", body = Vec<ComponenteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_componentes_por_comodo(
    State(state): State<AppState>,
    Path(comodo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let componentes = ComponenteService::new(&state.db)
        .get_by_comodo(&comodo_id)
        .await?;

    Ok(Json(
        componentes
            .into_iter()
            .map(Componente::into_dto)
            .collect::<Vec<_>>(),
    ))
}
