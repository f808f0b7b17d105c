use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        item::{CreateItemDto, ItemDto},
    },
    server::{
        error::AppError, model::item::ItemKind, service::item::ItemService, state::AppState,
    },
};

/// Tag for grouping catalogue item endpoints in OpenAPI documentation
pub static ITEM_TAG: &str = "item";

async fn create(
    state: &AppState,
    kind: ItemKind,
    payload: CreateItemDto,
) -> Result<(StatusCode, Json<ItemDto>), AppError> {
    let item = ItemService::new(&state.db, kind)
        .create(&payload.name)
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

async fn get(state: &AppState, kind: ItemKind, id: &str) -> Result<Json<ItemDto>, AppError> {
    let item = ItemService::new(&state.db, kind).get_by_id(id).await?;

    Ok(Json(item.into_dto()))
}

async fn delete(state: &AppState, kind: ItemKind, id: &str) -> Result<Json<MessageDto>, AppError> {
    ItemService::new(&state.db, kind).delete(id).await?;

    Ok(Json(MessageDto::new(format!(
        "{} excluído com sucesso.",
        kind.label()
    ))))
}

#[utoipa::path(
    post,
    path = "/criarItemPrincipal",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 422, description = "Name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item_principal(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    create(&state, ItemKind::Principal, payload).await
}

#[utoipa::path(
    get,
    path = "/buscarItemPrincipal/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_principal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, ItemKind::Principal, &id).await
}

#[utoipa::path(
    delete,
    path = "/excluirItemPrincipal/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item_principal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, ItemKind::Principal, &id).await
}

#[utoipa::path(
    post,
    path = "/criarItemAcessorio",
    tag = ITEM_TAG,
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemDto),
        (status = 422, description = "Name missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_item_acessorio(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    create(&state, ItemKind::Acessorio, payload).await
}

#[utoipa::path(
    get,
    path = "/buscarItemAcessorio/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item", body = ItemDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_item_acessorio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    get(&state, ItemKind::Acessorio, &id).await
}

#[utoipa::path(
    delete,
    path = "/excluirItemAcessorio/{id}",
    tag = ITEM_TAG,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_item_acessorio(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    delete(&state, ItemKind::Acessorio, &id).await
}
