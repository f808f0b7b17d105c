//! Photo upload, listing and download for properties, inspections and components.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        foto::{FotoDto, FotosEnviadasDto},
    },
    server::{
        error::AppError,
        model::foto::{Foto, FotoOwner, NovaFoto},
        service::foto::FotoService,
        state::AppState,
    },
};

/// Tag for grouping photo endpoints in OpenAPI documentation
pub static FOTO_TAG: &str = "foto";

/// Collects every file part of a multipart body. Parts without a file name are ignored.
async fn read_fotos(mut multipart: Multipart) -> Result<Vec<NovaFoto>, AppError> {
    let mut fotos = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let mimetype = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?.to_vec();

        fotos.push(NovaFoto {
            mimetype,
            file_name: Some(file_name),
            data,
        });
    }

    Ok(fotos)
}

async fn upload(
    state: &AppState,
    owner: FotoOwner,
    multipart: Multipart,
) -> Result<(StatusCode, Json<FotosEnviadasDto>), AppError> {
    let fotos = read_fotos(multipart).await?;

    let stored = FotoService::new(&state.db).upload(owner, fotos).await?;

    Ok((
        StatusCode::CREATED,
        Json(FotosEnviadasDto {
            mensagem: "Fotos enviadas com sucesso.".to_string(),
            fotos: stored.into_iter().map(Foto::into_dto).collect(),
        }),
    ))
}

async fn list(state: &AppState, owner: FotoOwner) -> Result<Json<Vec<FotoDto>>, AppError> {
    let fotos = FotoService::new(&state.db).list(owner).await?;

    Ok(Json(fotos.into_iter().map(Foto::into_dto).collect()))
}

/// Upload PNG or JPEG photos of a property.
///
/// # Returns
/// - `201 Created` - Stored photo metadata
/// - `400 Bad Request` - No files sent or malformed multipart body
/// - `404 Not Found` - Property does not exist
/// - `422 Unprocessable Entity` - A file is not PNG or JPEG
#[utoipa::path(
    post,
    path = "/imovel/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Property id")
    ),
    request_body(content_type = "multipart/form-data", description = "Image files"),
    responses(
        (status = 201, description = "Photos stored", body = FotosEnviadasDto),
        (status = 400, description = "No files sent", body = ErrorDto),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 422, description = "Unsupported file type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_imovel_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    upload(&state, FotoOwner::Imovel(id), multipart).await
}

#[utoipa::path(
    get,
    path = "/imovel/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Property id")
    ),
    responses(
        (status = 200, description = "Photo metadata", body = Vec<FotoDto>),
        (status = 404, description = "Property not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_imovel_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, FotoOwner::Imovel(id)).await
}

/// Upload PNG or JPEG photos of an inspection.
#[utoipa::path(
    post,
    path = "/Vistoria/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    request_body(content_type = "multipart/form-data", description = "Image files"),
    responses(
        (status = 201, description = "Photos stored", body = FotosEnviadasDto),
        (status = 400, description = "No files sent", body = ErrorDto),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 422, description = "Unsupported file type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_vistoria_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    upload(&state, FotoOwner::Vistoria(id), multipart).await
}

#[utoipa::path(
    get,
    path = "/Vistoria/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    responses(
        (status = 200, description = "Photo metadata", body = Vec<FotoDto>),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vistoria_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, FotoOwner::Vistoria(id)).await
}

/// Upload PNG or JPEG photos of a component.
#[utoipa::path(
    post,
    path = "/componente/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Component id")
    ),
    request_body(content_type = "multipart/form-data", description = "Image files"),
    responses(
        (status = 201, description = "Photos stored", body = FotosEnviadasDto),
        (status = 400, description = "No files sent", body = ErrorDto),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 422, description = "Unsupported file type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_componente_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    upload(&state, FotoOwner::Componente(id), multipart).await
}

#[utoipa::path(
    get,
    path = "/componente/{id}/fotos",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Component id")
    ),
    responses(
        (status = 200, description = "Photo metadata", body = Vec<FotoDto>),
        (status = 404, description = "Component not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_componente_fotos(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    list(&state, FotoOwner::Componente(id)).await
}

/// Download the bytes of a photo with its stored content type.
#[utoipa::path(
    get,
    path = "/fotos/{id}",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/*"),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_foto(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let foto = FotoService::new(&state.db).get(&id).await?;

    Ok(([(header::CONTENT_TYPE, foto.mimetype)], foto.data))
}

#[utoipa::path(
    delete,
    path = "/fotos/{id}",
    tag = FOTO_TAG,
    params(
        ("id" = String, Path, description = "Photo id")
    ),
    responses(
        (status = 200, description = "Photo deleted", body = MessageDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_foto(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    FotoService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Foto excluída com sucesso.")))
}
