use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, LatestIdDto, MessageDto},
        vistoria::{
            CreateVistoriaDto, PegarVistoriasQuery, UpdateVistoriaDto, VistoriaCriadaDto,
            VistoriaDto, VistoriaResumoDto,
        },
    },
    server::{
        error::AppError,
        model::vistoria::{CreateVistoriaParams, VistoriaCompleta, VistoriaFilter},
        report::ReportFormat,
        service::{
            report::ReportService,
            vistoria::{VistoriaCriada, VistoriaService},
        },
        state::AppState,
    },
};

/// Tag for grouping inspection endpoints in OpenAPI documentation
pub static VISTORIA_TAG: &str = "vistoria";

/// Start an inspection of a property.
///
/// When an inspection of the same property and type already exists it is returned
/// instead of creating a second one. The user in the path is only recorded in the log.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `imovel_id` - Property being inspected
/// - `usuario_id` - User starting the inspection
/// - `payload` - Optional inspector id and type (default `Entrada`)
///
/// # Returns
/// - `201 Created` - Inspection created
/// - `200 OK` - Inspection already in progress
/// - `400 Bad Request` - Property does not exist
/// - `404 Not Found` - Inspector does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/Vistoria/CreateVistoria/{imovelId}/{usuarioId}",
    tag = VISTORIA_TAG,
    params(
        ("imovelId" = String, Path, description = "Property id"),
        ("usuarioId" = String, Path, description = "User starting the inspection")
    ),
    request_body = CreateVistoriaDto,
    responses(
        (status = 201, description = "Inspection created", body = VistoriaCriadaDto),
        (status = 200, description = "Inspection already in progress", body = VistoriaCriadaDto),
        (status = 400, description = "Property not found", body = ErrorDto),
        (status = 404, description = "Inspector not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vistoria(
    State(state): State<AppState>,
    Path((imovel_id, usuario_id)): Path<(String, String)>,
    Json(payload): Json<CreateVistoriaDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        "Usuário {} iniciando vistoria do imóvel {}",
        usuario_id,
        imovel_id
    );

    let params = CreateVistoriaParams {
        imovel_id,
        vistoriador_id: payload.vistoriador_id,
        tipo: payload.tipo.unwrap_or_default(),
    };

    let (status, mensagem, vistoria) = match VistoriaService::new(&state.db).create(params).await? {
        VistoriaCriada::Nova(vistoria) => (
            StatusCode::CREATED,
            "Vistoria criada com sucesso.",
            vistoria,
        ),
        VistoriaCriada::EmAndamento(vistoria) => (
            StatusCode::OK,
            "Vistoria já em andamento encontrada.",
            vistoria,
        ),
    };

    Ok((
        status,
        Json(VistoriaCriadaDto {
            mensagem: mensagem.to_string(),
            vistoria_id: vistoria.id,
            imovel_id: vistoria.imovel_id,
        }),
    ))
}

/// List inspections with property, inspector, rooms and photos.
///
/// `searchText` matches id, street, city and inspector name case-insensitively.
/// `sortType` is `asc` or `desc` by date, descending by default.
#[utoipa::path(
    get,
    path = "/Vistoria/PegarVistorias",
    tag = VISTORIA_TAG,
    params(
        ("searchText" = Option<String>, Query, description = "Text to search for"),
        ("sortType" = Option<String>, Query, description = "asc or desc (default)")
    ),
    responses(
        (status = 200, description = "Inspections", body = Vec<VistoriaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vistorias(
    State(state): State<AppState>,
    Query(query): Query<PegarVistoriasQuery>,
) -> Result<impl IntoResponse, AppError> {
    let vistorias = VistoriaService::new(&state.db)
        .get_all(VistoriaFilter::from(query))
        .await?;

    Ok(Json(
        vistorias
            .into_iter()
            .map(VistoriaCompleta::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get one inspection with everything attached to it.
///
/// Served under `/Vistoria/PegarVistorias/{id}`, `/Vistoria/PegarVistoria/{id}` and
/// `/Vistoria/PegarVistoriaC/{id}`.
#[utoipa::path(
    get,
    path = "/Vistoria/PegarVistoria/{id}",
    tag = VISTORIA_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    responses(
        (status = 200, description = "Inspection", body = VistoriaDto),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vistoria(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let vistoria = VistoriaService::new(&state.db).get_by_id(&id).await?;

    Ok(Json(vistoria.into_dto()))
}

#[utoipa::path(
    get,
    path = "/Vistoria/UltimaVistoria",
    tag = VISTORIA_TAG,
    responses(
        (status = 200, description = "Most recent inspection", body = VistoriaResumoDto),
        (status = 404, description = "No inspections", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ultima_vistoria(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vistoria = VistoriaService::new(&state.db)
        .latest()
        .await?
        .ok_or_else(|| AppError::NotFound("Nenhuma vistoria encontrada.".to_string()))?;

    Ok(Json(vistoria.into_resumo_dto()))
}

/// Id of the most recent inspection, `null` when there is none.
#[utoipa::path(
    get,
    path = "/obterUltimaVistoriaUsuario",
    tag = VISTORIA_TAG,
    responses(
        (status = 200, description = "Latest inspection id", body = LatestIdDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ultima_vistoria_id(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let vistoria = VistoriaService::new(&state.db).latest().await?;

    Ok(Json(LatestIdDto {
        id: vistoria.map(|v| v.id),
    }))
}

/// Update inspector, property, date or type of an inspection.
///
/// # Returns
/// - `200 OK` - Updated inspection
/// - `404 Not Found` - Inspection, new property or new inspector does not exist
#[utoipa::path(
    put,
    path = "/Vistoria/AtualizarVistoria/{id}",
    tag = VISTORIA_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    request_body = UpdateVistoriaDto,
    responses(
        (status = 200, description = "Inspection updated", body = VistoriaResumoDto),
        (status = 404, description = "Inspection, property or inspector not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vistoria(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateVistoriaDto>,
) -> Result<impl IntoResponse, AppError> {
    let vistoria = VistoriaService::new(&state.db)
        .update(&id, payload.into())
        .await?;

    Ok(Json(vistoria.into_resumo_dto()))
}

#[utoipa::path(
    delete,
    path = "/Vistoria/ExcluirVistoria/{id}",
    tag = VISTORIA_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    responses(
        (status = 200, description = "Inspection deleted", body = MessageDto),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vistoria(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    VistoriaService::new(&state.db).delete(&id).await?;

    Ok(Json(MessageDto::new("Vistoria excluída com sucesso.")))
}

async fn export(
    state: &AppState,
    id: &str,
    format: ReportFormat,
) -> Result<impl IntoResponse, AppError> {
    let report = ReportService::new(&state.db, state.report_logo.clone())
        .export(id, format)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, report.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", report.file_name),
            ),
        ],
        report.bytes,
    ))
}

/// Export an inspection report as PDF.
///
/// Rooms follow the fixed report order and photos are embedded after them.
///
/// # Returns
/// - `200 OK` - `application/pdf` attachment named `vistoria_<id>_<timestamp>.pdf`
/// - `404 Not Found` - Inspection does not exist
/// - `500 Internal Server Error` - Database or rendering error
#[utoipa::path(
    get,
    path = "/Vistoria/GerarPDF/{id}",
    tag = VISTORIA_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf"),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn gerar_pdf(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    export(&state, &id, ReportFormat::Pdf).await
}

/// Export an inspection report as a Word document.
#[utoipa::path(
    get,
    path = "/Vistoria/GerarDOCX/{id}",
    tag = VISTORIA_TAG,
    params(
        ("id" = String, Path, description = "Inspection id")
    ),
    responses(
        (
            status = 200,
            description = "DOCX report",
            content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn gerar_docx(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    export(&state, &id, ReportFormat::Docx).await
}
