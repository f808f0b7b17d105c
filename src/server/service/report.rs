//! Report export service.

use std::sync::Arc;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    report::{document::ReportDocument, file_name, ExportedReport, ReportFormat},
    service::vistoria::VistoriaService,
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    logo: Option<Arc<[u8]>>,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection, logo: Option<Arc<[u8]>>) -> Self {
        Self { db, logo }
    }

    /// Renders the report of an inspection.
    ///
    /// Image decoding and rendering run on the blocking thread pool.
    ///
    /// # Returns
    /// - `Ok(ExportedReport)` - Document bytes with attachment name and content type
    /// - `Err(AppError::NotFound)` - Inspection does not exist
    /// - `Err(AppError::ReportErr)` - Rendering failed
    /// - `Err(AppError::InternalError)` - Rendering task panicked or was cancelled
    pub async fn export(
        &self,
        vistoria_id: &str,
        format: ReportFormat,
    ) -> Result<ExportedReport, AppError> {
        let vistoria = VistoriaService::new(self.db).get_by_id(vistoria_id).await?;
        let logo = self.logo.clone();

        let bytes = tokio::task::spawn_blocking(move || {
            let document = ReportDocument::assemble(&vistoria, logo.as_deref());
            format.render(&document)
        })
        .await
        .map_err(|e| AppError::InternalError(format!("Tarefa de exportação falhou: {e}")))??;

        tracing::info!(
            "Vistoria {} exportada em {} ({} bytes)",
            vistoria_id,
            format.extension(),
            bytes.len()
        );

        Ok(ExportedReport {
            bytes,
            file_name: file_name(vistoria_id, format, Utc::now()),
            content_type: format.content_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::report::document::tests::png;

    /// Tests exporting with a configured logo on a multi-threaded runtime.
    ///
    /// Expected: Ok with a PDF named after the inspection
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn renders_off_the_async_workers() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (_, vistoria, comodo) = factory::helpers::create_vistoria_with_dependencies(db).await?;
        factory::create_componente(db, &comodo.id, &vistoria.id).await?;
        factory::create_foto_for_vistoria(db, &vistoria.id, "image/png", png(30, 30)).await?;

        let logo: Arc<[u8]> = Arc::from(png(10, 10));
        let report = ReportService::new(db, Some(logo))
            .export(&vistoria.id, ReportFormat::Pdf)
            .await?;

        assert!(report.bytes.starts_with(b"%PDF-"));
        assert!(report.file_name.starts_with(&format!("vistoria_{}_", vistoria.id)));
        assert_eq!(report.content_type, "application/pdf");

        Ok(())
    }

    /// Tests exporting an unknown inspection.
    ///
    /// Expected: Err(AppError::NotFound) before any rendering starts
    #[tokio::test]
    async fn unknown_inspection_is_not_found() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ReportService::new(db, None)
            .export("Vistoria9999", ReportFormat::Docx)
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
