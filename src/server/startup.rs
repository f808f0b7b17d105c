use std::sync::Arc;

use crate::server::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request
/// is served. Both SQLite and PostgreSQL URLs are accepted.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Reads the report logo configured in `REPORT_LOGO_PATH`.
///
/// A missing or undecodable logo is not fatal: reports are produced without one and a
/// warning is logged.
pub fn load_report_logo(config: &Config) -> Option<Arc<[u8]>> {
    let path = config.report_logo_path.as_ref()?;

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Não foi possível ler o logo {}: {}", path.display(), e);
            return None;
        }
    };

    if let Err(e) = image::guess_format(&bytes) {
        tracing::warn!("Logo {} não é uma imagem suportada: {}", path.display(), e);
        return None;
    }

    tracing::info!("Logo de relatório carregado de {}", path.display());

    Some(Arc::from(bytes))
}
