mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, service::auth::jwt::JwtConfig, startup,
    state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "vistoria=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let report_logo = startup::load_report_logo(&config);
    let jwt = JwtConfig::new(config.jwt_secret.clone(), config.jwt_expiry_hours);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Servidor rodando em http://{}:{}", config.host, config.port);

    axum::serve(listener, router::app(AppState::new(db, jwt, report_logo))).await?;

    Ok(())
}
