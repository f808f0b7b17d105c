//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::auth::jwt::JwtConfig;

/// Application state containing shared resources.
///
/// All fields are cheap to clone: the database connection is a pool handle and the
/// logo bytes are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool shared by all requests.
    pub db: DatabaseConnection,

    /// Secret and lifetime used to issue and verify bearer tokens.
    pub jwt: JwtConfig,

    /// Encoded logo image drawn on exported reports, if configured.
    pub report_logo: Option<Arc<[u8]>>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token signing configuration
    /// - `report_logo` - Optional logo bytes for report headers
    pub fn new(db: DatabaseConnection, jwt: JwtConfig, report_logo: Option<Arc<[u8]>>) -> Self {
        Self {
            db,
            jwt,
            report_logo,
        }
    }
}
