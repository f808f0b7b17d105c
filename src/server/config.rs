use std::path::PathBuf;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,

    pub host: String,
    pub port: u16,

    /// PNG or JPEG drawn at the top of exported reports.
    pub report_logo_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_hours: parsed("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parsed("PORT", DEFAULT_PORT)?,
            report_logo_path: std::env::var("REPORT_LOGO_PATH")
                .ok()
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
