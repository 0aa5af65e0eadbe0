//! Server configuration

use crate::auth::JwtConfig;

/// Server configuration — all items can be overridden via environment
/// variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | folia.db | SQLite database file |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_DIR | (none) | daily rolling log files when set |
/// | JWT_SECRET / JWT_ISSUER / JWT_AUDIENCE | see auth module | token validation |
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_path: String,
    pub environment: String,
    pub log_dir: Option<String>,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "folia.db".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            jwt: JwtConfig::default(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
