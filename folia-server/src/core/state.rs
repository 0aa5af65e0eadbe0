//! Server state
//!
//! Shared application state handed to every handler. Holds the connection
//! pool and the JWT service; there is no other in-process mutable state —
//! all operations are request-scoped (the storage engine's transaction
//! isolation is the only concurrency mechanism).

use crate::auth::{JwtConfig, JwtService};
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    pub db: DbService,
    pub jwt: JwtService,
    pub config: Config,
}

impl ServerState {
    /// Open the database (running migrations) and build the JWT service
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_path).await?;
        let jwt = JwtService::new(config.jwt.clone());
        Ok(Self {
            db,
            jwt,
            config: config.clone(),
        })
    }

    /// State over an already-open database (tests)
    pub fn with_db(db: DbService, jwt_config: JwtConfig) -> Self {
        Self {
            db,
            jwt: JwtService::new(jwt_config.clone()),
            config: Config {
                jwt: jwt_config,
                ..Config::from_env()
            },
        }
    }
}
