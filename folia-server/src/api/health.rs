//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Serialize)]
pub struct Health {
    pub service: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<Health>> {
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.db.pool)
        .await
    {
        Ok(_) => "ok",
        Err(_) => "unreachable",
    };

    Ok(Json(Health {
        service: "folia-server",
        version: env!("CARGO_PKG_VERSION"),
        database,
    }))
}
