//! Courtesy API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::courtesy;
use crate::utils::AppResult;
use shared::models::CourtesySummary;

/// List courtesies with item counts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<CourtesySummary>>> {
    let list = courtesy::find_all(&state.db.pool).await?;
    Ok(Json(list))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeResponse {
    pub items_deleted: u64,
    pub courtesies_deleted: u64,
}

/// Delete every courtesy and courtesy item. Destructive and irreversible;
/// the admin UI confirms before calling.
pub async fn purge_all(State(state): State<ServerState>) -> AppResult<Json<PurgeResponse>> {
    let (items_deleted, courtesies_deleted) = courtesy::purge_all(&state.db.pool).await?;
    Ok(Json(PurgeResponse {
        items_deleted,
        courtesies_deleted,
    }))
}
