//! Pricing Lot API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::lot;
use crate::utils::{AppError, AppResult};
use shared::models::{Lot, LotCreate, LotUpdate};

/// List all lots (public — the storefront shows the price table)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Lot>>> {
    let lots = lot::find_all(&state.db.pool).await?;
    Ok(Json(lots))
}

/// Currently active lot (404 when none is active, e.g. a fresh deploy)
pub async fn get_active(State(state): State<ServerState>) -> AppResult<Json<Lot>> {
    let active = lot::find_active(&state.db.pool)
        .await?
        .ok_or_else(|| AppError::not_found("No active lot"))?;
    Ok(Json(active))
}

/// Create a lot (inactive until explicitly activated)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LotCreate>,
) -> AppResult<Json<Lot>> {
    let created = lot::create(&state.db.pool, payload).await?;
    Ok(Json(created))
}

/// Update lot name/prices (never the active flag)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<LotUpdate>,
) -> AppResult<Json<Lot>> {
    let updated = lot::update(&state.db.pool, id, payload).await?;
    Ok(Json(updated))
}

/// Activation response: the now-active lot plus a diagnostic count of active
/// lots (expected to be 1)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateResponse {
    pub activated_lot: Lot,
    pub active_count: i64,
}

/// Activate a lot, atomically deactivating all others.
///
/// Mutating and idempotent-on-retry, but not cacheable — the response
/// carries `Cache-Control: no-store`.
pub async fn activate(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let (activated_lot, active_count) = lot::activate(&state.db.pool, id).await?;

    tracing::info!(lot_id = id, active_count, "lot activated");

    let body = Json(ActivateResponse {
        activated_lot,
        active_count,
    });
    Ok(([(header::CACHE_CONTROL, "no-store")], body).into_response())
}
