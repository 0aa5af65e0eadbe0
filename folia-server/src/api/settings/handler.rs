//! Settings API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::app_setting;
use crate::utils::AppResult;

/// Whether purchasing is enabled. Never fails — the repository resolves
/// missing rows and read failures to `true` (fail-open).
pub async fn get_purchase_enabled(State(state): State<ServerState>) -> Json<bool> {
    Json(app_setting::is_purchase_enabled(&state.db.pool).await)
}

#[derive(Debug, Deserialize)]
pub struct SetPurchaseEnabled {
    pub enabled: bool,
}

pub async fn set_purchase_enabled(
    State(state): State<ServerState>,
    Json(payload): Json<SetPurchaseEnabled>,
) -> AppResult<StatusCode> {
    app_setting::set_purchase_enabled(&state.db.pool, payload.enabled).await?;
    tracing::info!(enabled = payload.enabled, "purchase gating updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Current fee percent. Never fails — unusable stored values resolve to the
/// default.
pub async fn get_fee_percent(State(state): State<ServerState>) -> Json<f64> {
    Json(app_setting::fee_percent(&state.db.pool).await)
}

#[derive(Debug, Deserialize)]
pub struct SetFeePercent {
    pub percent: f64,
}

/// Set the fee percent; values outside [0, 100] are rejected before any
/// write.
pub async fn set_fee_percent(
    State(state): State<ServerState>,
    Json(payload): Json<SetFeePercent>,
) -> AppResult<StatusCode> {
    app_setting::set_fee_percent(&state.db.pool, payload.percent).await?;
    tracing::info!(percent = payload.percent, "fee percent updated");
    Ok(StatusCode::NO_CONTENT)
}
