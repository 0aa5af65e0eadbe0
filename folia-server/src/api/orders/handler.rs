//! Order API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::{ArchiveOptions, Order, OrderDetail, OrderStatus};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub include_archived: bool,
}

fn default_limit() -> i64 {
    50
}

/// List orders (paginated, newest first; archived hidden by default)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(
        &state.db.pool,
        query.status,
        query.include_archived,
        query.limit,
        query.offset,
    )
    .await?;
    Ok(Json(orders))
}

/// Get order with items
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let detail = order::find_detail(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
    Ok(Json(detail))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
    pub deleted: bool,
}

/// Hard-delete an order and its items
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<DeleteResponse>> {
    order::delete(&state.db.pool, id).await?;

    tracing::info!(order_id = id, "order deleted");
    Ok(Json(DeleteResponse {
        ok: true,
        deleted: true,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub ok: bool,
    pub archived_count: u64,
}

/// Bulk-archive orders.
///
/// The body is read leniently: a malformed or absent payload degrades to
/// [`ArchiveOptions::default()`] rather than failing the request — the
/// between-events reset must not bounce on a sloppy client.
pub async fn archive(
    State(state): State<ServerState>,
    body: Bytes,
) -> AppResult<Json<ArchiveResponse>> {
    let opts: ArchiveOptions = serde_json::from_slice(&body).unwrap_or_default();

    let archived_count = order::archive(&state.db.pool, opts).await?;

    tracing::info!(archived_count, "orders archived");
    Ok(Json(ArchiveResponse {
        ok: true,
        archived_count,
    }))
}
