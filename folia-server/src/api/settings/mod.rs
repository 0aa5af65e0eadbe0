//! Settings API Module
//!
//! Purchase gating and payment fee percent. Reads are public (the
//! storefront polls them) and fail to safe defaults; writes require auth.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Settings router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/purchase-enabled",
            get(handler::get_purchase_enabled).put(handler::set_purchase_enabled),
        )
        .route(
            "/fee-percent",
            get(handler::get_fee_percent).put(handler::set_fee_percent),
        )
}
