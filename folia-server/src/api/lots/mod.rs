//! Pricing Lot API Module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Lot router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/lots", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Public storefront reads
        .route("/", get(handler::list).post(handler::create))
        .route("/active", get(handler::get_active))
        // Admin mutations
        .route("/{id}", put(handler::update))
        .route("/{id}/activate", post(handler::activate))
}
