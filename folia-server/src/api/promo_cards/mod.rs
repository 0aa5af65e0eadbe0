//! Promo Card API Module

mod handler;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::core::ServerState;

/// Promo card router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/promo-cards", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{card_id}/media/{media_id}", delete(handler::delete_media))
}
