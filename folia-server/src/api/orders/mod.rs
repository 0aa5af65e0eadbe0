//! Order API Module
//!
//! Orders are created by the storefront checkout; this API only reads,
//! deletes and archives them.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/archive", post(handler::archive))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
}
