//! Courtesy API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Courtesy router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/courtesies", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list).delete(handler::purge_all))
}
