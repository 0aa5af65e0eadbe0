//! API route modules
//!
//! One module per resource, each exposing `router()`:
//!
//! - [`health`] — liveness check
//! - [`lots`] — pricing lot management and activation
//! - [`orders`] — admin order list, deletion and archival
//! - [`courtesies`] — courtesy list and purge
//! - [`promo_cards`] — storefront promo cards and media deletion
//! - [`settings`] — purchase gating and fee percent

pub mod courtesies;
pub mod health;
pub mod lots;
pub mod orders;
pub mod promo_cards;
pub mod settings;

use axum::{Router, middleware};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth;
use crate::core::ServerState;

/// Assemble the full application router with auth, trace and CORS layers
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(lots::router())
        .merge(orders::router())
        .merge(courtesies::router())
        .merge(promo_cards::router())
        .merge(settings::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
