//! Promo Card API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::promo_card;
use crate::utils::AppResult;
use shared::models::PromoCardDetail;

/// List cards with ordered media (public storefront read)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<PromoCardDetail>>> {
    let cards = promo_card::find_all_with_media(&state.db.pool).await?;
    Ok(Json(cards))
}

#[derive(Debug, Serialize)]
pub struct DeleteMediaResponse {
    pub success: bool,
}

/// Delete one media asset from a card (404 when no such media)
pub async fn delete_media(
    State(state): State<ServerState>,
    Path((card_id, media_id)): Path<(i64, i64)>,
) -> AppResult<Json<DeleteMediaResponse>> {
    promo_card::delete_media(&state.db.pool, card_id, media_id).await?;

    tracing::info!(card_id, media_id, "promo media deleted");
    Ok(Json(DeleteMediaResponse { success: true }))
}
