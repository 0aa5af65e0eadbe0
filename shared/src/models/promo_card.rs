//! Promo Card Models

use serde::{Deserialize, Serialize};

/// Promotional card shown on the storefront
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PromoCard {
    pub id: i64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Media asset attached to a promo card, ordered by `display_order`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PromoCardMedia {
    pub id: i64,
    pub promo_card_id: i64,
    pub url: String,
    pub media_type: String,
    pub display_order: i64,
}

/// Card with its ordered media (public storefront view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoCardDetail {
    #[serde(flatten)]
    pub card: PromoCard,
    pub media: Vec<PromoCardMedia>,
}
