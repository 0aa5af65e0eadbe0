//! Pricing Lot Models

use serde::{Deserialize, Serialize};

/// Pricing lot entity — a tiered pricing window for abadás and wristbands.
///
/// At most one lot is `active` at any time; activation is atomic
/// (see the lot repository).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Lot {
    pub id: i64,
    pub name: String,
    /// Abadá price in cents
    pub abada_price_cents: i64,
    /// Wristband price in cents
    pub pulseira_price_cents: i64,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create lot payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotCreate {
    pub name: String,
    pub abada_price_cents: i64,
    pub pulseira_price_cents: i64,
}

/// Update lot payload (activation is a separate operation)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotUpdate {
    pub name: Option<String>,
    pub abada_price_cents: Option<i64>,
    pub pulseira_price_cents: Option<i64>,
}
