//! Order Models

use serde::{Deserialize, Serialize};

/// Order status lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderStatus {
    /// Created at checkout, payment not yet confirmed
    Pendente,
    /// Payment confirmed by the provider webhook
    Pago,
    /// Tickets/wristbands handed over
    Retirado,
    /// Cancelled (by admin or payment failure)
    Cancelado,
}

/// Order entity — a customer purchase of abadás/wristbands.
///
/// Created by the storefront checkout, mutated by payment webhooks; this
/// backend only deletes or archives. `archived_at` hides the order from the
/// default admin list without losing history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub status: OrderStatus,
    /// Raw payment-provider status (provider-defined vocabulary)
    pub payment_status: Option<String>,
    pub total_cents: i64,
    pub archived_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Order line item. Never outlives its parent order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    /// "ABADA" or "PULSEIRA"
    pub product: String,
    pub size: Option<String>,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

/// Order with its line items (admin detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItem>,
}

/// Bulk-archive options.
///
/// Filter priority: an explicit `status` wins outright; otherwise
/// `include_pendentes` decides whether PENDENTE orders join the batch.
/// A malformed request body degrades to `Self::default()` at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOptions {
    #[serde(default)]
    pub include_pendentes: bool,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}
