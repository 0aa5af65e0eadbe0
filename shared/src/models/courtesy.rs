//! Courtesy Models
//!
//! Courtesies are complimentary (non-paid) allocations, structurally
//! parallel to orders but outside the payment flow. The admin API only
//! lists and purges them, so the list-view summary is the only shared
//! model; the underlying rows never cross the API boundary.

use serde::{Deserialize, Serialize};

/// Courtesy with its item count (admin list view)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CourtesySummary {
    pub id: i64,
    pub recipient_name: String,
    pub reason: Option<String>,
    pub item_count: i64,
    pub created_at: i64,
}
