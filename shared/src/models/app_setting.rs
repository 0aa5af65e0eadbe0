//! App Setting Model

use serde::{Deserialize, Serialize};

/// Sparse key/value setting row.
///
/// Absence of a row for a known key is a valid state; readers resolve it to a
/// documented default rather than an error (see the app_setting repository).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AppSetting {
    pub key: String,
    pub value_bool: Option<bool>,
    pub value_text: Option<String>,
    pub updated_at: i64,
}
