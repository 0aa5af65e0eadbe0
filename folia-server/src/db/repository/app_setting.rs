//! App Setting Repository
//!
//! Sparse key/value settings with fail-open reads: a missing row, a null
//! value, or a failed read (e.g. a not-yet-migrated settings table) must
//! never block the public purchase flow, so the typed readers resolve every
//! failure to a documented default instead of an error. Writes validate and
//! surface errors normally.

use super::{RepoError, RepoResult};
use shared::models::AppSetting;
use sqlx::SqlitePool;

/// Purchase-gating flag key
pub const PURCHASE_ENABLED: &str = "purchase_enabled";
/// Payment-provider fee percent key (stored as text)
pub const PAYMENT_FEE_PERCENT: &str = "payment_fee_percent";

/// Default fee percent applied whenever the stored value is unusable
pub const DEFAULT_FEE_PERCENT: f64 = 5.0;

pub async fn get(pool: &SqlitePool, key: &str) -> RepoResult<Option<AppSetting>> {
    let row = sqlx::query_as::<_, AppSetting>(
        "SELECT key, value_bool, value_text, updated_at FROM app_setting WHERE key = ?",
    )
    .bind(key)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

async fn upsert_bool(pool: &SqlitePool, key: &str, value: bool) -> RepoResult<()> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO app_setting (key, value_bool, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value_bool = ?2, updated_at = ?3",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

async fn upsert_text(pool: &SqlitePool, key: &str, value: &str) -> RepoResult<()> {
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO app_setting (key, value_text, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value_text = ?2, updated_at = ?3",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;
    Ok(())
}

/// Whether purchasing is currently enabled.
///
/// Fail-open: only an explicitly stored `false` disables purchasing. A
/// missing row, a null value, and a failed read all resolve to `true` — a
/// fresh or partially-migrated deployment is never accidentally locked.
/// The failure branch is logged so operators can alert on it.
pub async fn is_purchase_enabled(pool: &SqlitePool) -> bool {
    match get(pool, PURCHASE_ENABLED).await {
        Ok(Some(setting)) => setting.value_bool.unwrap_or(true),
        Ok(None) => true,
        Err(e) => {
            tracing::warn!(target: "settings", error = %e, "purchase_enabled read failed, failing open");
            true
        }
    }
}

pub async fn set_purchase_enabled(pool: &SqlitePool, enabled: bool) -> RepoResult<()> {
    upsert_bool(pool, PURCHASE_ENABLED, enabled).await
}

/// Payment-provider fee percent.
///
/// Stored as text; any parse failure, out-of-range value, missing row or
/// storage error resolves to [`DEFAULT_FEE_PERCENT`] — never an error.
pub async fn fee_percent(pool: &SqlitePool) -> f64 {
    let stored = match get(pool, PAYMENT_FEE_PERCENT).await {
        Ok(Some(setting)) => setting.value_text,
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(target: "settings", error = %e, "fee_percent read failed, using default");
            None
        }
    };

    stored
        .and_then(|text| text.parse::<f64>().ok())
        .filter(|p| (0.0..=100.0).contains(p))
        .unwrap_or(DEFAULT_FEE_PERCENT)
}

/// Set the fee percent. Rejects values outside [0, 100] before touching
/// storage.
pub async fn set_fee_percent(pool: &SqlitePool, percent: f64) -> RepoResult<()> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(RepoError::Validation(format!(
            "Fee percent must be between 0 and 100, got {percent}"
        )));
    }
    upsert_text(pool, PAYMENT_FEE_PERCENT, &percent.to_string()).await
}
