//! Data models
//!
//! Shared between folia-server and the web frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are millisecond
//! epochs. JSON is camelCase — both frontends consume camelCase.

pub mod app_setting;
pub mod courtesy;
pub mod lot;
pub mod order;
pub mod promo_card;

// Re-exports
pub use app_setting::*;
pub use courtesy::*;
pub use lot::*;
pub use order::*;
pub use promo_card::*;
