//! Shared types for the folia platform
//!
//! Data models exchanged between the admin server, the storefront and the
//! admin SPA, plus small utilities (timestamps, ID generation). DB row
//! derives are feature-gated behind `db` so front-end consumers stay light.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
