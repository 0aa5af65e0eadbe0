//! Folia Admin Server — administrative backend of the event-ticketing
//! platform
//!
//! # Architecture
//!
//! - **Pricing lots** (`db/repository/lot`): tiered pricing windows with an
//!   atomically-enforced single-active-lot invariant
//! - **Orders** (`db/repository/order`): hard deletion with cascading item
//!   removal, and bulk archival between events
//! - **Settings** (`db/repository/app_setting`): purchase gating and fee
//!   percent with fail-open reads
//! - **Auth** (`auth`): bearer-JWT validation for admin mutations
//! - **HTTP API** (`api`): axum routes, one core operation per request
//!
//! # Module structure
//!
//! ```text
//! folia-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT validation, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool, migrations, repositories
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResponse, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
