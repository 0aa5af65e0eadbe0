//! Authentication middleware
//!
//! Bearer-JWT validation for the admin API. Every mutating route requires an
//! authenticated caller; the public storefront reads are allowlisted below.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Public (unauthenticated) API routes: storefront reads and health.
///
/// `GET /api/settings/purchase-enabled` stays public on purpose — the
/// storefront polls it before checkout.
fn is_public_route(method: &http::Method, path: &str) -> bool {
    if *method != http::Method::GET {
        return false;
    }
    // Nested routers also serve the trailing-slash variant of each path
    let path = path.strip_suffix('/').unwrap_or(path);
    matches!(
        path,
        "/api/health"
            | "/api/lots"
            | "/api/lots/active"
            | "/api/promo-cards"
            | "/api/settings/purchase-enabled"
            | "/api/settings/fee-percent"
    )
}

/// Require a valid bearer token on every non-public `/api/` route.
///
/// On success the [`CurrentUser`] is injected into the request extensions
/// for handlers that want the caller's identity.
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // CORS preflight passes through
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API paths fall through (404 handling)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.method(), path) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(target: "security", uri = %req.uri(), "missing authorization header");
            return Err(AppError::Unauthorized);
        }
    };

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(target: "security", error = %e, uri = %req.uri(), "token validation failed");
            match e {
                crate::auth::JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::invalid_token("Invalid token")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn storefront_reads_are_public() {
        assert!(is_public_route(&Method::GET, "/api/lots"));
        assert!(is_public_route(&Method::GET, "/api/lots/active"));
        assert!(is_public_route(&Method::GET, "/api/settings/purchase-enabled"));
    }

    #[test]
    fn trailing_slash_variants_are_public_too() {
        assert!(is_public_route(&Method::GET, "/api/lots/"));
        assert!(is_public_route(&Method::GET, "/api/promo-cards/"));
    }

    #[test]
    fn mutations_and_admin_reads_are_not_public() {
        assert!(!is_public_route(&Method::POST, "/api/lots"));
        assert!(!is_public_route(&Method::PUT, "/api/settings/fee-percent"));
        assert!(!is_public_route(&Method::GET, "/api/orders"));
        assert!(!is_public_route(&Method::DELETE, "/api/courtesies"));
    }
}
