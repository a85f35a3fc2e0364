//! Identity hand-off from the upstream authentication layer.
//!
//! Token verification lives outside this service; the gateway in front of
//! it injects the opaque user id as a trusted header. Every sync operation
//! is scoped to that id and nothing else.

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the authenticated user's opaque id
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller, as established upstream
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Read the trusted identity header; absent or empty means unauthenticated.
pub fn extract_user(headers: &HeaderMap) -> Result<AuthenticatedUser, ApiError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("missing X-User-Id header".to_string()))?;

    Ok(AuthenticatedUser {
        user_id: user_id.to_string(),
    })
}
