use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::info;

use crate::server::auth::{decode_user_jwt, Claims};
use crate::shared::models::{AppState, User};

#[derive(Clone)]
pub struct AuthContext {
    pub user: User,
    pub claims: Claims,
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract token from Authorization header
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = extract_bearer(auth_header).ok_or(StatusCode::UNAUTHORIZED)?;

    // Decode and validate JWT
    let claims =
        decode_user_jwt(token, &state.jwt_secret).map_err(|_| StatusCode::UNAUTHORIZED)?;

    // The subject must still resolve to an active account
    let user = state
        .get_user_by_email(&claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if !user.active {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let method = request.method().clone();
    let uri = request.uri().clone();
    info!(
        method = %method,
        path = %uri.path(),
        user = %user.email,
        role = %user.role,
        "API request"
    );

    request.extensions_mut().insert(AuthContext { user, claims });

    Ok(next.run(request).await)
}

pub fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_prefix_is_stripped() {
        assert_eq!(extract_bearer("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn other_schemes_are_rejected() {
        assert_eq!(extract_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer("abc123"), None);
    }
}
