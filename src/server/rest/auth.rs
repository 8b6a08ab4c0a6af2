use axum::{
    extract::{Extension, State},
    Json,
};
use bcrypt::{hash, DEFAULT_COST};
use std::sync::Arc;
use tracing::info;

use crate::server::auth::{authenticate_user, create_user_jwt, TokenResponse, TOKEN_DURATION_HOURS};
use crate::server::rest::error::{ApiError, ApiResult};
use crate::server::rest::middleware::AuthContext;
use crate::shared::models::{AppState, AuthResponse, LoginRequest, SignupRequest, User, UserProfile};

fn auth_response(user: &User, token: TokenResponse) -> AuthResponse {
    AuthResponse {
        access_token: token.token,
        token_type: "bearer".to_string(),
        email: user.email.clone(),
        full_name: user.full_name.clone(),
        role: user.role,
        expires_at: token.expires_at,
    }
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<AuthResponse>> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(ApiError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    if state.get_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::BadRequest("Email already registered".to_string()));
    }

    let password_hash = hash(&req.password, DEFAULT_COST)?;
    let user = state
        .create_user(&req.email, &req.full_name, req.role, &password_hash)
        .await?;

    info!(email = %user.email, role = %user.role, "Account created");

    let token = create_user_jwt(&user, &state.jwt_secret, TOKEN_DURATION_HOURS)?;
    Ok(Json(auth_response(&user, token)))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = authenticate_user(&state, &req.email, &req.password)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    // Update last login timestamp
    let _ = state.update_last_login(&req.email).await;

    let token = create_user_jwt(&user, &state.jwt_secret, TOKEN_DURATION_HOURS)?;
    Ok(Json(auth_response(&user, token)))
}

pub async fn me(Extension(auth): Extension<AuthContext>) -> ApiResult<Json<UserProfile>> {
    Ok(Json(auth.user.into()))
}
