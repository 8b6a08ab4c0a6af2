use crate::shared::models::{AppState, DatabaseError, User, UserRole};
use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};

pub const TOKEN_ISSUER: &str = "jobboard-auth";
pub const TOKEN_DURATION_HOURS: i64 = 24;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
}

pub struct TokenResponse {
    pub token: String,
    pub expires_at: String,
}

// JWT utility functions
pub fn create_user_jwt(user: &User, secret: &str, duration_hours: i64) -> Result<TokenResponse> {
    let exp = Utc::now()
        .checked_add_signed(Duration::hours(duration_hours))
        .expect("valid timestamp");

    let claims = Claims {
        sub: user.email.clone(),
        role: user.role,
        exp: exp.timestamp() as usize,
        iat: Utc::now().timestamp() as usize,
        iss: TOKEN_ISSUER.to_string(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(TokenResponse {
        token,
        expires_at: exp.to_rfc3339(),
    })
}

pub fn decode_user_jwt(token: &str, secret: &str) -> Result<Claims> {
    let token_data: TokenData<Claims> = decode(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

// Authentication functions
pub async fn authenticate_user(
    app_state: &AppState,
    email: &str,
    password: &str,
) -> Result<Option<User>, DatabaseError> {
    if let Some(user) = app_state.get_user_by_email(email).await? {
        if user.active {
            let is_valid = bcrypt::verify(password, &user.password_hash).unwrap_or(false);
            if is_valid {
                return Ok(Some(user));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "hiring@techcorp.com".to_string(),
            full_name: "Tech Corp Recruiter".to_string(),
            role: UserRole::Employer,
            password_hash: String::new(),
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn jwt_round_trip_preserves_claims() {
        let user = test_user();
        let response = create_user_jwt(&user, "secret", 24).unwrap();
        let claims = decode_user_jwt(&response.token, "secret").unwrap();

        assert_eq!(claims.sub, "hiring@techcorp.com");
        assert_eq!(claims.role, UserRole::Employer);
        assert_eq!(claims.iss, TOKEN_ISSUER);
    }

    #[test]
    fn jwt_rejects_wrong_secret() {
        let user = test_user();
        let response = create_user_jwt(&user, "secret", 24).unwrap();
        assert!(decode_user_jwt(&response.token, "other-secret").is_err());
    }

    #[test]
    fn expired_jwt_is_rejected() {
        let user = test_user();
        let response = create_user_jwt(&user, "secret", -2).unwrap();
        assert!(decode_user_jwt(&response.token, "secret").is_err());
    }
}
