//! JWT issuing and validation.
//!
//! Access tokens carry the user id and role so the authorization layer can
//! check the moderation capability without a database round trip.

use crate::error::{AppError, Result};
use crate::models::user::UserRole;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims: subject is the user id, role is the serialized [`UserRole`].
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issue an HS256 access token for a user.
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    role: UserRole,
    expiry_hours: i64,
) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(expiry_hours)).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Token issuing failed: {}", e)))
}

/// Validate a token and return its claims. Expired or tampered tokens map
/// to an authentication error.
pub fn validate_token(secret: &str, token: &str) -> Result<TokenData<Claims>> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let user_id = Uuid::new_v4();
        let token = issue_token(SECRET, user_id, UserRole::Moderator, 1).unwrap();
        let data = validate_token(SECRET, &token).unwrap();

        assert_eq!(data.claims.sub, user_id.to_string());
        assert_eq!(data.claims.role, "MODERATOR");
        assert_eq!(UserRole::parse(&data.claims.role), Some(UserRole::Moderator));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token(SECRET, Uuid::new_v4(), UserRole::Member, 1).unwrap();
        assert!(validate_token("other-secret", &token).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(validate_token(SECRET, "not.a.token").is_err());
    }
}
