use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Role attached to every account. Moderators and admins hold the
/// moderation capability used by the report workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "user_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Member,
    Moderator,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Member => "MEMBER",
            UserRole::Moderator => "MODERATOR",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MEMBER" => Some(UserRole::Member),
            "MODERATOR" => Some(UserRole::Moderator),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Whether this role carries the moderation capability.
    pub fn is_moderator(&self) -> bool {
        matches!(self, UserRole::Moderator | UserRole::Admin)
    }
}

/// User record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for account registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 3, max = 30))]
    pub username: String,
    #[validate(length(min = 8, max = 72))]
    pub password: String,
}

/// Request body for login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_capability() {
        assert!(!UserRole::Member.is_moderator());
        assert!(UserRole::Moderator.is_moderator());
        assert!(UserRole::Admin.is_moderator());
    }

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Member, UserRole::Moderator, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("SUPERUSER"), None);
    }
}
