//! Database operations for user accounts

use crate::error::{AppError, Result};
use crate::models::user::User;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Postgres error code for a UNIQUE constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

pub struct UsersDb {
    pool: Arc<PgPool>,
}

impl UsersDb {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Create a new account. Fails with a conflict when the email is taken.
    pub async fn create(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<User> {
        // Fast path; the UNIQUE constraint still backstops concurrent
        // registrations that pass this check simultaneously.
        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email)
            .fetch_one(&*self.pool)
            .await?;
        if existing > 0 {
            return Err(AppError::Conflict("Email is already registered".to_string()));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, password_hash, role)
            VALUES ($1, $2, $3, 'MEMBER')
            RETURNING id, email, username, password_hash, role, avatar_url, created_at
            "#,
        )
        .bind(email)
        .bind(username)
        .bind(password_hash)
        .fetch_one(&*self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Conflict("Email is already registered".to_string())
            } else {
                AppError::from(err)
            }
        })?;

        tracing::info!(user_id = %user.id, "account created");

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, role, avatar_url, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&*self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get(&self, user_id: Uuid) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, role, avatar_url, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_constraint_errors_are_not_conflicts() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolClosed));
    }
}
