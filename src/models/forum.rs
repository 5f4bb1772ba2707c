use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Forum category record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ForumCategory {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub sort_order: i32,
}

/// Forum thread record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ForumThread {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Thread row joined with its author's display name, for listings.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ThreadWithAuthor {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub title: String,
    pub body: String,
    pub is_locked: bool,
    pub created_at: DateTime<Utc>,
}

/// Forum post (reply) record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ForumPost {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Post row joined with its author's display name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct PostWithAuthor {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub author_id: Uuid,
    pub author_username: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a thread
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateThreadRequest {
    #[validate(length(min = 5, max = 120))]
    pub title: String,
    #[validate(length(min = 10))]
    pub body: String,
    pub category_id: Uuid,
}

/// Request body for replying to a thread
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[validate(length(min = 2))]
    pub body: String,
}

/// Request body for locking or unlocking a thread
#[derive(Debug, Deserialize, ToSchema)]
pub struct LockThreadRequest {
    pub locked: bool,
}
