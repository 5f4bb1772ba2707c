use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Resource category record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ResourceCategory {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

/// Educational resource record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Resource {
    pub id: Uuid,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub level: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub published_at: DateTime<Utc>,
}

/// Request body for publishing a resource
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateResourceRequest {
    #[validate(length(min = 5))]
    pub title: String,
    #[validate(length(min = 20))]
    pub content: String,
    pub category_id: Uuid,
    pub level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_featured: Option<bool>,
}
