//! Database operations for educational resources

use crate::error::{AppError, Result};
use crate::models::resource::{CreateResourceRequest, Resource, ResourceCategory};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct ResourcesDb {
    pool: Arc<PgPool>,
}

impl ResourcesDb {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Resource>> {
        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, category_id, author_id, title, content, level, tags,
                   is_featured, published_at
            FROM resources
            ORDER BY published_at DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(resources)
    }

    pub async fn list_categories(&self) -> Result<Vec<ResourceCategory>> {
        let categories = sqlx::query_as::<_, ResourceCategory>(
            r#"
            SELECT id, name, description
            FROM resource_categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn get(&self, resource_id: Uuid) -> Result<Resource> {
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            SELECT id, category_id, author_id, title, content, level, tags,
                   is_featured, published_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Resource".to_string()))?;

        Ok(resource)
    }

    pub async fn create(&self, author_id: Uuid, input: &CreateResourceRequest) -> Result<Resource> {
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (category_id, author_id, title, content, level, tags, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, category_id, author_id, title, content, level, tags,
                      is_featured, published_at
            "#,
        )
        .bind(input.category_id)
        .bind(author_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.level)
        .bind(&input.tags)
        .bind(input.is_featured.unwrap_or(false))
        .fetch_one(&*self.pool)
        .await?;

        tracing::info!(resource_id = %resource.id, author_id = %author_id, "resource published");

        Ok(resource)
    }
}
