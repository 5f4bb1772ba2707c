//! Database operations for forum categories, threads, and posts

use crate::error::{AppError, Result};
use crate::models::forum::{
    ForumCategory, ForumPost, ForumThread, PostWithAuthor, ThreadWithAuthor,
};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct ForumDb {
    pool: Arc<PgPool>,
}

impl ForumDb {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<ForumCategory>> {
        let categories = sqlx::query_as::<_, ForumCategory>(
            r#"
            SELECT id, name, description, sort_order
            FROM forum_categories
            ORDER BY sort_order ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(categories)
    }

    /// Newest threads first, with author display names for the listing.
    pub async fn list_threads(&self, limit: i64, offset: i64) -> Result<Vec<ThreadWithAuthor>> {
        let threads = sqlx::query_as::<_, ThreadWithAuthor>(
            r#"
            SELECT t.id, t.category_id, t.author_id, u.username AS author_username,
                   t.title, t.body, t.is_locked, t.created_at
            FROM forum_threads t
            JOIN users u ON u.id = t.author_id
            ORDER BY t.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&*self.pool)
        .await?;

        Ok(threads)
    }

    pub async fn count_threads(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM forum_threads")
            .fetch_one(&*self.pool)
            .await?;

        Ok(count)
    }

    pub async fn create_thread(
        &self,
        category_id: Uuid,
        author_id: Uuid,
        title: &str,
        body: &str,
    ) -> Result<ForumThread> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            INSERT INTO forum_threads (category_id, author_id, title, body)
            VALUES ($1, $2, $3, $4)
            RETURNING id, category_id, author_id, title, body, is_locked, created_at
            "#,
        )
        .bind(category_id)
        .bind(author_id)
        .bind(title)
        .bind(body)
        .fetch_one(&*self.pool)
        .await?;

        tracing::info!(thread_id = %thread.id, author_id = %author_id, "thread created");

        Ok(thread)
    }

    pub async fn get_thread(&self, thread_id: Uuid) -> Result<ForumThread> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            SELECT id, category_id, author_id, title, body, is_locked, created_at
            FROM forum_threads
            WHERE id = $1
            "#,
        )
        .bind(thread_id)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Thread".to_string()))?;

        Ok(thread)
    }

    /// Posts for a thread, oldest first.
    pub async fn list_posts(&self, thread_id: Uuid) -> Result<Vec<PostWithAuthor>> {
        let posts = sqlx::query_as::<_, PostWithAuthor>(
            r#"
            SELECT p.id, p.thread_id, p.author_id, u.username AS author_username,
                   p.body, p.created_at
            FROM forum_posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.thread_id = $1
            ORDER BY p.created_at ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(posts)
    }

    pub async fn create_post(
        &self,
        thread_id: Uuid,
        author_id: Uuid,
        body: &str,
    ) -> Result<ForumPost> {
        let post = sqlx::query_as::<_, ForumPost>(
            r#"
            INSERT INTO forum_posts (thread_id, author_id, body)
            VALUES ($1, $2, $3)
            RETURNING id, thread_id, author_id, body, created_at
            "#,
        )
        .bind(thread_id)
        .bind(author_id)
        .bind(body)
        .fetch_one(&*self.pool)
        .await?;

        tracing::info!(post_id = %post.id, thread_id = %thread_id, "post created");

        Ok(post)
    }

    pub async fn set_thread_locked(&self, thread_id: Uuid, locked: bool) -> Result<ForumThread> {
        let thread = sqlx::query_as::<_, ForumThread>(
            r#"
            UPDATE forum_threads
            SET is_locked = $2
            WHERE id = $1
            RETURNING id, category_id, author_id, title, body, is_locked, created_at
            "#,
        )
        .bind(thread_id)
        .bind(locked)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Thread".to_string()))?;

        tracing::info!(thread_id = %thread_id, locked = locked, "thread lock changed");

        Ok(thread)
    }
}
