//! Forum handlers - categories, threads, and replies.
//!
//! Thread and reply creation run the safety pipeline: the gate screens the
//! body before anything is persisted, and a warn verdict is consumed by the
//! auto-flagger once the new row has an id.

use crate::db::{ForumDb, ReportsDb};
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::forum::{CreatePostRequest, CreateThreadRequest, LockThreadRequest};
use crate::models::safety::ContentKind;
use crate::services::{AutoFlagReporter, ContentGate};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

const THREAD_PAGE_SIZE: i64 = 20;

#[derive(Deserialize)]
pub struct ThreadListParams {
    pub page: Option<i64>,
}

/// Clamp a requested page so the OFFSET arithmetic cannot overflow.
fn thread_page(requested: Option<i64>) -> i64 {
    requested.unwrap_or(1).clamp(1, i64::MAX / THREAD_PAGE_SIZE)
}

/// List forum categories in display order
pub async fn get_categories(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let forum = ForumDb::new(pool.clone().into_inner());
    let categories = forum.list_categories().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "categories": categories })))
}

/// List threads, newest first, paginated
pub async fn list_threads(
    pool: web::Data<PgPool>,
    query: web::Query<ThreadListParams>,
) -> Result<HttpResponse> {
    let page = thread_page(query.page);
    let forum = ForumDb::new(pool.clone().into_inner());

    let threads = forum
        .list_threads(THREAD_PAGE_SIZE, (page - 1) * THREAD_PAGE_SIZE)
        .await?;
    let total = forum.count_threads().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "threads": threads,
        "page": page,
        "page_size": THREAD_PAGE_SIZE,
        "total": total,
    })))
}

/// Create a new thread (safety-gated)
pub async fn create_thread(
    pool: web::Data<PgPool>,
    gate: web::Data<ContentGate>,
    user: AuthUser,
    payload: web::Json<CreateThreadRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    // The verdict is computed before the thread has an id and consumed
    // after creation.
    let verdict = gate.screen(&payload.body)?;

    let forum = ForumDb::new(pool.clone().into_inner());
    let thread = forum
        .create_thread(payload.category_id, user.id, &payload.title, &payload.body)
        .await?;

    if let Some(verdict) = verdict {
        let flagger = AutoFlagReporter::new(ReportsDb::new(pool.clone().into_inner()));
        flagger
            .on_content_created(&verdict, ContentKind::Thread, thread.id, user.id)
            .await;
    }

    Ok(HttpResponse::Created().json(serde_json::json!({ "thread": thread })))
}

/// Fetch a thread with its posts
pub async fn get_thread(pool: web::Data<PgPool>, thread_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let forum = ForumDb::new(pool.clone().into_inner());
    let thread = forum.get_thread(*thread_id).await?;
    let posts = forum.list_posts(*thread_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "thread": thread,
        "posts": posts,
    })))
}

/// Reply to a thread (safety-gated)
pub async fn create_post(
    pool: web::Data<PgPool>,
    gate: web::Data<ContentGate>,
    user: AuthUser,
    thread_id: web::Path<Uuid>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let forum = ForumDb::new(pool.clone().into_inner());
    let thread = forum.get_thread(*thread_id).await?;
    if thread.is_locked {
        return Err(AppError::Validation("Thread is locked".to_string()));
    }

    let verdict = gate.screen(&payload.body)?;

    let post = forum.create_post(thread.id, user.id, &payload.body).await?;

    if let Some(verdict) = verdict {
        let flagger = AutoFlagReporter::new(ReportsDb::new(pool.clone().into_inner()));
        flagger
            .on_content_created(&verdict, ContentKind::Post, post.id, user.id)
            .await;
    }

    Ok(HttpResponse::Created().json(serde_json::json!({ "post": post })))
}

/// Lock or unlock a thread (moderator/admin)
pub async fn lock_thread(
    pool: web::Data<PgPool>,
    user: AuthUser,
    thread_id: web::Path<Uuid>,
    payload: web::Json<LockThreadRequest>,
) -> Result<HttpResponse> {
    user.require_moderator()?;

    let forum = ForumDb::new(pool.clone().into_inner());
    let thread = forum.set_thread_locked(*thread_id, payload.locked).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "thread": thread })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserRole;

    #[test]
    fn test_page_defaults_and_floors_at_one() {
        assert_eq!(thread_page(None), 1);
        assert_eq!(thread_page(Some(0)), 1);
        assert_eq!(thread_page(Some(-5)), 1);
        assert_eq!(thread_page(Some(3)), 3);
    }

    #[test]
    fn test_extreme_page_cannot_overflow_offset() {
        let page = thread_page(Some(i64::MAX));
        let offset = (page - 1) * THREAD_PAGE_SIZE;
        assert!(offset >= 0);
    }

    // The pool is lazy and points nowhere; if creation ran before the
    // screening step this would surface a database error instead of the
    // safety rejection.
    #[tokio::test]
    async fn test_blocked_thread_is_rejected_before_any_database_access() {
        let pool = sqlx::PgPool::connect_lazy("postgres://127.0.0.1:1/unreachable").unwrap();
        let user = AuthUser {
            id: Uuid::new_v4(),
            role: UserRole::Member,
        };
        let payload = CreateThreadRequest {
            title: "a perfectly ordinary title".to_string(),
            body: "you are wonderful, kys".to_string(),
            category_id: Uuid::new_v4(),
        };

        let err = create_thread(
            web::Data::new(pool),
            web::Data::new(ContentGate::default()),
            user,
            web::Json(payload),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::UnsafeContent));
    }
}
