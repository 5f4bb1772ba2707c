//! Educational resource handlers.
//!
//! Publication is restricted to moderators/admins and still runs the
//! safety pipeline on the resource body.

use crate::db::{ReportsDb, ResourcesDb};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::models::resource::CreateResourceRequest;
use crate::models::safety::ContentKind;
use crate::services::{AutoFlagReporter, ContentGate};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// List resources, newest first
pub async fn list_resources(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let resources = ResourcesDb::new(pool.clone().into_inner());
    let listing = resources.list().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "resources": listing })))
}

/// List resource categories
pub async fn get_categories(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let resources = ResourcesDb::new(pool.clone().into_inner());
    let categories = resources.list_categories().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "categories": categories })))
}

/// Fetch a single resource
pub async fn get_resource(
    pool: web::Data<PgPool>,
    resource_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let resources = ResourcesDb::new(pool.clone().into_inner());
    let resource = resources.get(*resource_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "resource": resource })))
}

/// Publish a resource (moderator/admin, safety-gated)
pub async fn create_resource(
    pool: web::Data<PgPool>,
    gate: web::Data<ContentGate>,
    user: AuthUser,
    payload: web::Json<CreateResourceRequest>,
) -> Result<HttpResponse> {
    user.require_moderator()?;
    payload.validate()?;

    let verdict = gate.screen(&payload.content)?;

    let resources = ResourcesDb::new(pool.clone().into_inner());
    let resource = resources.create(user.id, &payload).await?;

    if let Some(verdict) = verdict {
        let flagger = AutoFlagReporter::new(ReportsDb::new(pool.clone().into_inner()));
        flagger
            .on_content_created(&verdict, ContentKind::Resource, resource.id, user.id)
            .await;
    }

    Ok(HttpResponse::Created().json(serde_json::json!({ "resource": resource })))
}
