//! Report handlers - filing and the moderator triage workflow.

use crate::db::ReportsDb;
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::report::{
    CreateReportRequest, NewReport, ReportSeverity, ReportTarget, ReportUpdate,
    UpdateReportRequest,
};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// File a manual report (any authenticated user)
pub async fn create_report(
    pool: web::Data<PgPool>,
    user: AuthUser,
    payload: web::Json<CreateReportRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let reports = ReportsDb::new(pool.clone().into_inner());
    let report = reports
        .create(NewReport {
            reporter_id: user.id,
            target_user_id: payload.target_user_id,
            target_type: payload.target_type.unwrap_or(ReportTarget::Manual),
            target_id: payload.target_id,
            description: payload.description.clone(),
            severity: payload.severity.unwrap_or(ReportSeverity::Medium),
        })
        .await?;

    Ok(HttpResponse::Created().json(serde_json::json!({ "report": report })))
}

/// List all reports (moderator/admin)
pub async fn list_reports(pool: web::Data<PgPool>, user: AuthUser) -> Result<HttpResponse> {
    user.require_moderator()?;

    let reports = ReportsDb::new(pool.clone().into_inner());
    let listing = reports.list_all().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "reports": listing })))
}

/// List the calling user's own reports
pub async fn list_my_reports(pool: web::Data<PgPool>, user: AuthUser) -> Result<HttpResponse> {
    let reports = ReportsDb::new(pool.clone().into_inner());
    let listing = reports.list_by_reporter(user.id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "reports": listing })))
}

/// Update a report's status/severity/response (moderator/admin).
///
/// Entering RESOLVED stamps resolution metadata; resolved reports cannot
/// be reopened.
pub async fn update_report(
    pool: web::Data<PgPool>,
    user: AuthUser,
    report_id: web::Path<Uuid>,
    payload: web::Json<UpdateReportRequest>,
) -> Result<HttpResponse> {
    user.require_moderator()?;
    payload.validate()?;

    let reports = ReportsDb::new(pool.clone().into_inner());
    let mut report = reports.get(*report_id).await?;

    report
        .apply_update(
            ReportUpdate {
                status: payload.status,
                severity: payload.severity,
                response_message: payload.response_message.clone(),
            },
            user.id,
            Utc::now(),
        )
        .map_err(AppError::InvalidTransition)?;

    let saved = reports.save(&report).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "report": saved })))
}
