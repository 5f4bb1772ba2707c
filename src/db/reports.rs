//! Database operations for moderation reports

use crate::error::{AppError, Result};
use crate::models::report::{NewReport, Report};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

pub struct ReportsDb {
    pool: Arc<PgPool>,
}

impl ReportsDb {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Insert a new report; status always starts OPEN regardless of creator.
    pub async fn create(&self, input: NewReport) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (
                reporter_id,
                target_user_id,
                target_type,
                target_id,
                description,
                severity,
                status
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'OPEN')
            RETURNING id, reporter_id, target_user_id, target_type, target_id,
                      description, severity, status, response_message,
                      resolved_by, resolved_at, created_at
            "#,
        )
        .bind(input.reporter_id)
        .bind(input.target_user_id)
        .bind(input.target_type)
        .bind(input.target_id)
        .bind(&input.description)
        .bind(input.severity)
        .fetch_one(&*self.pool)
        .await?;

        tracing::info!(
            report_id = %report.id,
            reporter_id = %input.reporter_id,
            target_type = ?input.target_type,
            "report created"
        );

        Ok(report)
    }

    pub async fn get(&self, report_id: Uuid) -> Result<Report> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, reporter_id, target_user_id, target_type, target_id,
                   description, severity, status, response_message,
                   resolved_by, resolved_at, created_at
            FROM reports
            WHERE id = $1
            "#,
        )
        .bind(report_id)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

        Ok(report)
    }

    /// All reports, newest first (moderator view).
    pub async fn list_all(&self) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, reporter_id, target_user_id, target_type, target_id,
                   description, severity, status, response_message,
                   resolved_by, resolved_at, created_at
            FROM reports
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await?;

        Ok(reports)
    }

    /// Reports filed by one user, newest first.
    pub async fn list_by_reporter(&self, reporter_id: Uuid) -> Result<Vec<Report>> {
        let reports = sqlx::query_as::<_, Report>(
            r#"
            SELECT id, reporter_id, target_user_id, target_type, target_id,
                   description, severity, status, response_message,
                   resolved_by, resolved_at, created_at
            FROM reports
            WHERE reporter_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(reporter_id)
        .fetch_all(&*self.pool)
        .await?;

        Ok(reports)
    }

    /// Persist the mutable fields after an applied lifecycle update.
    /// Last write wins; moderation contention is low enough that no row
    /// locking is taken here.
    pub async fn save(&self, report: &Report) -> Result<Report> {
        let saved = sqlx::query_as::<_, Report>(
            r#"
            UPDATE reports
            SET status = $2,
                severity = $3,
                response_message = $4,
                resolved_by = $5,
                resolved_at = $6
            WHERE id = $1
            RETURNING id, reporter_id, target_user_id, target_type, target_id,
                      description, severity, status, response_message,
                      resolved_by, resolved_at, created_at
            "#,
        )
        .bind(report.id)
        .bind(report.status)
        .bind(report.severity)
        .bind(&report.response_message)
        .bind(report.resolved_by)
        .bind(report.resolved_at)
        .fetch_optional(&*self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Report".to_string()))?;

        tracing::info!(
            report_id = %saved.id,
            status = saved.status.as_str(),
            "report updated"
        );

        Ok(saved)
    }
}
