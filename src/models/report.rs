//! Moderation report model and its status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// What a report points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_target", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportTarget {
    ForumThread,
    ForumPost,
    Resource,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_severity", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
}

/// Report status state machine: OPEN (initial) -> IN_REVIEW -> RESOLVED.
/// A report always starts OPEN regardless of who or what created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Open,
    InReview,
    Resolved,
}

impl ReportStatus {
    /// Validate a state transition. RESOLVED is terminal: reopening is not
    /// supported, which keeps resolution metadata from ever going stale.
    pub fn can_transition_to(&self, new_status: ReportStatus) -> bool {
        matches!(
            (self, new_status),
            (ReportStatus::Open, ReportStatus::InReview)
                | (ReportStatus::Open, ReportStatus::Resolved)
                | (ReportStatus::InReview, ReportStatus::Open)
                | (ReportStatus::InReview, ReportStatus::Resolved)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "OPEN",
            ReportStatus::InReview => "IN_REVIEW",
            ReportStatus::Resolved => "RESOLVED",
        }
    }
}

/// Report record from database
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Report {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub target_user_id: Option<Uuid>,
    pub target_type: ReportTarget,
    pub target_id: Option<Uuid>,
    pub description: String,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    pub response_message: Option<String>,
    pub resolved_by: Option<Uuid>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a new report
#[derive(Debug, Clone)]
pub struct NewReport {
    pub reporter_id: Uuid,
    pub target_user_id: Option<Uuid>,
    pub target_type: ReportTarget,
    pub target_id: Option<Uuid>,
    pub description: String,
    pub severity: ReportSeverity,
}

/// Moderator-driven partial update; any subset of fields may be set.
#[derive(Debug, Clone, Default)]
pub struct ReportUpdate {
    pub status: Option<ReportStatus>,
    pub severity: Option<ReportSeverity>,
    pub response_message: Option<String>,
}

impl Report {
    /// Apply a moderator update (state transition).
    ///
    /// Entering RESOLVED stamps `resolved_at` and `resolved_by`; those
    /// fields are set on that transition only and are never defaulted when
    /// the status stays OPEN or IN_REVIEW.
    pub fn apply_update(
        &mut self,
        update: ReportUpdate,
        moderator_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), String> {
        if let Some(new_status) = update.status {
            if new_status != self.status {
                if !self.status.can_transition_to(new_status) {
                    return Err(format!(
                        "Invalid transition: {} -> {}",
                        self.status.as_str(),
                        new_status.as_str()
                    ));
                }
                if new_status == ReportStatus::Resolved {
                    self.resolved_at = Some(now);
                    self.resolved_by = Some(moderator_id);
                }
                self.status = new_status;
            }
        }

        if let Some(severity) = update.severity {
            self.severity = severity;
        }
        if let Some(message) = update.response_message {
            self.response_message = Some(message);
        }

        Ok(())
    }
}

/// Request body for a user-filed (manual) report
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequest {
    #[validate(length(min = 1))]
    pub description: String,
    pub target_user_id: Option<Uuid>,
    pub target_type: Option<ReportTarget>,
    pub target_id: Option<Uuid>,
    pub severity: Option<ReportSeverity>,
}

/// Request body for a moderator report update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReportRequest {
    pub status: Option<ReportStatus>,
    pub severity: Option<ReportSeverity>,
    #[validate(length(min = 1, max = 2000))]
    pub response_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_report() -> Report {
        Report {
            id: Uuid::new_v4(),
            reporter_id: Uuid::new_v4(),
            target_user_id: None,
            target_type: ReportTarget::Manual,
            target_id: None,
            description: "spam in the forum".to_string(),
            severity: ReportSeverity::Medium,
            status: ReportStatus::Open,
            response_message: None,
            resolved_by: None,
            resolved_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_allowed_transitions() {
        assert!(ReportStatus::Open.can_transition_to(ReportStatus::InReview));
        assert!(ReportStatus::Open.can_transition_to(ReportStatus::Resolved));
        assert!(ReportStatus::InReview.can_transition_to(ReportStatus::Open));
        assert!(ReportStatus::InReview.can_transition_to(ReportStatus::Resolved));
    }

    #[test]
    fn test_resolved_is_terminal() {
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::Open));
        assert!(!ReportStatus::Resolved.can_transition_to(ReportStatus::InReview));
    }

    #[test]
    fn test_resolving_stamps_metadata() {
        let mut report = open_report();
        let moderator = Uuid::new_v4();
        let now = Utc::now();

        report
            .apply_update(
                ReportUpdate {
                    status: Some(ReportStatus::Resolved),
                    severity: None,
                    response_message: Some("Handled, thank you.".to_string()),
                },
                moderator,
                now,
            )
            .unwrap();

        assert_eq!(report.status, ReportStatus::Resolved);
        assert_eq!(report.resolved_by, Some(moderator));
        assert_eq!(report.resolved_at, Some(now));
        assert_eq!(report.response_message.as_deref(), Some("Handled, thank you."));
    }

    #[test]
    fn test_in_review_leaves_resolution_unset() {
        let mut report = open_report();
        report
            .apply_update(
                ReportUpdate {
                    status: Some(ReportStatus::InReview),
                    severity: Some(ReportSeverity::High),
                    response_message: None,
                },
                Uuid::new_v4(),
                Utc::now(),
            )
            .unwrap();

        assert_eq!(report.status, ReportStatus::InReview);
        assert_eq!(report.severity, ReportSeverity::High);
        assert!(report.resolved_by.is_none());
        assert!(report.resolved_at.is_none());
    }

    #[test]
    fn test_reopening_resolved_report_is_rejected() {
        let mut report = open_report();
        let moderator = Uuid::new_v4();
        report
            .apply_update(
                ReportUpdate {
                    status: Some(ReportStatus::Resolved),
                    ..Default::default()
                },
                moderator,
                Utc::now(),
            )
            .unwrap();

        let err = report
            .apply_update(
                ReportUpdate {
                    status: Some(ReportStatus::Open),
                    ..Default::default()
                },
                moderator,
                Utc::now(),
            )
            .unwrap_err();
        assert!(err.contains("RESOLVED -> OPEN"));
    }

    #[test]
    fn test_same_status_update_is_a_noop_transition() {
        let mut report = open_report();
        report
            .apply_update(
                ReportUpdate {
                    status: Some(ReportStatus::Open),
                    severity: Some(ReportSeverity::Low),
                    response_message: None,
                },
                Uuid::new_v4(),
                Utc::now(),
            )
            .unwrap();
        assert_eq!(report.status, ReportStatus::Open);
        assert_eq!(report.severity, ReportSeverity::Low);
    }
}
