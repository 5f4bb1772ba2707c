//! Auto-flagging: turns a warn verdict into a moderation report once the
//! content item has been durably created.

use crate::db::ReportsDb;
use crate::metrics;
use crate::models::report::NewReport;
use crate::models::safety::{ContentKind, SafetyAction, SafetyVerdict};
use uuid::Uuid;

pub struct AutoFlagReporter {
    reports: ReportsDb,
}

impl AutoFlagReporter {
    pub fn new(reports: ReportsDb) -> Self {
        Self { reports }
    }

    /// Build the report a warn verdict produces, or `None` for allow.
    ///
    /// The reporter is the author of the flagged content: this is an
    /// automated self-attributed flag, not a third-party complaint.
    pub fn build_report(
        verdict: &SafetyVerdict,
        kind: ContentKind,
        content_id: Uuid,
        author_id: Uuid,
    ) -> Option<NewReport> {
        if verdict.action != SafetyAction::Warn {
            return None;
        }

        Some(NewReport {
            reporter_id: author_id,
            target_user_id: None,
            target_type: kind.report_target(),
            target_id: Some(content_id),
            description: flag_description(kind, &verdict.triggers),
            severity: kind.default_flag_severity(),
        })
    }

    /// Called after the content item has been created. Report creation is
    /// best-effort: a failure is logged and must never fail the original
    /// content-creation response.
    pub async fn on_content_created(
        &self,
        verdict: &SafetyVerdict,
        kind: ContentKind,
        content_id: Uuid,
        author_id: Uuid,
    ) {
        let Some(new_report) = Self::build_report(verdict, kind, content_id, author_id) else {
            return;
        };

        match self.reports.create(new_report).await {
            Ok(report) => {
                metrics::AUTO_FLAGS_CREATED.inc();
                tracing::info!(
                    report_id = %report.id,
                    target_id = %content_id,
                    sentiment_score = verdict.sentiment_score,
                    "content auto-flagged for review"
                );
            }
            Err(err) => {
                metrics::AUTO_FLAG_FAILURES.inc();
                tracing::error!(
                    target_id = %content_id,
                    error = %err,
                    "auto-flag report creation failed"
                );
            }
        }
    }
}

fn flag_description(kind: ContentKind, triggers: &[String]) -> String {
    let joined = triggers.join(", ");
    match kind {
        ContentKind::Thread => format!(
            "Auto-flagged thread due to potentially unsafe language or tone. Triggers: {joined}"
        ),
        ContentKind::Post => format!(
            "Auto-flagged post due to potentially unsafe language or tone. Triggers: {joined}"
        ),
        ContentKind::Resource => format!(
            "Auto-flagged educational resource due to potentially sensitive or triggering content. Triggers: {joined}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::{ReportSeverity, ReportTarget};

    #[test]
    fn test_allow_verdict_produces_no_report() {
        let verdict = SafetyVerdict::allow(2);
        assert!(AutoFlagReporter::build_report(
            &verdict,
            ContentKind::Thread,
            Uuid::new_v4(),
            Uuid::new_v4()
        )
        .is_none());
    }

    #[test]
    fn test_warn_on_thread_maps_target_and_severity() {
        let verdict = SafetyVerdict::warn(-2, vec!["stupid".to_string()]);
        let content_id = Uuid::new_v4();
        let author_id = Uuid::new_v4();

        let report =
            AutoFlagReporter::build_report(&verdict, ContentKind::Thread, content_id, author_id)
                .unwrap();

        assert_eq!(report.target_type, ReportTarget::ForumThread);
        assert_eq!(report.target_id, Some(content_id));
        assert_eq!(report.reporter_id, author_id);
        assert_eq!(report.severity, ReportSeverity::Medium);
        assert!(report.description.contains("Triggers: stupid"));
    }

    #[test]
    fn test_warn_on_post_and_resource_use_low_severity() {
        let verdict = SafetyVerdict::warn(-2, vec!["hate".to_string()]);
        let post = AutoFlagReporter::build_report(
            &verdict,
            ContentKind::Post,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();
        let resource = AutoFlagReporter::build_report(
            &verdict,
            ContentKind::Resource,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();

        assert_eq!(post.target_type, ReportTarget::ForumPost);
        assert_eq!(post.severity, ReportSeverity::Low);
        assert_eq!(resource.target_type, ReportTarget::Resource);
        assert_eq!(resource.severity, ReportSeverity::Low);
    }

    #[test]
    fn test_empty_trigger_list_renders_empty_suffix() {
        let verdict = SafetyVerdict::warn(-2, Vec::new());
        let report = AutoFlagReporter::build_report(
            &verdict,
            ContentKind::Post,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();
        assert!(report.description.ends_with("Triggers: "));
    }

    #[test]
    fn test_multiple_triggers_are_comma_joined() {
        let verdict = SafetyVerdict::warn(-3, vec!["hate".to_string(), "idiot".to_string()]);
        let report = AutoFlagReporter::build_report(
            &verdict,
            ContentKind::Thread,
            Uuid::new_v4(),
            Uuid::new_v4(),
        )
        .unwrap();
        assert!(report.description.ends_with("Triggers: hate, idiot"));
    }
}
