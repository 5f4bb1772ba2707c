//! Safety verdict types produced by the content-safety evaluator.

use crate::models::report::{ReportSeverity, ReportTarget};
use serde::Serialize;

/// Synthetic trigger marker used when a block was driven by the sentiment
/// score rather than a blocklist match.
pub const NEGATIVE_SENTIMENT_TRIGGER: &str = "negative_sentiment";

/// Sentiment sentinel recorded on blocklist hits; the real score is never
/// computed for those.
pub const BLOCKLIST_SENTIMENT_SENTINEL: i64 = -10;

/// Action decided by the safety evaluator, first-match-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyAction {
    Allow,
    Warn,
    Block,
}

impl SafetyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SafetyAction::Allow => "allow",
            SafetyAction::Warn => "warn",
            SafetyAction::Block => "block",
        }
    }
}

/// Verdict produced fresh per evaluation; never persisted directly.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyVerdict {
    pub action: SafetyAction,
    pub sentiment_score: i64,
    pub triggers: Vec<String>,
}

impl SafetyVerdict {
    pub fn allow(sentiment_score: i64) -> Self {
        Self {
            action: SafetyAction::Allow,
            sentiment_score,
            triggers: Vec::new(),
        }
    }

    pub fn warn(sentiment_score: i64, triggers: Vec<String>) -> Self {
        Self {
            action: SafetyAction::Warn,
            sentiment_score,
            triggers,
        }
    }

    pub fn block(sentiment_score: i64, triggers: Vec<String>) -> Self {
        Self {
            action: SafetyAction::Block,
            sentiment_score,
            triggers,
        }
    }
}

/// The kind of content item a verdict attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Thread,
    Post,
    Resource,
}

impl ContentKind {
    /// Report target type for an auto-flag on this kind of content.
    pub fn report_target(&self) -> ReportTarget {
        match self {
            ContentKind::Thread => ReportTarget::ForumThread,
            ContentKind::Post => ReportTarget::ForumPost,
            ContentKind::Resource => ReportTarget::Resource,
        }
    }

    /// Fixed auto-flag severity per content kind; deliberately not derived
    /// from the verdict's sentiment magnitude.
    pub fn default_flag_severity(&self) -> ReportSeverity {
        match self {
            ContentKind::Thread => ReportSeverity::Medium,
            ContentKind::Post => ReportSeverity::Low,
            ContentKind::Resource => ReportSeverity::Low,
        }
    }
}
