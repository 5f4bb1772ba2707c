//! Content gate: the screening step every content-submission path runs
//! before persistence.
//!
//! Handlers compose the pipeline explicitly: gate -> create -> auto-flag.
//! The verdict is computed before the content item has an identifier and
//! handed back to the caller, which consumes it after creation when the
//! auto-flagger needs the new id.

use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::safety::{SafetyAction, SafetyVerdict};
use crate::services::safety::SafetyEvaluator;

pub struct ContentGate {
    evaluator: SafetyEvaluator,
}

impl ContentGate {
    pub fn new(evaluator: SafetyEvaluator) -> Self {
        Self { evaluator }
    }

    /// Screen a submitted text field.
    ///
    /// Empty or whitespace-only text passes through with no verdict and no
    /// safety-related side effect. A block verdict rejects the whole
    /// submission with the fixed safety message; the matched terms stay in
    /// the server log only.
    pub fn screen(&self, text: &str) -> Result<Option<SafetyVerdict>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let verdict = self.evaluator.evaluate(text);
        metrics::SAFETY_VERDICTS
            .with_label_values(&[verdict.action.as_str()])
            .inc();

        match verdict.action {
            SafetyAction::Block => {
                tracing::warn!(
                    sentiment_score = verdict.sentiment_score,
                    triggers = ?verdict.triggers,
                    "submission blocked by safety evaluator"
                );
                Err(AppError::UnsafeContent)
            }
            SafetyAction::Warn | SafetyAction::Allow => Ok(Some(verdict)),
        }
    }
}

impl Default for ContentGate {
    fn default() -> Self {
        Self::new(SafetyEvaluator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_passes_without_verdict() {
        let gate = ContentGate::default();
        assert!(gate.screen("").unwrap().is_none());
        assert!(gate.screen("   ").unwrap().is_none());
        assert!(gate.screen("\n\t").unwrap().is_none());
    }

    #[test]
    fn test_blocked_text_is_rejected_with_safety_error() {
        let gate = ContentGate::default();
        let err = gate.screen("you are wonderful, kys").unwrap_err();
        assert!(matches!(err, AppError::UnsafeContent));
    }

    #[test]
    fn test_warn_verdict_is_handed_to_caller() {
        let gate = ContentGate::default();
        let verdict = gate.screen("don't be stupid").unwrap().unwrap();
        assert_eq!(verdict.action, SafetyAction::Warn);
    }

    #[test]
    fn test_allowed_text_carries_allow_verdict() {
        let gate = ContentGate::default();
        let verdict = gate.screen("thanks for the helpful advice").unwrap().unwrap();
        assert_eq!(verdict.action, SafetyAction::Allow);
    }
}
