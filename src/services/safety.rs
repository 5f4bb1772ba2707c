//! Content-safety evaluator.
//!
//! Pure classification of submitted text into allow / warn / block, ordered
//! and first-match-wins:
//!
//! 1. High-severity blocklist scan; any hit blocks unconditionally.
//! 2. Soft word scan; collects warn candidates, does not short-circuit.
//! 3. Lexicon sentiment score over the full text.
//! 4. Score below the block threshold blocks with a synthetic trigger.
//! 5. Soft hits or a mildly negative score warn.
//! 6. Everything else is allowed.
//!
//! Matching is substring containment on the lowercased text, so blocklist
//! phrases match inside longer sentences. Deterministic, no I/O.

use crate::models::safety::{
    SafetyVerdict, BLOCKLIST_SENTIMENT_SENTINEL, NEGATIVE_SENTIMENT_TRIGGER,
};
use crate::services::sentiment;

/// Word lists and thresholds for the evaluator. Injected at construction so
/// tests can substitute their own lists; `Default` carries the production
/// policy.
#[derive(Debug, Clone)]
pub struct SafetyPolicy {
    /// Terms that block unconditionally, regardless of surrounding tone.
    pub blocklist: Vec<String>,
    /// Mild hostility terms that flag a submission for review.
    pub warn_words: Vec<String>,
    /// Sentiment score strictly below this blocks.
    pub block_threshold: i64,
    /// Sentiment score strictly below this warns.
    pub warn_threshold: i64,
}

impl Default for SafetyPolicy {
    fn default() -> Self {
        Self {
            blocklist: [
                "kill yourself",
                "kys",
                "rape",
                "slut",
                "whore",
                "bitch",
                "nigger",
                "go die",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            warn_words: ["hate", "stupid", "idiot"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            block_threshold: -4,
            warn_threshold: -1,
        }
    }
}

/// Maps submitted text to an action decision plus diagnostic metadata.
pub struct SafetyEvaluator {
    policy: SafetyPolicy,
}

impl SafetyEvaluator {
    pub fn new(policy: SafetyPolicy) -> Self {
        Self { policy }
    }

    /// Evaluate a piece of submitted text. Callers are expected to skip
    /// empty or whitespace-only text; there is nothing to evaluate.
    pub fn evaluate(&self, text: &str) -> SafetyVerdict {
        let lower = text.to_lowercase();

        // Absolute check: runs first and short-circuits everything else,
        // even otherwise-positive phrasing.
        let blocked: Vec<String> = self
            .policy
            .blocklist
            .iter()
            .filter(|term| lower.contains(term.as_str()))
            .cloned()
            .collect();
        if !blocked.is_empty() {
            return SafetyVerdict::block(BLOCKLIST_SENTIMENT_SENTINEL, blocked);
        }

        let soft_triggers: Vec<String> = self
            .policy
            .warn_words
            .iter()
            .filter(|term| lower.contains(term.as_str()))
            .cloned()
            .collect();

        let score = sentiment::score(text);

        if score < self.policy.block_threshold {
            // Sentiment-driven block overrides any soft triggers.
            return SafetyVerdict::block(score, vec![NEGATIVE_SENTIMENT_TRIGGER.to_string()]);
        }

        if !soft_triggers.is_empty() || score < self.policy.warn_threshold {
            return SafetyVerdict::warn(score, soft_triggers);
        }

        SafetyVerdict::allow(score)
    }
}

impl Default for SafetyEvaluator {
    fn default() -> Self {
        Self::new(SafetyPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::safety::SafetyAction;

    #[test]
    fn test_blocklist_term_blocks_despite_positive_phrasing() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("you are wonderful, kys");
        assert_eq!(verdict.action, SafetyAction::Block);
        assert_eq!(verdict.sentiment_score, BLOCKLIST_SENTIMENT_SENTINEL);
        assert_eq!(verdict.triggers, vec!["kys".to_string()]);
    }

    #[test]
    fn test_blocklist_phrase_matches_inside_sentence() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("why don't you just go die somewhere");
        assert_eq!(verdict.action, SafetyAction::Block);
        assert!(verdict.triggers.contains(&"go die".to_string()));
    }

    #[test]
    fn test_supportive_text_is_allowed() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("I feel supported and empowered here");
        assert_eq!(verdict.action, SafetyAction::Allow);
        assert!(verdict.sentiment_score >= -1);
        assert!(verdict.triggers.is_empty());
    }

    #[test]
    fn test_soft_word_with_neutral_sentiment_warns() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("you are being stupid about this but it's okay");
        assert_eq!(verdict.action, SafetyAction::Warn);
        assert_eq!(verdict.triggers, vec!["stupid".to_string()]);
    }

    #[test]
    fn test_strongly_negative_sentiment_blocks_with_synthetic_trigger() {
        let evaluator = SafetyEvaluator::default();
        // "hate" is also a soft word; the sentiment-driven block must
        // override the collected soft triggers.
        let verdict = evaluator.evaluate("I hate this awful terrible horrible place");
        assert_eq!(verdict.action, SafetyAction::Block);
        assert_eq!(verdict.triggers, vec![NEGATIVE_SENTIMENT_TRIGGER.to_string()]);
        assert!(verdict.sentiment_score < -4);
    }

    #[test]
    fn test_mildly_negative_sentiment_warns_with_empty_triggers() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("I feel sad and alone");
        assert_eq!(verdict.action, SafetyAction::Warn);
        assert!(verdict.triggers.is_empty());
        assert!(verdict.sentiment_score < -1);
        assert!(verdict.sentiment_score >= -4);
    }

    #[test]
    fn test_neutral_text_allows_with_zero_score() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("the meeting is on tuesday at noon");
        assert_eq!(verdict.action, SafetyAction::Allow);
        assert_eq!(verdict.sentiment_score, 0);
        assert!(verdict.triggers.is_empty());
    }

    #[test]
    fn test_policy_substitution() {
        let evaluator = SafetyEvaluator::new(SafetyPolicy {
            blocklist: vec!["forbidden".to_string()],
            warn_words: vec!["dubious".to_string()],
            block_threshold: -4,
            warn_threshold: -1,
        });
        assert_eq!(
            evaluator.evaluate("this is forbidden").action,
            SafetyAction::Block
        );
        assert_eq!(
            evaluator.evaluate("this is dubious").action,
            SafetyAction::Warn
        );
        // Production soft words are not in the substituted policy.
        assert_eq!(
            evaluator.evaluate("this is stupid but fun").action,
            SafetyAction::Allow
        );
    }

    #[test]
    fn test_multiple_blocklist_hits_all_reported() {
        let evaluator = SafetyEvaluator::default();
        let verdict = evaluator.evaluate("kys or go die");
        assert_eq!(verdict.action, SafetyAction::Block);
        assert_eq!(verdict.triggers.len(), 2);
    }
}
