//! Lexicon-based sentiment scoring.
//!
//! AFINN-style scorer: the text is lowercased, split on non-alphanumeric
//! boundaries, and each token's integer valence is summed. Tokens outside
//! the lexicon score zero. Positive totals indicate a favorable tone,
//! negative totals an unfavorable one.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Token valences, -5 (most negative) to +5 (most positive).
static ENTRIES: &[(&str, i64)] = &[
    // Positive
    ("admire", 3),
    ("amazing", 4),
    ("appreciate", 2),
    ("appreciated", 2),
    ("awesome", 4),
    ("better", 2),
    ("brave", 2),
    ("calm", 2),
    ("care", 2),
    ("cares", 2),
    ("caring", 2),
    ("comfort", 2),
    ("comforting", 2),
    ("encourage", 2),
    ("encouraged", 2),
    ("encouraging", 2),
    ("excellent", 3),
    ("forgive", 1),
    ("friend", 1),
    ("friendly", 2),
    ("fun", 4),
    ("glad", 3),
    ("good", 3),
    ("grateful", 3),
    ("great", 3),
    ("happy", 3),
    ("heal", 2),
    ("healing", 2),
    ("help", 2),
    ("helpful", 2),
    ("helping", 2),
    ("helps", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("inspire", 2),
    ("inspired", 2),
    ("inspiring", 2),
    ("joy", 3),
    ("kind", 2),
    ("kindness", 2),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("loves", 3),
    ("nice", 3),
    ("okay", 1),
    ("peace", 2),
    ("peaceful", 2),
    ("proud", 2),
    ("respect", 2),
    ("respected", 2),
    ("safe", 1),
    ("strong", 2),
    ("stronger", 2),
    ("support", 2),
    ("supported", 2),
    ("supportive", 2),
    ("supports", 2),
    ("thank", 2),
    ("thanks", 2),
    ("together", 1),
    ("trust", 1),
    ("welcome", 2),
    ("wonderful", 4),
    ("worth", 2),
    ("worthy", 2),
    // Negative
    ("abuse", -3),
    ("abused", -3),
    ("abusive", -3),
    ("afraid", -2),
    ("alone", -2),
    ("angry", -3),
    ("annoying", -2),
    ("anxious", -2),
    ("ashamed", -2),
    ("attack", -1),
    ("attacked", -2),
    ("awful", -3),
    ("bad", -3),
    ("bully", -2),
    ("bullied", -2),
    ("bullying", -2),
    ("cruel", -3),
    ("cry", -1),
    ("crying", -2),
    ("dead", -3),
    ("depressed", -2),
    ("depressing", -2),
    ("die", -3),
    ("disgusting", -3),
    ("dumb", -3),
    ("fail", -2),
    ("failure", -2),
    ("fear", -2),
    ("garbage", -1),
    ("gross", -2),
    ("harass", -3),
    ("harassed", -3),
    ("harassment", -3),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("hopeless", -2),
    ("horrible", -3),
    ("hurt", -2),
    ("hurting", -2),
    ("hurts", -2),
    ("idiot", -3),
    ("kill", -3),
    ("killed", -3),
    ("kills", -3),
    ("lonely", -2),
    ("loser", -3),
    ("miserable", -3),
    ("nasty", -3),
    ("pain", -2),
    ("painful", -2),
    ("pathetic", -2),
    ("sad", -2),
    ("scared", -2),
    ("shame", -2),
    ("stupid", -2),
    ("suffer", -2),
    ("suffering", -2),
    ("terrible", -3),
    ("threat", -2),
    ("threaten", -2),
    ("threatened", -2),
    ("toxic", -3),
    ("ugly", -3),
    ("useless", -2),
    ("worse", -3),
    ("worst", -3),
    ("worthless", -2),
    ("wrong", -2),
];

static LEXICON: Lazy<HashMap<&'static str, i64>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Score the full text; unknown tokens contribute zero.
pub fn score(text: &str) -> i64 {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| LEXICON.get(token).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text_scores_positive() {
        assert!(score("I feel supported and hopeful, thanks everyone") > 0);
    }

    #[test]
    fn test_negative_text_scores_negative() {
        assert!(score("this is awful and I hate it") < 0);
    }

    #[test]
    fn test_unknown_tokens_score_zero() {
        assert_eq!(score("lorem ipsum dolor sit amet"), 0);
    }

    #[test]
    fn test_punctuation_does_not_split_scoring() {
        assert_eq!(score("hate."), score("hate"));
        assert_eq!(score("HATE"), score("hate"));
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(score(""), 0);
        assert_eq!(score("   "), 0);
    }
}
