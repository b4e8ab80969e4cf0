//! Lexicon-based text scoring

use std::sync::Arc;

use sentiment_core::{NewsItem, ScoredItem};

use crate::Lexicon;

/// Sums lexicon weights over whitespace-separated, lower-cased tokens
///
/// Holds no mutable state; clones share the same lexicon.
#[derive(Debug, Clone)]
pub struct TextSentimentScorer {
    lexicon: Arc<Lexicon>,
}

impl TextSentimentScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Score free text. Punctuation stays attached to its token.
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    pub fn score(&self, text: &str) -> i64 {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| self.lexicon.weight(token))
            .fold(0i64, i64::saturating_add)
    }

    /// Score title and description together
    pub fn score_item(&self, item: NewsItem) -> ScoredItem {
        let sentiment_score = self.score(&item.scoring_text());
        ScoredItem {
            item,
            sentiment_score,
        }
    }

    pub fn score_items(&self, items: impl IntoIterator<Item = NewsItem>) -> Vec<ScoredItem> {
        items.into_iter().map(|item| self.score_item(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::NewsSource;

    fn scorer() -> TextSentimentScorer {
        TextSentimentScorer::new(Arc::new(Lexicon::from_pairs([
            ("growth", 1),
            ("gain", 1),
            ("crisis", -1),
            ("loss", -1),
        ])))
    }

    #[test]
    fn test_sums_weights() {
        let scorer = scorer();
        assert_eq!(scorer.score("Market growth and gain"), 2);
        assert_eq!(scorer.score("Crisis and major loss"), -2);
        assert_eq!(scorer.score("growth amid crisis"), 0);
    }

    #[test]
    fn test_case_and_whitespace() {
        let scorer = scorer();
        assert_eq!(scorer.score("  GROWTH\tGain\n\ngrowth "), 3);
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        assert_eq!(scorer().score("growth, gain."), 0);
    }

    #[test]
    fn test_unknown_and_empty_text() {
        let scorer = scorer();
        assert_eq!(scorer.score(""), 0);
        assert_eq!(scorer.score("weather report tomorrow"), 0);
    }

    #[test]
    fn test_empty_lexicon_scores_zero() {
        let scorer = TextSentimentScorer::new(Arc::new(Lexicon::empty()));
        assert_eq!(scorer.score("growth gain crisis"), 0);
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let scorer = TextSentimentScorer::new(Arc::new(Lexicon::from_pairs([
            ("boom", i64::MAX),
            ("bust", i64::MIN),
        ])));
        assert_eq!(scorer.score("boom boom"), i64::MAX);
        assert_eq!(scorer.score("bust bust bust"), i64::MIN);
        assert_eq!(scorer.score("boom bust"), -1);
    }

    #[test]
    fn test_deterministic() {
        let scorer = scorer();
        let text = "Gain after crisis brings growth";
        let first = scorer.score(text);
        for _ in 0..10 {
            assert_eq!(scorer.score(text), first);
        }
    }

    #[test]
    fn test_score_item_uses_description() {
        let item = NewsItem {
            title: "Markets".to_string(),
            description: "Growth and gain".to_string(),
            url: "https://example.com".to_string(),
            url_to_image: None,
            published_at: "2024-03-01T10:00:00Z".to_string(),
            source: NewsSource {
                id: Some("reuters".to_string()),
                name: "Reuters".to_string(),
            },
        };
        let scored = scorer().score_item(item.clone());
        assert_eq!(scored.sentiment_score, 2);
        assert_eq!(scored.item, item);
    }
}
