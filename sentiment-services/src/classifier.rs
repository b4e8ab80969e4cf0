//! Score to category mapping

use sentiment_core::{ClassifiedItem, ScoredItem, SentimentCategory};

/// Resolves scores against the fixed five-bucket partition
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentRangeClassifier;

impl SentimentRangeClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, score: i64) -> SentimentCategory {
        let category = SentimentCategory::from_score(score);
        debug_assert!(
            category.lower_bound().is_none_or(|min| score > min)
                && category.upper_bound().is_none_or(|max| score <= max),
            "score {} resolved outside its interval ({:?})",
            score,
            category
        );
        category
    }

    pub fn classify_item(&self, scored: ScoredItem) -> ClassifiedItem {
        let category = self.classify(scored.sentiment_score);
        ClassifiedItem { scored, category }
    }

    pub fn classify_items(&self, items: impl IntoIterator<Item = ScoredItem>) -> Vec<ClassifiedItem> {
        items
            .into_iter()
            .map(|scored| self.classify_item(scored))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::{NewsItem, NewsSource};

    #[test]
    fn test_boundary_round_trip() {
        let classifier = SentimentRangeClassifier::new();
        let categories: Vec<_> = [-5, -2, 2, 5, 10]
            .into_iter()
            .map(|s| classifier.classify(s))
            .collect();
        assert_eq!(
            categories,
            vec![
                SentimentCategory::VeryNegative,
                SentimentCategory::Negative,
                SentimentCategory::Neutral,
                SentimentCategory::Positive,
                SentimentCategory::VeryPositive,
            ]
        );
    }

    #[test]
    fn test_interior_values() {
        let classifier = SentimentRangeClassifier::new();
        assert_eq!(classifier.classify(-6), SentimentCategory::VeryNegative);
        assert_eq!(classifier.classify(-3), SentimentCategory::Negative);
        assert_eq!(classifier.classify(0), SentimentCategory::Neutral);
        assert_eq!(classifier.classify(3), SentimentCategory::Positive);
        assert_eq!(classifier.classify(6), SentimentCategory::VeryPositive);
    }

    #[test]
    fn test_classify_item_keeps_score() {
        let scored = ScoredItem {
            item: NewsItem {
                title: "Crisis and major loss".to_string(),
                description: String::new(),
                url: "https://example.com".to_string(),
                url_to_image: None,
                published_at: "2024-03-02T10:00:00Z".to_string(),
                source: NewsSource {
                    id: Some("reuters".to_string()),
                    name: "Reuters".to_string(),
                },
            },
            sentiment_score: -2,
        };
        let classified = SentimentRangeClassifier::new().classify_item(scored);
        assert_eq!(classified.sentiment_score(), -2);
        assert_eq!(classified.category, SentimentCategory::Negative);
    }
}
