//! Sentiment categories and the score partition they define
//!
//! Five ordered buckets cover the whole number line. Every boundary belongs
//! to the lower bucket: `-5` is VeryNegative, `2` is Neutral, `5` is Positive.

use serde::{Deserialize, Serialize};
use std::fmt;

const VERY_NEGATIVE_MAX: i64 = -5;
const NEGATIVE_MIN: i64 = VERY_NEGATIVE_MAX + 1;
const NEGATIVE_MAX: i64 = -2;
const NEUTRAL_MIN: i64 = NEGATIVE_MAX + 1;
const NEUTRAL_MAX: i64 = 2;
const POSITIVE_MIN: i64 = NEUTRAL_MAX + 1;
const POSITIVE_MAX: i64 = 5;
const VERY_POSITIVE_MIN: i64 = POSITIVE_MAX + 1;

/// Ordered sentiment bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

/// Stroke/fill pattern token for renderers that cannot rely on color alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPattern {
    Diagonal,
    Dots,
    Solid,
    Dashed,
    Zigzag,
}

impl DisplayPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayPattern::Diagonal => "diagonal",
            DisplayPattern::Dots => "dots",
            DisplayPattern::Solid => "solid",
            DisplayPattern::Dashed => "dashed",
            DisplayPattern::Zigzag => "zigzag",
        }
    }
}

impl fmt::Display for DisplayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation tokens attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMetadata {
    pub label: &'static str,
    pub color: &'static str,
    pub pattern: DisplayPattern,
}

impl SentimentCategory {
    /// All categories in ascending order
    pub const ALL: [SentimentCategory; 5] = [
        SentimentCategory::VeryNegative,
        SentimentCategory::Negative,
        SentimentCategory::Neutral,
        SentimentCategory::Positive,
        SentimentCategory::VeryPositive,
    ];

    /// Resolve the bucket for an integer score
    pub fn from_score(score: i64) -> Self {
        match score {
            i64::MIN..=VERY_NEGATIVE_MAX => SentimentCategory::VeryNegative,
            NEGATIVE_MIN..=NEGATIVE_MAX => SentimentCategory::Negative,
            NEUTRAL_MIN..=NEUTRAL_MAX => SentimentCategory::Neutral,
            POSITIVE_MIN..=POSITIVE_MAX => SentimentCategory::Positive,
            VERY_POSITIVE_MIN..=i64::MAX => SentimentCategory::VeryPositive,
        }
    }

    /// Resolve the bucket for a fractional score (e.g. a per-source mean)
    ///
    /// NaN has no place on the number line and resolves to Neutral.
    pub fn from_real(score: f64) -> Self {
        if score.is_nan() {
            return SentimentCategory::Neutral;
        }
        Self::ALL
            .into_iter()
            .find(|category| match category.upper_bound() {
                Some(max) => score <= max as f64,
                None => true,
            })
            .unwrap_or(SentimentCategory::VeryPositive)
    }

    /// Inclusive upper edge of the interval; `None` for the open top bucket
    pub fn upper_bound(&self) -> Option<i64> {
        match self {
            SentimentCategory::VeryNegative => Some(VERY_NEGATIVE_MAX),
            SentimentCategory::Negative => Some(NEGATIVE_MAX),
            SentimentCategory::Neutral => Some(NEUTRAL_MAX),
            SentimentCategory::Positive => Some(POSITIVE_MAX),
            SentimentCategory::VeryPositive => None,
        }
    }

    /// Exclusive lower edge of the interval; `None` for the open bottom bucket
    pub fn lower_bound(&self) -> Option<i64> {
        match self {
            SentimentCategory::VeryNegative => None,
            SentimentCategory::Negative => Some(VERY_NEGATIVE_MAX),
            SentimentCategory::Neutral => Some(NEGATIVE_MAX),
            SentimentCategory::Positive => Some(NEUTRAL_MAX),
            SentimentCategory::VeryPositive => Some(POSITIVE_MAX),
        }
    }

    pub fn metadata(&self) -> CategoryMetadata {
        match self {
            SentimentCategory::VeryNegative => CategoryMetadata {
                label: "Very Negative",
                color: "#EF4444",
                pattern: DisplayPattern::Diagonal,
            },
            SentimentCategory::Negative => CategoryMetadata {
                label: "Negative",
                color: "#F97316",
                pattern: DisplayPattern::Dots,
            },
            SentimentCategory::Neutral => CategoryMetadata {
                label: "Neutral",
                color: "#A3A3A3",
                pattern: DisplayPattern::Solid,
            },
            SentimentCategory::Positive => CategoryMetadata {
                label: "Positive",
                color: "#22C55E",
                pattern: DisplayPattern::Dashed,
            },
            SentimentCategory::VeryPositive => CategoryMetadata {
                label: "Very Positive",
                color: "#15803D",
                pattern: DisplayPattern::Zigzag,
            },
        }
    }

    pub fn label(&self) -> &'static str {
        self.metadata().label
    }

    pub fn color(&self) -> &'static str {
        self.metadata().color
    }

    pub fn pattern(&self) -> DisplayPattern {
        self.metadata().pattern
    }

    /// Short legend text describing where the bucket starts (e.g. "≤-5", ">2")
    pub fn bound_label(&self) -> String {
        match (self.lower_bound(), self.upper_bound()) {
            (Some(min), _) => format!(">{}", min),
            (None, Some(max)) => format!("≤{}", max),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
