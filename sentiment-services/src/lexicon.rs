//! Word polarity lexicon
//!
//! Maps lower-cased tokens to signed integer weights. Absent words weigh 0.

use std::collections::HashMap;
use std::path::Path;

use sentiment_core::{SentimentError, SentimentResult};
use tracing::{debug, info};

const POSITIVE_WORDS: &[&str] = &[
    "success", "growth", "positive", "gain", "rise", "up", "boost", "improve",
];

const NEGATIVE_WORDS: &[&str] = &[
    "decline", "fall", "negative", "loss", "down", "crisis", "fail", "risk",
];

/// Read-only token weight table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    weights: HashMap<String, i64>,
}

impl Lexicon {
    /// Lexicon with no entries; every text scores 0
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in headline lexicon (+1 / -1 word lists)
    pub fn builtin() -> Self {
        let positive = POSITIVE_WORDS.iter().map(|w| (*w, 1));
        let negative = NEGATIVE_WORDS.iter().map(|w| (*w, -1));
        Self::from_pairs(positive.chain(negative))
    }

    /// Build from `(word, weight)` pairs. Words are lower-cased; later
    /// duplicates overwrite earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let weights = pairs
            .into_iter()
            .map(|(word, weight)| (word.as_ref().trim().to_lowercase(), weight))
            .filter(|(word, _)| !word.is_empty())
            .collect();
        Self { weights }
    }

    /// Parse a JSON object of `{"word": weight}`
    pub fn from_json_str(json: &str) -> SentimentResult<Self> {
        let raw: HashMap<String, i64> = serde_json::from_str(json)
            .map_err(|e| SentimentError::parse(format!("Invalid lexicon JSON: {}", e)))?;
        let lexicon = Self::from_pairs(raw);
        debug!("Parsed lexicon with {} entries", lexicon.len());
        Ok(lexicon)
    }

    /// Load a JSON lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> SentimentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json_str(&json)?;
        info!("Loaded lexicon from {} ({} entries)", path.display(), lexicon.len());
        Ok(lexicon)
    }

    /// Weight of an already-normalized token
    pub fn weight(&self, token: &str) -> i64 {
        self.weights.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
