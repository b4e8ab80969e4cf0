//! Per-source line colors
//!
//! Colors are opaque tokens keyed by source display name. Sources missing
//! from the mapping fall back to a neutral token, so new publishers chart
//! without code changes.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use sentiment_core::{SentimentError, SentimentResult};
use tracing::info;

const DEFAULT_FALLBACK_COLOR: &str = "#6B7280";

/// Source name to color token mapping
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcePalette {
    colors: HashMap<String, String>,
    #[serde(default = "default_fallback")]
    fallback: String,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK_COLOR.to_string()
}

/// Accepted palette file shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteDocument {
    /// `{"colors": {"Source Name": "color"}, "fallback": "color"}`
    Full(SourcePalette),
    /// `{"Source Name": "color"}`
    Flat(HashMap<String, String>),
}

impl Default for SourcePalette {
    fn default() -> Self {
        Self::new()
            .with_color("Reuters", "#FF8C00")
            .with_color("BBC News", "#BB1919")
            .with_color("Wall Street Journal", "#0080C6")
            .with_color("CNN", "#CC0000")
    }
}

impl SourcePalette {
    /// Palette with no source entries
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
            fallback: default_fallback(),
        }
    }

    pub fn with_color(mut self, source: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(source.into(), color.into());
        self
    }

    pub fn with_fallback(mut self, color: impl Into<String>) -> Self {
        self.fallback = color.into();
        self
    }

    /// Parse either a flat `{"Source Name": "color"}` object or a
    /// `{"colors": {..}, "fallback": "color"}` document
    pub fn from_json_str(json: &str) -> SentimentResult<Self> {
        let document: PaletteDocument = serde_json::from_str(json)
            .map_err(|e| SentimentError::parse(format!("Invalid palette JSON: {}", e)))?;
        let palette = match document {
            PaletteDocument::Full(palette) => palette,
            PaletteDocument::Flat(colors) => Self {
                colors,
                fallback: default_fallback(),
            },
        };
        palette.validate()?;
        Ok(palette)
    }

    fn validate(&self) -> SentimentResult<()> {
        if self.fallback.trim().is_empty() {
            return Err(SentimentError::config("Empty fallback color"));
        }
        if let Some((source, _)) = self.colors.iter().find(|(_, color)| color.trim().is_empty()) {
            return Err(SentimentError::config(format!(
                "Empty color for source '{}'",
                source
            )));
        }
        Ok(())
    }

    pub fn from_file(path: impl AsRef<Path>) -> SentimentResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let palette = Self::from_json_str(&json)?;
        info!("Loaded source palette from {} ({} sources)", path.display(), palette.len());
        Ok(palette)
    }

    pub fn color_for(&self, source: &str) -> &str {
        self.colors
            .get(source)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
