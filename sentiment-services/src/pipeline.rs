//! End-to-end sentiment pipeline
//!
//! raw items -> scored -> classified -> per-source series -> chart payload.
//! Every run recomputes from the full input; nothing is cached.

use std::sync::Arc;

use serde::Serialize;
use sentiment_core::{ChartPayload, ClassifiedItem, ExcludedItem, NewsItem, SourceFilter};
use tracing::{info, instrument};

use crate::{
    ChartConfig, ChartDataAdapter, Lexicon, SentimentRangeClassifier, SeriesAggregator,
    SourcePalette, TextSentimentScorer,
};

/// Everything produced by one run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOutput {
    /// Flat list for card/list displays, in input order
    pub items: Vec<ClassifiedItem>,
    pub payload: ChartPayload,
    /// Items left out of the chart, with reasons
    pub excluded: Vec<ExcludedItem>,
}

impl PipelineOutput {
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }
}

/// Wires the scorer, classifier, aggregator and chart adapter together
#[derive(Debug, Clone)]
pub struct SentimentPipeline {
    scorer: TextSentimentScorer,
    classifier: SentimentRangeClassifier,
    aggregator: SeriesAggregator,
    adapter: ChartDataAdapter,
}

impl Default for SentimentPipeline {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), SourcePalette::default(), ChartConfig::default())
    }
}

impl SentimentPipeline {
    pub fn new(lexicon: Lexicon, palette: SourcePalette, config: ChartConfig) -> Self {
        Self::with_shared_lexicon(Arc::new(lexicon), palette, config)
    }

    /// Build around a lexicon shared with other pipelines or threads
    pub fn with_shared_lexicon(
        lexicon: Arc<Lexicon>,
        palette: SourcePalette,
        config: ChartConfig,
    ) -> Self {
        Self {
            scorer: TextSentimentScorer::new(lexicon),
            classifier: SentimentRangeClassifier::new(),
            aggregator: SeriesAggregator::new(config.excerpt_chars),
            adapter: ChartDataAdapter::new(config, palette),
        }
    }

    pub fn scorer(&self) -> &TextSentimentScorer {
        &self.scorer
    }

    /// Score and classify the items that pass `filter`, without charting
    pub fn classify(&self, items: &[NewsItem], filter: &SourceFilter) -> Vec<ClassifiedItem> {
        let selected = items.iter().filter(|item| filter.matches(item)).cloned();
        let scored = self.scorer.score_items(selected);
        self.classifier.classify_items(scored)
    }

    #[instrument(skip(self, items), fields(items = items.len(), filter = %filter))]
    pub fn run(&self, items: &[NewsItem], filter: &SourceFilter) -> PipelineOutput {
        let classified = self.classify(items, filter);

        let aggregation = self.aggregator.aggregate(&classified);
        let summaries = self.aggregator.summarize(&classified);
        let payload = self.adapter.to_chart_payload(aggregation.series, summaries);

        info!(
            "Pipeline run: {} of {} items selected, {} series, {} excluded",
            classified.len(),
            items.len(),
            payload.series.len(),
            aggregation.excluded.len()
        );

        PipelineOutput {
            items: classified,
            payload,
            excluded: aggregation.excluded,
        }
    }
}
