//! Chart Data Adapter
//!
//! Repackages already-derived series into the payload consumed by the
//! rendering layer. No scoring or classification happens here.

use itertools::Itertools;
use sentiment_core::{
    AxisDomain, ChartPayload, LegendEntry, ReferenceLine, SentimentCategory, SourceColor,
    SourceSeries, SourceSummary,
};
use tracing::{debug, warn};

use crate::aggregator::DEFAULT_EXCERPT_CHARS;
use crate::SourcePalette;

/// Configuration for chart output
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Lower bound of the score axis before widening
    pub domain_min: i64,
    /// Upper bound of the score axis before widening
    pub domain_max: i64,
    /// Maximum title characters kept in a point's excerpt
    pub excerpt_chars: usize,
    /// Approximate number of labels on the time axis
    pub target_x_ticks: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            domain_min: -10,
            domain_max: 10,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            target_x_ticks: 7,
        }
    }
}

/// Builds [`ChartPayload`]s
#[derive(Debug, Clone)]
pub struct ChartDataAdapter {
    config: ChartConfig,
    palette: SourcePalette,
}

impl ChartDataAdapter {
    pub fn new(config: ChartConfig, palette: SourcePalette) -> Self {
        Self { config, palette }
    }

    pub fn to_chart_payload(
        &self,
        series: Vec<SourceSeries>,
        summaries: Vec<SourceSummary>,
    ) -> ChartPayload {
        let domain = self.domain_for(&series);
        let total_points: usize = series.iter().map(SourceSeries::len).sum();

        let source_colors = series
            .iter()
            .map(|s| SourceColor {
                source: s.source.clone(),
                color: self.palette.color_for(&s.source).to_string(),
            })
            .collect();

        let x_tick_interval = if total_points == 0 {
            0
        } else {
            total_points.div_ceil(self.config.target_x_ticks.max(1))
        };

        debug!(
            "Built chart payload: {} series, {} points, domain [{}, {}]",
            series.len(),
            total_points,
            domain.min,
            domain.max
        );

        ChartPayload {
            series,
            domain,
            reference_lines: reference_lines(),
            ticks: ticks(domain),
            legend: legend(),
            source_colors,
            summaries,
            x_tick_interval,
        }
    }

    /// Configured domain, widened to the category boundaries and to any
    /// score that falls outside it
    fn domain_for(&self, series: &[SourceSeries]) -> AxisDomain {
        let configured = AxisDomain::new(self.config.domain_min, self.config.domain_max);
        let base = SentimentCategory::ALL
            .iter()
            .filter_map(SentimentCategory::upper_bound)
            .fold(configured, AxisDomain::widened_to);

        let domain = series
            .iter()
            .filter_map(SourceSeries::score_range)
            .fold(base, |domain, (min, max)| domain.widened_to(min).widened_to(max));

        if domain != base {
            warn!(
                "Scores exceed configured domain [{}, {}]; widened to [{}, {}]",
                base.min, base.max, domain.min, domain.max
            );
        }
        domain
    }
}

/// One line per finite category boundary, at the category's upper edge
fn reference_lines() -> Vec<ReferenceLine> {
    SentimentCategory::ALL
        .iter()
        .filter_map(|category| {
            let meta = category.metadata();
            category.upper_bound().map(|score| ReferenceLine {
                score,
                category: *category,
                label: meta.label.to_string(),
                color: meta.color.to_string(),
                pattern: meta.pattern,
            })
        })
        .collect()
}

fn legend() -> Vec<LegendEntry> {
    SentimentCategory::ALL
        .iter()
        .map(|category| {
            let meta = category.metadata();
            LegendEntry {
                category: *category,
                label: meta.label.to_string(),
                color: meta.color.to_string(),
                pattern: meta.pattern,
                bound_label: category.bound_label(),
            }
        })
        .collect()
}

fn ticks(domain: AxisDomain) -> Vec<i64> {
    SentimentCategory::ALL
        .iter()
        .filter_map(SentimentCategory::upper_bound)
        .chain([domain.min, 0, domain.max])
        .sorted()
        .dedup()
        .collect()
}
