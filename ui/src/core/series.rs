//! Turns the resource sample into label/value arrays for the transfer-size chart.

use api::{MetricsPayload, ResourceEntry};

/// Resources plotted per report.
pub const MAX_CHART_ENTRIES: usize = 20;
/// Characters of a resource name kept in its label.
pub const MAX_LABEL_CHARS: usize = 40;
pub const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// First [`MAX_CHART_ENTRIES`] resources in payload order, no sorting or filtering.
pub fn build_series(metrics: &MetricsPayload) -> ChartSeries {
    let (labels, values) = metrics
        .resources()
        .iter()
        .take(MAX_CHART_ENTRIES)
        .enumerate()
        .map(|(idx, entry)| (entry_label(idx + 1, entry), entry.transfer_size_or_zero()))
        .unzip();

    ChartSeries { labels, values }
}

fn entry_label(position: usize, entry: &ResourceEntry) -> String {
    format!("{position}:{}", truncate_name(&entry.name))
}

pub fn truncate_name(name: &str) -> String {
    match name.char_indices().nth(MAX_LABEL_CHARS) {
        Some((cut, _)) => {
            let mut short = name[..cut].to_string();
            short.push(ELLIPSIS);
            short
        }
        None => name.to_string(),
    }
}
