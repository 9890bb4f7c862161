//! Maps a partial metrics payload onto the fixed rows of the results table.

use std::fmt;

use api::{MetricKey, MetricsPayload};

/// Shown in place of a metric the payload did not carry.
pub const PLACEHOLDER: &str = "-";

/// Table rows in display order. One row per entry, always.
pub const METRIC_CATALOG: [(&str, MetricKey); 14] = [
    ("DNS Lookup (ms)", MetricKey::DnsLookup),
    ("TCP Connect (ms)", MetricKey::TcpConnect),
    ("TLS Time (ms)", MetricKey::TlsTime),
    ("TTFB (ms)", MetricKey::Ttfb),
    ("Response Time (ms)", MetricKey::ResponseTime),
    ("DOM Interactive (ms)", MetricKey::DomInteractive),
    ("DOMContentLoaded (ms)", MetricKey::DomContentLoadedEvent),
    ("Load Event (ms)", MetricKey::LoadEvent),
    ("First Paint (ms)", MetricKey::FirstPaint),
    ("First Contentful Paint (ms)", MetricKey::FirstContentfulPaint),
    ("Largest Contentful Paint (ms)", MetricKey::Lcp),
    ("Cumulative Layout Shift", MetricKey::Cls),
    ("Total Requests", MetricKey::TotalRequests),
    ("Total Transfer (bytes)", MetricKey::TotalTransfer),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayValue {
    Number(f64),
    Placeholder,
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Placeholder => f.write_str(PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRow {
    pub label: &'static str,
    pub value: DisplayValue,
}

/// Build the table rows for `metrics`. Values are passed through untouched.
pub fn normalize(metrics: &MetricsPayload) -> Vec<DisplayRow> {
    METRIC_CATALOG
        .iter()
        .map(|&(label, key)| DisplayRow {
            label,
            value: metrics
                .get(key)
                .map_or(DisplayValue::Placeholder, DisplayValue::Number),
        })
        .collect()
}
