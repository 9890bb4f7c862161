use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Body of the outbound measurement call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementRequest {
    pub url: String,
    pub headless: bool,
}

impl MeasurementRequest {
    pub fn new(url: impl Into<String>, headless: bool) -> Self {
        Self {
            url: url.into(),
            headless,
        }
    }
}

/// Decoded response of the measurement service.
///
/// Unknown top-level fields are kept in `extra` so an exported report matches
/// what the service sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MeasurementReport {
    /// Error reported by the remote side. `null` and empty strings count as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    pub fn metrics_or_default(&self) -> MetricsPayload {
        self.metrics.clone().unwrap_or_default()
    }
}

/// Named numeric fields of a [`MetricsPayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    RedirectTime,
    DnsLookup,
    TcpConnect,
    TlsTime,
    Ttfb,
    ResponseTime,
    DomInteractive,
    DomContentLoadedEvent,
    LoadEvent,
    FirstPaint,
    FirstContentfulPaint,
    Lcp,
    Cls,
    TotalRequests,
    TotalTransfer,
}

impl MetricKey {
    /// Field name on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RedirectTime => "redirect_time",
            Self::DnsLookup => "dns_lookup",
            Self::TcpConnect => "tcp_connect",
            Self::TlsTime => "tls_time",
            Self::Ttfb => "ttfb",
            Self::ResponseTime => "response_time",
            Self::DomInteractive => "dom_interactive",
            Self::DomContentLoadedEvent => "dom_content_loaded_event",
            Self::LoadEvent => "load_event",
            Self::FirstPaint => "first_paint",
            Self::FirstContentfulPaint => "first_contentful_paint",
            Self::Lcp => "lcp",
            Self::Cls => "cls",
            Self::TotalRequests => "total_requests",
            Self::TotalTransfer => "total_transfer",
        }
    }
}

/// Timing and transfer figures for one measured page. Nothing is guaranteed present.
///
/// Figures stay [`Number`]s so integers the service sent are written back as
/// integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_time: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_lookup: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_connect: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_time: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttfb: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom_interactive: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom_content_loaded_event: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_event: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_paint: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_contentful_paint: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lcp: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_transfer: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_sample: Option<Vec<ResourceEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetricsPayload {
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        let field = match key {
            MetricKey::RedirectTime => &self.redirect_time,
            MetricKey::DnsLookup => &self.dns_lookup,
            MetricKey::TcpConnect => &self.tcp_connect,
            MetricKey::TlsTime => &self.tls_time,
            MetricKey::Ttfb => &self.ttfb,
            MetricKey::ResponseTime => &self.response_time,
            MetricKey::DomInteractive => &self.dom_interactive,
            MetricKey::DomContentLoadedEvent => &self.dom_content_loaded_event,
            MetricKey::LoadEvent => &self.load_event,
            MetricKey::FirstPaint => &self.first_paint,
            MetricKey::FirstContentfulPaint => &self.first_contentful_paint,
            MetricKey::Lcp => &self.lcp,
            MetricKey::Cls => &self.cls,
            MetricKey::TotalRequests => &self.total_requests,
            MetricKey::TotalTransfer => &self.total_transfer,
        };
        field.as_ref().and_then(Number::as_f64)
    }

    pub fn resources(&self) -> &[ResourceEntry] {
        self.resource_sample.as_deref().unwrap_or(&[])
    }
}

/// One sub-resource load record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "transferSize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_size: Option<Number>,
    #[serde(
        rename = "initiatorType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub initiator_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Number>,
}

impl ResourceEntry {
    pub fn new(name: impl Into<String>, transfer_size: Option<f64>) -> Self {
        Self {
            name: name.into(),
            transfer_size: transfer_size.and_then(Number::from_f64),
            ..Self::default()
        }
    }

    pub fn transfer_size_or_zero(&self) -> f64 {
        self.transfer_size
            .as_ref()
            .and_then(Number::as_f64)
            .unwrap_or(0.0)
    }
}
