//! Runtime configuration for the measurement client.

use std::time::Duration;

use api::MEASURE_PATH;

use super::platform;

/// Where the measurement service listens when no page origin is available.
pub const DEFAULT_SERVICE_BASE: &str = "http://127.0.0.1:5000";

/// Provided through the Dioxus context by each platform entry point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureConfig {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl MeasureConfig {
    /// Talk to the service that served the page.
    pub fn same_origin() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base_url: Some(base.into()),
            timeout: None,
        }
    }

    /// Give up on a pending measurement after `timeout`. Unset means wait forever.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL of the measurement endpoint.
    pub fn endpoint(&self) -> String {
        let base = self
            .base_url
            .clone()
            .or_else(platform::page_origin)
            .unwrap_or_else(|| DEFAULT_SERVICE_BASE.to_string());
        join_endpoint(&base)
    }
}

fn join_endpoint(base: &str) -> String {
    format!("{}{MEASURE_PATH}", base.trim_end_matches('/'))
}
