use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::types::{MeasurementReport, MeasurementRequest};

/// Path of the measurement endpoint, relative to the service origin.
pub const MEASURE_PATH: &str = "/api/measure";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unreadable response: {0}")]
    Decode(String),
}

/// Thin client for the measurement service.
#[derive(Debug, Clone)]
pub struct MeasureClient {
    http: reqwest::Client,
    endpoint: String,
}

impl MeasureClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, default headers).
    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one measurement call and decode whatever body comes back.
    ///
    /// The HTTP status is not inspected: the service answers rejected input with
    /// a 4xx/5xx status and an `error` body, which callers treat as a remote error.
    pub async fn measure(
        &self,
        request: &MeasurementRequest,
    ) -> Result<MeasurementReport, ApiError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Request(err.to_string()))?;
        debug!(%status, bytes = body.len(), "measurement response received");

        decode_report(&body)
    }
}

/// Decode a response body. Anything other than a JSON object is rejected.
pub fn decode_report(body: &str) -> Result<MeasurementReport, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))?;
    if !value.is_object() {
        return Err(ApiError::Decode("expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}
