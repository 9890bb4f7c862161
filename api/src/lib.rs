//! Wire contract and HTTP client for the remote measurement service.
//!
//! The service accepts `POST /api/measure` with a [`MeasurementRequest`] body and
//! answers with a [`MeasurementReport`]. Every field of the report is optional;
//! callers go through the checked accessors rather than assuming a shape.

mod client;
mod types;

pub use client::{decode_report, ApiError, MeasureClient, MEASURE_PATH};
pub use types::{MeasurementReport, MeasurementRequest, MetricKey, MetricsPayload, ResourceEntry};
