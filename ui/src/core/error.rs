use std::time::Duration;

use thiserror::Error;

/// Everything that can stop a measurement or an export. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeasureError {
    #[error("please enter a URL to measure")]
    EmptyUrl,
    #[error("a measurement is already running")]
    Busy,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("measurement error: {0}")]
    Remote(String),
    #[error("no response after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("no report to export yet, run a measurement first")]
    NothingToExport,
    #[error("could not serialize report: {0}")]
    Serialize(String),
}

impl MeasureError {
    /// Errors raised before any work starts, shown as a blocking prompt.
    pub fn is_prompt(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::NothingToExport)
    }
}

impl From<api::ApiError> for MeasureError {
    fn from(err: api::ApiError) -> Self {
        match err {
            api::ApiError::Request(reason) | api::ApiError::Decode(reason) => {
                Self::Transport(reason)
            }
        }
    }
}
