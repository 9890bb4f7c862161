//! JSON export of the last successful report.

use api::MeasurementReport;
use time::{macros::format_description, OffsetDateTime};

use super::error::MeasureError;

pub const EXPORT_PREFIX: &str = "webperf_report_";
pub const EXPORT_MIME: &str = "application/json";

/// A file ready to hand to the platform's save mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn from_report(
        report: &MeasurementReport,
        now: OffsetDateTime,
    ) -> Result<Self, MeasureError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|err| MeasureError::Serialize(err.to_string()))?;
        Ok(Self {
            filename: export_filename(now),
            mime: EXPORT_MIME,
            bytes: json.into_bytes(),
        })
    }
}

/// `webperf_report_<ISO-8601 basic UTC>.json`, e.g. `webperf_report_20261017T093012.345Z.json`.
pub fn export_filename(now: OffsetDateTime) -> String {
    format!("{EXPORT_PREFIX}{}.json", timestamp_slug(now))
}

fn timestamp_slug(now: OffsetDateTime) -> String {
    now.to_offset(time::UtcOffset::UTC)
        .format(&format_description!(
            "[year][month][day]T[hour][minute][second].[subsecond digits:3]Z"
        ))
        .unwrap_or_else(|_| "export".into())
}
