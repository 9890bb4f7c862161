//! Request lifecycle of a single measurement.
//!
//! ```text
//! Idle ──trigger──▶ Pending ──settle──▶ Success | Failed
//!   ▲                 │                    │
//!   └────cancel───────┘     trigger ◀──────┘
//! ```
//!
//! The controller makes every decision and owns `last_report`; the view only
//! performs the network call and paints [`MeasurementController::rendered`].
//! At most one ticket is live. Settlements for any other ticket are dropped.

use std::time::Duration;

use api::{ApiError, MeasurementReport, MeasurementRequest};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::error::MeasureError;
use super::export::ExportArtifact;
use super::normalize::{normalize, DisplayRow};
use super::series::{build_series, ChartSeries};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

/// What the status line should say.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Status {
    #[default]
    Ready,
    Measuring { url: String },
    Completed { url: String },
    Failed(MeasureError),
    Cancelled,
}

impl Status {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Handle for the one request the controller is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub request: MeasurementRequest,
}

/// Everything the results region shows for one successful report.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub rows: Vec<DisplayRow>,
    pub series: ChartSeries,
}

impl Rendered {
    pub fn from_report(report: &MeasurementReport) -> Self {
        let metrics = report.metrics_or_default();
        Self {
            rows: normalize(&metrics),
            series: build_series(&metrics),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// The ticket was cancelled or replaced; nothing changed.
    Stale,
    Failed(MeasureError),
    Rendered(Rendered),
}

#[derive(Debug, Default)]
pub struct MeasurementController {
    phase: Phase,
    status: Status,
    last_report: Option<MeasurementReport>,
    in_flight: Option<Ticket>,
    next_ticket: u64,
    result_visible: bool,
}

impl MeasurementController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn last_report(&self) -> Option<&MeasurementReport> {
        self.last_report.as_ref()
    }

    pub fn result_visible(&self) -> bool {
        self.result_visible
    }

    /// Rows and series for the visible result region, rebuilt from `last_report`.
    pub fn rendered(&self) -> Option<Rendered> {
        if !self.result_visible {
            return None;
        }
        self.last_report.as_ref().map(Rendered::from_report)
    }

    pub fn is_pending(&self) -> bool {
        self.phase == Phase::Pending
    }

    /// Accept a measurement for `url`. Rejections leave every field untouched.
    pub fn trigger(&mut self, url: &str, headless: bool) -> Result<Ticket, MeasureError> {
        let url = url.trim();
        if url.is_empty() {
            debug!("trigger rejected: empty url");
            return Err(MeasureError::EmptyUrl);
        }
        if self.is_pending() {
            debug!(url, "trigger ignored: measurement already pending");
            return Err(MeasureError::Busy);
        }

        self.next_ticket += 1;
        let ticket = Ticket {
            id: self.next_ticket,
            request: MeasurementRequest::new(url, headless),
        };
        info!(ticket = ticket.id, url, headless, "measurement started");

        self.phase = Phase::Pending;
        self.status = Status::Measuring {
            url: url.to_string(),
        };
        self.result_visible = false;
        self.in_flight = Some(ticket.clone());
        Ok(ticket)
    }

    /// Feed back the outcome of the call made for `ticket_id`.
    pub fn settle(
        &mut self,
        ticket_id: u64,
        outcome: Result<MeasurementReport, ApiError>,
    ) -> Settlement {
        let Some(ticket) = self.take_ticket(ticket_id) else {
            debug!(ticket = ticket_id, "dropping stale settlement");
            return Settlement::Stale;
        };

        let report = match outcome {
            Ok(report) => report,
            Err(err) => {
                warn!(ticket = ticket_id, %err, "measurement transport failed");
                return self.fail(err.into());
            }
        };

        if let Some(message) = report.error_message() {
            warn!(ticket = ticket_id, error = message, "measurement reported an error");
            return self.fail(MeasureError::Remote(message.to_string()));
        }

        let url = report
            .url
            .clone()
            .unwrap_or_else(|| ticket.request.url.clone());
        let rendered = Rendered::from_report(&report);
        info!(
            ticket = ticket_id,
            url = url.as_str(),
            resources = rendered.series.len(),
            "measurement completed"
        );

        self.phase = Phase::Success;
        self.status = Status::Completed { url };
        self.last_report = Some(report);
        self.result_visible = true;
        Settlement::Rendered(rendered)
    }

    /// The configured deadline for `ticket_id` passed before it settled.
    pub fn time_out(&mut self, ticket_id: u64, after: Duration) -> Settlement {
        if self.take_ticket(ticket_id).is_none() {
            return Settlement::Stale;
        }
        warn!(ticket = ticket_id, secs = after.as_secs(), "measurement timed out");
        self.fail(MeasureError::TimedOut(after))
    }

    /// Abandon the pending measurement. Its eventual settlement will be dropped.
    pub fn cancel(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        if let Some(ticket) = self.in_flight.take() {
            info!(ticket = ticket.id, "measurement cancelled");
        }
        self.phase = Phase::Idle;
        self.status = Status::Cancelled;
        true
    }

    /// Serialize the last successful report. Fails if nothing succeeded yet.
    pub fn export_last(&self, now: OffsetDateTime) -> Result<ExportArtifact, MeasureError> {
        let report = self
            .last_report
            .as_ref()
            .ok_or(MeasureError::NothingToExport)?;
        ExportArtifact::from_report(report, now)
    }

    fn take_ticket(&mut self, ticket_id: u64) -> Option<Ticket> {
        if self.in_flight.as_ref().map(|ticket| ticket.id) == Some(ticket_id) {
            self.in_flight.take()
        } else {
            None
        }
    }

    fn fail(&mut self, err: MeasureError) -> Settlement {
        self.phase = Phase::Failed;
        self.status = Status::Failed(err.clone());
        self.result_visible = false;
        Settlement::Failed(err)
    }
}
