//! Measurement form, status line and the async adapter around
//! [`MeasurementController`].

mod runner;
mod session;
pub use runner::{race, run_measurement, CallOutcome};
pub use session::{use_measure_session, MeasureSession};

use api::MeasureClient;
use dioxus::prelude::*;
use tracing::debug;

use crate::core::config::MeasureConfig;
use crate::core::controller::{Settlement, Status};
use crate::core::error::MeasureError;
use crate::core::platform::{self, Platform};
use crate::results::{ExportPanel, MetricsTable, ResourceChart};

#[component]
pub fn MeasureView() -> Element {
    let config = try_use_context::<MeasureConfig>().unwrap_or_else(MeasureConfig::same_origin);

    let session = use_measure_session();
    let MeasureSession {
        mut controller,
        chart_slot,
        mut in_flight,
    } = session;

    let mut url = use_signal(String::new);
    let mut headless = use_signal(|| true);
    let mut notice = use_signal(|| Option::<String>::None);

    let on_measure = move |_| {
        let accepted = controller.with_mut(|c| c.trigger(&url(), headless()));
        let ticket = match accepted {
            Ok(ticket) => ticket,
            Err(MeasureError::Busy) => return,
            Err(err) => {
                raise_prompt(&err, notice);
                return;
            }
        };
        notice.set(None);

        let client = MeasureClient::new(config.endpoint());
        let timeout = config.timeout();
        debug!(endpoint = client.endpoint(), "issuing measurement call");
        // Root scope: a remount of this view must not drop the call.
        let task = spawn_forever(async move {
            let outcome = run_measurement(&client, &ticket.request, timeout).await;
            apply_outcome(ticket.id, outcome, session);
            in_flight.set(None);
        });
        in_flight.set(task);
    };

    let on_cancel = move |_| {
        if controller.with_mut(|c| c.cancel()) {
            if let Some(task) = in_flight.write().take() {
                task.cancel();
            }
        }
    };

    let (pending, visible, status) =
        controller.with(|c| (c.is_pending(), c.result_visible(), c.status().clone()));
    let status_line = status_text(&status);
    let status_class = if status.is_error() {
        "measure__status measure__status--error"
    } else {
        "measure__status"
    };
    let rows = controller
        .with(|c| c.rendered())
        .map(|view| view.rows)
        .unwrap_or_default();
    let chart = chart_slot.with(|slot| slot.current().cloned());

    rsx! {
        div { class: "measure",
            div { class: "measure__form",
                input {
                    id: "url-input",
                    class: "measure__url",
                    r#type: "text",
                    placeholder: crate::t!("form-url-placeholder"),
                    value: "{url}",
                    oninput: move |evt: FormEvent| url.set(evt.value()),
                }
                label { class: "measure__headless",
                    input {
                        id: "headless-input",
                        r#type: "checkbox",
                        checked: headless(),
                        onchange: move |_| {
                            let next = !headless();
                            headless.set(next);
                        },
                    }
                    {crate::t!("form-headless")}
                }
                button {
                    id: "measure-button",
                    r#type: "button",
                    class: "button button--primary",
                    disabled: pending,
                    onclick: on_measure,
                    {crate::t!("form-measure")}
                }
                if pending {
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: on_cancel,
                        {crate::t!("form-cancel")}
                    }
                }
                ExportPanel { controller, notice }
            }

            if let Some(message) = notice() {
                div { class: "measure__notice", role: "alert",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| notice.set(None),
                        {crate::t!("notice-dismiss")}
                    }
                }
            }

            p { id: "status", class: "{status_class}", "{status_line}" }

            div { id: "result", class: "measure__result", hidden: !visible,
                h2 { {crate::t!("result-metrics-heading")} }
                MetricsTable { rows }
                h2 { {crate::t!("result-chart-heading")} }
                if let Some(chart) = chart {
                    ResourceChart { chart }
                }
            }
        }
    }
}

fn apply_outcome(ticket_id: u64, outcome: CallOutcome, session: MeasureSession) {
    let MeasureSession {
        mut controller,
        mut chart_slot,
        ..
    } = session;
    let settlement = controller.with_mut(|c| match outcome {
        CallOutcome::Settled(result) => c.settle(ticket_id, result),
        CallOutcome::TimedOut(after) => c.time_out(ticket_id, after),
    });

    if let Settlement::Rendered(view) = settlement {
        chart_slot.with_mut(|slot| {
            slot.render(view.series);
        });
    }
}

/// Show a blocking prompt for input/export precondition errors.
pub fn raise_prompt(err: &MeasureError, mut notice: Signal<Option<String>>) {
    let message = prompt_text(err);
    platform::prompt(&message);
    if !Platform::current().has_native_prompt() {
        notice.set(Some(message));
    }
}

fn prompt_text(err: &MeasureError) -> String {
    match err {
        MeasureError::EmptyUrl => crate::t!("prompt-empty-url"),
        MeasureError::NothingToExport => crate::t!("prompt-nothing-to-export"),
        other => other.to_string(),
    }
}

pub fn status_text(status: &Status) -> String {
    match status {
        Status::Ready => crate::t!("status-ready"),
        Status::Measuring { url } => crate::t!("status-measuring", url = url.as_str()),
        Status::Completed { url } => crate::t!("status-completed", url = url.as_str()),
        Status::Failed(MeasureError::Transport(reason)) => {
            crate::t!("status-transport-failed", reason = reason.as_str())
        }
        Status::Failed(MeasureError::Remote(reason)) => {
            crate::t!("status-remote-error", reason = reason.as_str())
        }
        Status::Failed(MeasureError::TimedOut(after)) => {
            crate::t!("status-timed-out", seconds = after.as_secs().to_string())
        }
        Status::Failed(other) => other.to_string(),
        Status::Cancelled => crate::t!("status-cancelled"),
    }
}
