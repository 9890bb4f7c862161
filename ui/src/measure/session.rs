use dioxus::prelude::*;

use crate::core::controller::MeasurementController;
use crate::results::ChartSlot;

/// Measurement state for the lifetime of the page.
///
/// Provided once at the app root, above anything keyed by language, so a
/// remounted [`MeasureView`](super::MeasureView) keeps the last report, the
/// live chart and the running call.
#[derive(Clone, Copy, PartialEq)]
pub struct MeasureSession {
    pub controller: Signal<MeasurementController>,
    pub chart_slot: Signal<ChartSlot>,
    pub in_flight: Signal<Option<Task>>,
}

impl MeasureSession {
    /// Signals are owned by the calling scope.
    pub fn new() -> Self {
        Self {
            controller: Signal::new(MeasurementController::new()),
            chart_slot: Signal::new(ChartSlot::new()),
            in_flight: Signal::new(None),
        }
    }
}

/// The session provided by an ancestor, or a fresh one owned by this scope when
/// the view is mounted on its own.
pub fn use_measure_session() -> MeasureSession {
    use_hook(|| {
        try_consume_context::<MeasureSession>()
            .unwrap_or_else(|| provide_context(MeasureSession::new()))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{MeasurementReport, MetricsPayload};

    use super::*;

    thread_local! {
        static MOUNTED: RefCell<Vec<(MeasureSession, bool)>> = const { RefCell::new(Vec::new()) };
    }

    fn record(session: MeasureSession) {
        let has_report = session.controller.peek().last_report().is_some();
        MOUNTED.with(|seen| seen.borrow_mut().push((session, has_report)));
    }

    fn settled_controller() -> MeasurementController {
        let mut controller = MeasurementController::new();
        let ticket = controller.trigger("https://a.test", true).unwrap();
        let report = MeasurementReport {
            metrics: Some(MetricsPayload::default()),
            ..MeasurementReport::default()
        };
        controller.settle(ticket.id, Ok(report));
        controller
    }

    #[component]
    fn View() -> Element {
        record(use_measure_session());
        rsx! { div {} }
    }

    fn shell() -> Element {
        let session = use_context_provider(|| MeasureSession {
            controller: Signal::new(settled_controller()),
            ..MeasureSession::new()
        });
        record(session);
        // Two differently keyed mounts, as after a language switch.
        rsx! {
            div { key: "en-US", View {} }
            div { key: "zh-CN", View {} }
        }
    }

    #[test]
    fn every_mount_shares_the_root_session() {
        let mut dom = VirtualDom::new(shell);
        dom.rebuild_in_place();

        MOUNTED.with(|seen| {
            let seen = seen.borrow();
            assert_eq!(seen.len(), 3);
            let (root, _) = seen[0];
            assert!(seen.iter().all(|(session, _)| *session == root));
            assert!(seen.iter().all(|(_, has_report)| *has_report));
        });
    }

    fn standalone() -> Element {
        let session = use_measure_session();
        record(session);
        rsx! { View {} }
    }

    #[test]
    fn view_without_provider_owns_a_fresh_session() {
        let mut dom = VirtualDom::new(standalone);
        dom.rebuild_in_place();

        MOUNTED.with(|seen| {
            let seen = seen.borrow();
            assert_eq!(seen.len(), 2);
            assert!(seen[0].0 == seen[1].0);
            assert!(!seen[0].1);
        });
    }
}
