//! Drives the one outbound call behind an accepted ticket.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use api::{ApiError, MeasureClient, MeasurementReport, MeasurementRequest};
use futures::future::{select, Either};

use crate::core::platform;

#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Settled(Result<MeasurementReport, ApiError>),
    TimedOut(Duration),
}

pub async fn run_measurement(
    client: &MeasureClient,
    request: &MeasurementRequest,
    timeout: Option<Duration>,
) -> CallOutcome {
    let call = client.measure(request);
    let Some(limit) = timeout else {
        return CallOutcome::Settled(call.await);
    };

    match race(call, Some(platform::sleep(limit))).await {
        Some(result) => CallOutcome::Settled(result),
        None => CallOutcome::TimedOut(limit),
    }
}

/// Resolve `call`, or `None` if `deadline` fires first.
pub async fn race<F, D>(call: F, deadline: Option<D>) -> Option<F::Output>
where
    F: Future,
    D: Future<Output = ()>,
{
    let Some(deadline) = deadline else {
        return Some(call.await);
    };

    let call = pin!(call);
    let deadline = pin!(deadline);
    match select(call, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn call_wins_over_pending_deadline() {
        let outcome = block_on(race(ready(7), Some(pending::<()>())));
        assert_eq!(outcome, Some(7));
    }

    #[test]
    fn elapsed_deadline_abandons_call() {
        let outcome = block_on(race(pending::<u8>(), Some(ready(()))));
        assert_eq!(outcome, None);
    }

    #[test]
    fn no_deadline_waits_for_call() {
        let outcome = block_on(race(ready("done"), None::<futures::future::Ready<()>>));
        assert_eq!(outcome, Some("done"));
    }
}
