//! Transport decorator that traces and meters every call.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::Instrument;

use super::metrics::{record_api_call, record_retry_hint, CallOutcome};
use crate::application::methods::{Attachment, Method};
use crate::application::projection::{ApiResponse, AsyncTransport, Transport};

/// Wraps a transport; each call gets a span, a latency sample and an
/// outcome count. Failures with a retry-after hint are logged as warnings.
#[derive(Debug, Clone, Default)]
pub struct Instrumented<T> {
    inner: T,
}

impl<T> Instrumented<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<F: Attachment, T: Transport<F>> Transport<F> for Instrumented<T> {
    fn call<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output> {
        let operation = <M as Method<F>>::NAME;
        let span = tracing::debug_span!("api_call", operation);
        let _guard = span.enter();

        let started = Instant::now();
        let response = self.inner.call(method);
        observe(operation, &response, started.elapsed());
        response
    }
}

#[async_trait]
impl<F: Attachment, T: AsyncTransport<F>> AsyncTransport<F> for Instrumented<T> {
    async fn call_async<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output> {
        let operation = <M as Method<F>>::NAME;
        let span = tracing::debug_span!("api_call", operation);

        let started = Instant::now();
        let response = self.inner.call_async(method).instrument(span).await;
        observe(operation, &response, started.elapsed());
        response
    }
}

fn observe<T>(operation: &'static str, response: &ApiResponse<T>, elapsed: Duration) {
    let outcome = match response {
        ApiResponse::Ok(_) => {
            tracing::debug!(operation, elapsed_ms = elapsed.as_millis() as u64, "Call succeeded");
            CallOutcome::Ok
        }
        ApiResponse::Err(error) => {
            match error.retry_after() {
                Some(wait) => {
                    tracing::warn!(
                        operation,
                        retry_after_secs = wait.as_secs(),
                        "Flood control hit, retry later"
                    );
                    record_retry_hint(operation);
                }
                None => tracing::debug!(
                    operation,
                    error_code = error.error_code,
                    description = %error.description,
                    "Call failed"
                ),
            }
            CallOutcome::Error
        }
    };
    record_api_call(operation, outcome, elapsed.as_secs_f64());
}
