//! Request tracing.

use std::future::Future;
use std::time::Instant;

use http::Method;
use tracing::{info, info_span, Instrument};

use crate::response::Response;

/// Runs `fut` inside a `request` span and logs how it went.
pub(crate) async fn traced<F>(method: &Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", method = %method, path = %path);
    async move {
        let started = Instant::now();
        let response = fut.await;
        info!(
            status = response.status_code().as_u16(),
            latency_us = started.elapsed().as_micros() as u64,
            "request completed"
        );
        response
    }
    .instrument(span)
    .await
}
