//! HTTP request metrics: one counter, one duration histogram.
//!
//! Label scheme:
//! - `http_requests_total{code, method}` counts every request by final
//!   status code.
//! - `http_request_duration_seconds{code, handler, method}` records elapsed
//!   wall-clock time including the simulated delay; `handler` carries the
//!   route identity.

use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

use slowbox_core::error::{Result, SlowboxError};

pub struct HttpMetrics {
    pub requests_total: IntCounterVec,
    pub request_duration_seconds: HistogramVec,
}

impl HttpMetrics {
    /// Create both instruments and register them against `registry`.
    pub fn register(registry: &Registry) -> Result<Self> {
        let requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Count of all HTTP requests"),
            &["code", "method"],
        )
        .map_err(|e| SlowboxError::Metrics(e.to_string()))?;
        registry
            .register(Box::new(requests_total.clone()))
            .map_err(|e| SlowboxError::Metrics(e.to_string()))?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of all HTTP requests",
            ),
            &["code", "handler", "method"],
        )
        .map_err(|e| SlowboxError::Metrics(e.to_string()))?;
        registry
            .register(Box::new(request_duration_seconds.clone()))
            .map_err(|e| SlowboxError::Metrics(e.to_string()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
        })
    }

    /// Fold one request's observation into the aggregate state.
    ///
    /// Sink errors never reach the caller: a response must not fail because
    /// the metrics pipeline rejected an observation.
    pub fn observe(&self, route: &str, method: &str, status: u16, elapsed: Duration) {
        let code = status.to_string();

        match self.requests_total.get_metric_with_label_values(&[&code, method]) {
            Ok(counter) => counter.inc(),
            Err(e) => tracing::debug!(error = %e, route, "request counter rejected observation"),
        }

        match self
            .request_duration_seconds
            .get_metric_with_label_values(&[&code, route, method])
        {
            Ok(hist) => hist.observe(elapsed.as_secs_f64()),
            Err(e) => tracing::debug!(error = %e, route, "duration histogram rejected observation"),
        }
    }
}

/// Render the registry in the Prometheus text exposition format. Encoding
/// failures degrade to an empty payload; scrapes always get a 200.
pub fn render(registry: &Registry) -> String {
    let mut buf = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&registry.gather(), &mut buf) {
        tracing::warn!(error = %e, "metrics encode failed");
        return String::new();
    }
    String::from_utf8(buf).unwrap_or_default()
}
