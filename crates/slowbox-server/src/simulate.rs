//! Instrumentation wrapper around a route behavior policy.
//!
//! Per request: draw (delay, status, body) from the policy, wait out the
//! delay cooperatively, write the response, and fold exactly one observation
//! into the shared metrics. The recorded duration spans wrapper entry to
//! response completion, so it includes the simulated delay.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tokio::time::{sleep, Instant};

use slowbox_core::policy::RoutePolicy;

use crate::obs::metrics::HttpMetrics;

/// One simulated route: identity label, behavior policy, metrics sink.
#[derive(Clone)]
pub struct Simulated {
    route: &'static str,
    policy: RoutePolicy,
    metrics: Arc<HttpMetrics>,
}

impl Simulated {
    pub fn new(route: &'static str, policy: RoutePolicy, metrics: Arc<HttpMetrics>) -> Self {
        Self {
            route,
            policy,
            metrics,
        }
    }

    pub fn route(&self) -> &'static str {
        self.route
    }

    /// Handle one request. Runs the simulation on a detached task so a client
    /// disconnect mid-delay cannot cancel the wait or drop the observation.
    pub async fn handle(&self, method: Method) -> Response {
        let this = self.clone();
        match tokio::spawn(async move { this.run(method).await }).await {
            Ok(resp) => resp,
            // Join failure means the simulation task panicked; nothing was
            // recorded, answer 500.
            Err(e) => {
                tracing::error!(error = %e, route = self.route, "simulation task failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    async fn run(&self, method: Method) -> Response {
        let started = Instant::now();

        // Draw synchronously; the per-thread generator is seeded once and
        // never held across an await.
        let draw = self.policy.draw(&mut rand::thread_rng());

        if !draw.delay.is_zero() {
            sleep(draw.delay).await;
        }

        let status = StatusCode::from_u16(draw.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let resp = match draw.body {
            Some(body) => (status, body).into_response(),
            None => status.into_response(),
        };

        // Status is final here; record before returning.
        self.metrics
            .observe(self.route, method.as_str(), status.as_u16(), started.elapsed());

        resp
    }
}
