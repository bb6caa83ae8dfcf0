//! Instrumented-route tests.
//!
//! All tests run with a paused tokio clock: `sleep` auto-advances virtual
//! time, so the simulated delay windows can be asserted exactly and the
//! suite finishes in real milliseconds.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::ops::RangeInclusive;

use axum::http::Method;
use tokio::time::Instant;

use slowbox_core::policy::{self, RoutePolicy};
use slowbox_server::app_state::AppState;
use slowbox_server::config::ServerConfig;
use slowbox_server::{obs, ops, simulate::Simulated};

fn state() -> AppState {
    AppState::new(ServerConfig::default()).unwrap()
}

fn sim(state: &AppState, route: &'static str, route_policy: RoutePolicy) -> Simulated {
    Simulated::new(route, route_policy, state.metrics())
}

async fn timed_ms(sim: &Simulated) -> (u16, u64) {
    let started = Instant::now();
    let resp = sim.handle(Method::GET).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    (resp.status().as_u16(), elapsed_ms)
}

async fn assert_window(sim: &Simulated, status: u16, window: RangeInclusive<u64>, rounds: u32) {
    for _ in 0..rounds {
        let (code, ms) = timed_ms(sim).await;
        assert_eq!(code, status);
        assert!(
            window.contains(&ms),
            "{}: elapsed {ms}ms outside {window:?}",
            sim.route()
        );
    }
}

#[tokio::test(start_paused = true)]
async fn good_is_instant_200_with_body() {
    let st = state();
    let sim = sim(&st, "good", RoutePolicy::fast_success());

    let started = Instant::now();
    let resp = sim.handle(Method::GET).await;
    assert!(started.elapsed().is_zero());
    assert_eq!(resp.status().as_u16(), 200);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], policy::routes::GREETING.as_bytes());
}

#[tokio::test(start_paused = true)]
async fn ok_delays_100_to_300() {
    let st = state();
    let sim = sim(&st, "ok", RoutePolicy::minor_delay_success());
    assert_window(&sim, 200, 100..=300, 20).await;
}

#[tokio::test(start_paused = true)]
async fn veryslow_delays_500_to_800() {
    let st = state();
    let sim = sim(&st, "veryslow", RoutePolicy::major_delay_success());
    assert_window(&sim, 200, 500..=800, 20).await;
}

#[tokio::test(start_paused = true)]
async fn err_is_500_delayed_400_to_600() {
    let st = state();
    let sim = sim(&st, "err", RoutePolicy::delayed_failure());
    assert_window(&sim, 500, 400..=600, 20).await;
}

#[tokio::test(start_paused = true)]
async fn bad_is_slow_but_answers_200() {
    let st = state();
    let sim = sim(&st, "bad", RoutePolicy::delayed_success_marked_bad());
    assert_window(&sim, 200, 500..=800, 20).await;
}

#[tokio::test(start_paused = true)]
async fn notfound_is_instant_404() {
    let st = state();
    let sim = sim(&st, "notfound", RoutePolicy::not_found());
    assert_window(&sim, 404, 0..=0, 10).await;
}

#[tokio::test(start_paused = true)]
async fn k_requests_produce_k_observations() {
    let st = state();
    let sim = sim(&st, "good", RoutePolicy::fast_success());

    let k = 5u64;
    for _ in 0..k {
        sim.handle(Method::GET).await;
    }

    let metrics = st.metrics();
    assert_eq!(
        metrics.requests_total.with_label_values(&["200", "GET"]).get(),
        k
    );
    assert_eq!(
        metrics
            .request_duration_seconds
            .with_label_values(&["200", "good", "GET"])
            .get_sample_count(),
        k
    );
}

#[tokio::test(start_paused = true)]
async fn recorded_duration_includes_simulated_delay() {
    let st = state();
    let sim = sim(&st, "err", RoutePolicy::delayed_failure());

    sim.handle(Method::GET).await;

    let hist = st
        .metrics()
        .request_duration_seconds
        .with_label_values(&["500", "err", "GET"]);
    assert_eq!(hist.get_sample_count(), 1);
    // The delay floor for this variant is 400ms.
    assert!(hist.get_sample_sum() >= 0.4, "sum {} below delay floor", hist.get_sample_sum());
}

#[tokio::test(start_paused = true)]
async fn concurrent_requests_record_exactly_m_observations() {
    let st = state();
    let m = 32;

    let mut tasks = tokio::task::JoinSet::new();
    for (i, (path, route_policy)) in policy::routes().iter().cycle().take(m).enumerate() {
        let sim = Simulated::new(path.trim_start_matches('/'), *route_policy, st.metrics());
        let method = if i % 2 == 0 { Method::GET } else { Method::POST };
        tasks.spawn(async move { sim.handle(method).await.status().as_u16() });
    }
    while let Some(res) = tasks.join_next().await {
        res.unwrap();
    }

    let total: f64 = st
        .registry()
        .gather()
        .iter()
        .filter(|f| f.get_name() == "http_requests_total")
        .flat_map(|f| f.get_metric())
        .map(|m| m.get_counter().get_value())
        .sum();
    assert_eq!(total as usize, m);
}

#[tokio::test(start_paused = true)]
async fn acceptable_success_ratio_near_90_percent() {
    let st = state();
    let sim = sim(&st, "acceptable", RoutePolicy::mostly_success());

    let n = 1_000;
    let mut successes = 0u32;
    for _ in 0..n {
        let (code, ms) = timed_ms(&sim).await;
        assert!((200..=300).contains(&ms));
        match code {
            200 => successes += 1,
            500 => {}
            other => panic!("unexpected status {other}"),
        }
    }
    let p = f64::from(successes) / f64::from(n);
    // ~4 standard errors at n=1000.
    assert!((p - 0.90).abs() < 0.04, "success ratio {p} drifted from 0.90");
}

#[tokio::test(start_paused = true)]
async fn metrics_endpoint_renders_touched_families() {
    let st = state();
    let sim = sim(&st, "good", RoutePolicy::fast_success());
    sim.handle(Method::GET).await;

    let resp = ops::metrics(axum::extract::State(st.clone())).await;
    assert_eq!(resp.status().as_u16(), 200);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("# TYPE http_requests_total counter"));
    assert!(text.contains("# TYPE http_request_duration_seconds histogram"));

    // Same content as rendering the registry directly.
    assert_eq!(text, obs::metrics::render(st.registry()));
}
