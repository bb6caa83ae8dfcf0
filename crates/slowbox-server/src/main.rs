//! slowbox server: synthetic HTTP endpoints with known latency and failure
//! characteristics, for exercising metrics scrapers, dashboards, and alerts.
//!
//! - Seven simulated routes (/good, /ok, /acceptable, /veryslow, /err, /bad,
//!   /notfound), each instrumented with a request counter and a duration
//!   histogram.
//! - /metrics exposes the Prometheus text format; /healthz is liveness.

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use slowbox_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    // Optional config file; defaults serve the fixed :8080 contract.
    let cfg = config::load_or_default("slowbox.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("metrics registration failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "slowbox-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
