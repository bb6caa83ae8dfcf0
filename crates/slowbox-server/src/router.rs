//! Axum router wiring (one path per behavior variant).
//!
//! The simulated routes accept any method (method is not validated, it is
//! only recorded as a label); /metrics and /healthz are GET.

use axum::http::Method;
use axum::routing::{any, get};
use axum::Router;

use slowbox_core::policy;

use crate::{app_state::AppState, ops, simulate::Simulated};

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();

    for (path, route_policy) in policy::routes() {
        let sim = Simulated::new(
            path.trim_start_matches('/'),
            route_policy,
            state.metrics(),
        );
        router = router.route(
            path,
            any(move |method: Method| {
                let sim = sim.clone();
                async move { sim.handle(method).await }
            }),
        );
    }

    router
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
