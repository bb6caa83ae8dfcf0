//! Shared application state.
//!
//! Owns the config, the metrics registry, and the registered instruments.
//! The registry is built here once and passed into the instrumentation
//! wrapper explicitly so tests can stand up the recording path in isolation.

use std::sync::Arc;

use prometheus::Registry;

use slowbox_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::metrics::HttpMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    registry: Registry,
    metrics: Arc<HttpMetrics>,
}

impl AppState {
    /// Build application state. Returns Result so main can treat metrics
    /// registration failure as a fatal startup error.
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        let registry = Registry::new();
        let metrics = Arc::new(HttpMetrics::register(&registry)?);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                registry,
                metrics,
            }),
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> Arc<HttpMetrics> {
        Arc::clone(&self.inner.metrics)
    }
}
