//! Prometheus-backed instrumentation.
//!
//! The registry is created explicitly at startup and handed to the
//! instrumentation wrapper through app state, so the recording path stays
//! testable without any ambient globals.

pub mod metrics;
