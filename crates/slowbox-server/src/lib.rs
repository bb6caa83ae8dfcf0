//! slowbox server library entry.
//!
//! This crate wires the behavior-policy table, the instrumentation wrapper,
//! and the metrics registry into an axum service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod simulate;
