//! slowbox core: route behavior policies and the shared error surface.
//!
//! This crate defines the latency/outcome distributions that give each
//! simulated route its characteristic shape. It intentionally carries no
//! transport or runtime dependencies so the distribution table can be tested
//! without an HTTP server in the loop.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Policy draws cannot fail; everything else surfaces as
//! `SlowboxError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod policy;

/// Shared result type.
pub use error::{Result, SlowboxError};
