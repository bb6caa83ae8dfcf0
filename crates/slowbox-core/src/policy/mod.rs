//! Route behavior policies (latency + outcome distributions).
//!
//! Each simulated route is governed by a `RoutePolicy`: an immutable pair of
//! a delay distribution and a status-code distribution, fixed at build time.
//! Policies are plain data so the full table can be exercised with a seeded
//! RNG and no server in the loop.

pub mod dist;
pub mod routes;

pub use dist::{DelayDist, Draw, Outcome, OutcomeDist, RoutePolicy};
pub use routes::routes;
