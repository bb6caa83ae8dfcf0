//! Distribution primitives for simulated routes.
//!
//! All draws are uniform and independent: a fresh delay is sampled per
//! invocation (inclusive of both bounds), and weighted outcomes roll an
//! independent uniform value in [0,100) against the success threshold.
//! The caller supplies the RNG; the process-wide generator is seeded once
//! and never reseeded per call.

use std::time::Duration;

use rand::Rng;

/// How long a route artificially delays before responding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayDist {
    /// No intentional sleep.
    None,
    /// Uniform draw in `[min, max]` milliseconds.
    UniformMs { min: u64, max: u64 },
    /// Uniform draw in `[min, max]` milliseconds plus a fixed pad.
    UniformPlusMs { min: u64, max: u64, pad: u64 },
}

impl DelayDist {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        match *self {
            DelayDist::None => Duration::ZERO,
            DelayDist::UniformMs { min, max } => Duration::from_millis(rng.gen_range(min..=max)),
            DelayDist::UniformPlusMs { min, max, pad } => {
                Duration::from_millis(rng.gen_range(min..=max) + pad)
            }
        }
    }
}

/// A single response shape: status code plus optional fixed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: u16,
    pub body: Option<&'static str>,
}

/// Which outcome a route produces per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeDist {
    /// Fixed single outcome.
    Always(Outcome),
    /// `success` with probability `success_percent`/100, else `failure`.
    Weighted {
        success: Outcome,
        failure: Outcome,
        success_percent: u8,
    },
}

impl OutcomeDist {
    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        match *self {
            OutcomeDist::Always(o) => o,
            OutcomeDist::Weighted {
                success,
                failure,
                success_percent,
            } => {
                if rng.gen_range(0..100u8) < success_percent {
                    success
                } else {
                    failure
                }
            }
        }
    }
}

/// One invocation's result: how long to wait and what to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub delay: Duration,
    pub status: u16,
    pub body: Option<&'static str>,
}

/// Immutable per-route behavior: delay distribution + outcome distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePolicy {
    pub delay: DelayDist,
    pub outcome: OutcomeDist,
}

impl RoutePolicy {
    /// Simulate one request. Cannot fail: every draw terminates with a valid
    /// (delay, status) pair.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Draw {
        let delay = self.delay.sample(rng);
        let outcome = self.outcome.pick(rng);
        Draw {
            delay,
            status: outcome.status,
            body: outcome.body,
        }
    }
}
