//! The fixed route table and its named behavior variants.
//!
//! | Path        | Delay (ms)        | Outcome                        |
//! |-------------|-------------------|--------------------------------|
//! | /good       | 0                 | 200 + body                     |
//! | /ok         | 100-300 uniform   | 200 + body                     |
//! | /acceptable | 200-300 uniform   | 90% 200 + body, else 500       |
//! | /veryslow   | 500-800 uniform   | 200 + body                     |
//! | /err        | 200-400 + 200 pad | 500                            |
//! | /bad        | 500-800 uniform   | 200, status only               |
//! | /notfound   | 0                 | 404                            |

use super::dist::{DelayDist, Outcome, OutcomeDist, RoutePolicy};

/// Fixed success body shared by the happy-path variants.
pub const GREETING: &str = "Hello from example application.";

const OK_WITH_BODY: Outcome = Outcome {
    status: 200,
    body: Some(GREETING),
};

const OK_STATUS_ONLY: Outcome = Outcome {
    status: 200,
    body: None,
};

const SERVER_ERROR: Outcome = Outcome {
    status: 500,
    body: None,
};

const NOT_FOUND: Outcome = Outcome {
    status: 404,
    body: None,
};

impl RoutePolicy {
    /// Happy path: fast and returns successfully.
    pub fn fast_success() -> Self {
        Self {
            delay: DelayDist::None,
            outcome: OutcomeDist::Always(OK_WITH_BODY),
        }
    }

    /// Small delay but successful.
    pub fn minor_delay_success() -> Self {
        Self {
            delay: DelayDist::UniformMs { min: 100, max: 300 },
            outcome: OutcomeDist::Always(OK_WITH_BODY),
        }
    }

    /// Significant delay, but successful.
    pub fn major_delay_success() -> Self {
        Self {
            delay: DelayDist::UniformMs { min: 500, max: 800 },
            outcome: OutcomeDist::Always(OK_WITH_BODY),
        }
    }

    /// Reasonable delay; succeeds ~90% of the time, else 500.
    pub fn mostly_success() -> Self {
        Self {
            delay: DelayDist::UniformMs { min: 200, max: 300 },
            outcome: OutcomeDist::Weighted {
                success: OK_WITH_BODY,
                failure: SERVER_ERROR,
                success_percent: 90,
            },
        }
    }

    /// No delay, always 404.
    pub fn not_found() -> Self {
        Self {
            delay: DelayDist::None,
            outcome: OutcomeDist::Always(NOT_FOUND),
        }
    }

    /// Small delay plus a fixed 200ms pad, always 500.
    pub fn delayed_failure() -> Self {
        Self {
            delay: DelayDist::UniformPlusMs {
                min: 200,
                max: 400,
                pad: 200,
            },
            outcome: OutcomeDist::Always(SERVER_ERROR),
        }
    }

    /// Significant delay, returns 200 with no body despite the "bad" name.
    /// Kept as-is from the reference behavior; see DESIGN.md.
    pub fn delayed_success_marked_bad() -> Self {
        Self {
            delay: DelayDist::UniformMs { min: 500, max: 800 },
            outcome: OutcomeDist::Always(OK_STATUS_ONLY),
        }
    }
}

/// The fixed path table served by the simulator.
pub fn routes() -> [(&'static str, RoutePolicy); 7] {
    [
        ("/good", RoutePolicy::fast_success()),
        ("/ok", RoutePolicy::minor_delay_success()),
        ("/acceptable", RoutePolicy::mostly_success()),
        ("/veryslow", RoutePolicy::major_delay_success()),
        ("/err", RoutePolicy::delayed_failure()),
        ("/bad", RoutePolicy::delayed_success_marked_bad()),
        ("/notfound", RoutePolicy::not_found()),
    ]
}
