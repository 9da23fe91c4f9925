//! Build orchestration: one session from first tick to publication.
//!
//! # Invariants
//! - Session configuration is captured at construction and never mutated
//!   mid-session.
//! - The completion hook fires exactly once, at the tick where progress
//!   first reaches 1, whether or not a texture was produced.
//! - Publication failures are the host's concern; the session still
//!   completes and the builder never observes them.

mod session;

pub use session::{BuildOutcome, BuildPipeline, PipelineConfig, SessionId};

pub fn crate_info() -> &'static str {
    "voxtex-pipeline v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("pipeline"));
    }
}
