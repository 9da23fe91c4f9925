//! Incremental volume texture building: dimension quantization, budgeted
//! per-tick sample iteration, resumable progress.
//!
//! # Invariants
//! - One `advance` call consumes at most the configured batch of samples;
//!   the caller's frame never blocks on a full rebuild.
//! - Progress is monotonically non-decreasing within a session and reaches
//!   exactly 1 only when the stream sentinel has been consumed.
//! - Texels are indexed by the allocated dimensions, never the requested ones.

mod build;
mod quantize;

pub use build::{BuildConfig, BuildStats, TextureBuilder};
pub use quantize::quantize;

pub fn crate_info() -> &'static str {
    "voxtex-builder v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("builder"));
    }
}
