//! Shared data model for the voxtex pipeline.
//!
//! # Invariants
//! - A color with `a <= 0` is the stream termination sentinel, never material data.
//! - Texel buffers are indexed by their own allocated dimensions, row-major,
//!   x fastest, then y, then z.

mod texels;
mod types;

pub use texels::TexelBuffer;
pub use types::{Rgba, VolumeDims, VoxelSample};

pub fn crate_info() -> &'static str {
    "voxtex-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
