//! Voxel storage and the sample stream contract.
//!
//! # Invariants
//! - Samples are produced in a stable order (BTreeMap key order), so a cursor
//!   opened twice over unchanged storage yields the same sequence.
//! - Stored voxels always carry material alpha; the sentinel can only come
//!   from stream exhaustion, never from stored data.

mod cursor;
mod voxels;

pub use cursor::{SampleCursor, SampleSource};
pub use voxels::VoxelStore;

pub fn crate_info() -> &'static str {
    "voxtex-store v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("store"));
    }
}
