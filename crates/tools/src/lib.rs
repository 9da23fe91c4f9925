//! Developer tooling: read-only inspectors for builds and voxel stores.
//!
//! # Invariants
//! - Inspection never mutates the inspected state.

mod inspector;

pub use inspector::{BuildInspector, BuildSummary, StoreSummary};

pub fn crate_info() -> &'static str {
    "voxtex-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
