use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use voxtex_common::{Rgba, VolumeDims, VoxelSample};

use crate::cursor::{SampleCursor, SampleSource};

/// Sparse voxel storage with fixed extents.
///
/// Cells are keyed by `(z, y, x)` in a BTreeMap so iteration order is stable
/// across platforms and matches the texel buffer's row-major layout (x
/// fastest). The extents are set at construction; out-of-extent writes are
/// rejected rather than growing the volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoxelStore {
    extent: VolumeDims,
    cells: BTreeMap<(u32, u32, u32), Rgba>,
}

impl VoxelStore {
    /// Create an empty store covering the given extents.
    pub fn new(extent: VolumeDims) -> Self {
        Self {
            extent,
            cells: BTreeMap::new(),
        }
    }

    /// Extents this store was created with.
    pub fn extent(&self) -> VolumeDims {
        self.extent
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Set a voxel color. A color without material alpha clears the cell
    /// instead, so stored data can never forge an early end-of-stream marker.
    /// Returns false if the coordinate lies outside the extents.
    pub fn set(&mut self, x: u32, y: u32, z: u32, color: Rgba) -> bool {
        if !self.extent.contains(x, y, z) {
            tracing::warn!(x, y, z, "voxel write outside extents ignored");
            return false;
        }
        if color.is_material() {
            self.cells.insert((z, y, x), color);
        } else {
            self.cells.remove(&(z, y, x));
        }
        true
    }

    /// Read a voxel color, if the cell is populated.
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<Rgba> {
        self.cells.get(&(z, y, x)).copied()
    }

    /// Clear a single cell. Returns the color it held.
    pub fn clear_voxel(&mut self, x: u32, y: u32, z: u32) -> Option<Rgba> {
        self.cells.remove(&(z, y, x))
    }

    /// Remove all voxels, keeping the extents.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate populated cells in stable stream order.
    pub fn iter(&self) -> impl Iterator<Item = VoxelSample> + '_ {
        self.cells
            .iter()
            .map(|(&(z, y, x), &color)| VoxelSample::new(x, y, z, color))
    }
}

impl SampleSource for VoxelStore {
    fn sample_count(&self) -> usize {
        self.cells.len()
    }

    fn extent(&self) -> VolumeDims {
        self.extent
    }

    fn open_cursor(&self) -> SampleCursor {
        SampleCursor::over(self.iter().collect())
    }
}
