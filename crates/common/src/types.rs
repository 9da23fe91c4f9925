use glam::Vec4;
use serde::{Deserialize, Serialize};

/// An RGBA color with float components.
///
/// An alpha of zero or below doubles as the stream termination sentinel
/// (inherited stream convention), so material voxels always carry `a > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black: the zero value texel buffers start from.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Whether this color counts as material data under the stream convention.
    pub fn is_material(&self) -> bool {
        self.a > 0.0
    }
}

impl From<Rgba> for Vec4 {
    fn from(c: Rgba) -> Self {
        Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<Vec4> for Rgba {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

/// Extents of a volume in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VolumeDims {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl VolumeDims {
    pub const fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Total number of cells.
    pub fn volume(&self) -> usize {
        self.width as usize * self.height as usize * self.depth as usize
    }

    /// A volume with a zero axis holds no cells and cannot be allocated.
    pub fn has_zero_axis(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }

    /// Whether a coordinate falls inside these extents.
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.width && y < self.height && z < self.depth
    }
}

/// One colored cell drawn from a sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoxelSample {
    pub x: u32,
    pub y: u32,
    pub z: u32,
    pub color: Rgba,
}

impl VoxelSample {
    pub const fn new(x: u32, y: u32, z: u32, color: Rgba) -> Self {
        Self { x, y, z, color }
    }

    /// The end-of-stream marker: transparent, positioned at the origin.
    pub const fn sentinel() -> Self {
        Self::new(0, 0, 0, Rgba::TRANSPARENT)
    }

    pub fn is_sentinel(&self) -> bool {
        !self.color.is_material()
    }
}
