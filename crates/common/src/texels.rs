use serde::{Deserialize, Serialize};

use crate::types::{Rgba, VolumeDims};

/// A dense, flat RGBA buffer covering a whole volume.
///
/// Texels are laid out row-major with x fastest, then y, then z:
/// `offset = x + (y + z * height) * width`. The buffer always indexes by the
/// dimensions it was allocated with, which may be larger than the extents of
/// the volume that filled it (power-of-two rounding).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TexelBuffer {
    dims: VolumeDims,
    texels: Vec<Rgba>,
}

impl TexelBuffer {
    /// Allocate a zero-initialized (fully transparent) buffer.
    pub fn new(dims: VolumeDims) -> Self {
        Self {
            dims,
            texels: vec![Rgba::TRANSPARENT; dims.volume()],
        }
    }

    /// Dimensions this buffer was allocated with.
    pub fn dims(&self) -> VolumeDims {
        self.dims
    }

    /// Total texel count (`width * height * depth`).
    pub fn len(&self) -> usize {
        self.texels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    /// Flat offset for a coordinate, using the allocated width and height.
    pub fn offset(&self, x: u32, y: u32, z: u32) -> usize {
        (x as usize) + ((y as usize) + (z as usize) * self.dims.height as usize)
            * self.dims.width as usize
    }

    /// Write a texel. Returns false if the coordinate is out of bounds,
    /// leaving the buffer untouched.
    pub fn set(&mut self, x: u32, y: u32, z: u32, color: Rgba) -> bool {
        if !self.dims.contains(x, y, z) {
            return false;
        }
        let offset = self.offset(x, y, z);
        self.texels[offset] = color;
        true
    }

    /// Read a texel, if the coordinate is in bounds.
    pub fn get(&self, x: u32, y: u32, z: u32) -> Option<Rgba> {
        if !self.dims.contains(x, y, z) {
            return None;
        }
        Some(self.texels[self.offset(x, y, z)])
    }

    /// Raw texel slice in layout order, for upload or encoding.
    pub fn texels(&self) -> &[Rgba] {
        &self.texels
    }

    /// Number of texels that hold material data (alpha above zero).
    pub fn populated(&self) -> usize {
        self.texels.iter().filter(|t| t.is_material()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent() {
        let buf = TexelBuffer::new(VolumeDims::new(2, 2, 2));
        assert_eq!(buf.len(), 8);
        assert!(buf.texels().iter().all(|t| *t == Rgba::TRANSPARENT));
        assert_eq!(buf.populated(), 0);
    }

    #[test]
    fn offset_is_row_major_x_fastest() {
        let buf = TexelBuffer::new(VolumeDims::new(4, 3, 2));
        assert_eq!(buf.offset(0, 0, 0), 0);
        assert_eq!(buf.offset(1, 0, 0), 1);
        assert_eq!(buf.offset(0, 1, 0), 4);
        assert_eq!(buf.offset(0, 0, 1), 12);
        assert_eq!(buf.offset(3, 2, 1), 3 + (2 + 3) * 4);
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut buf = TexelBuffer::new(VolumeDims::new(4, 4, 4));
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        assert!(buf.set(3, 2, 1, red));
        assert_eq!(buf.get(3, 2, 1), Some(red));
        assert_eq!(buf.populated(), 1);
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut buf = TexelBuffer::new(VolumeDims::new(2, 2, 2));
        assert!(!buf.set(2, 0, 0, Rgba::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(buf.get(0, 2, 0), None);
        assert_eq!(buf.populated(), 0);
    }
}
