use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::Path;
use voxtex_common::TexelBuffer;

use crate::PublishError;

/// Content-addressed texture ID computed from the buffer data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(pub u64);

/// A registered texture with its display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureRecord {
    pub name: String,
    pub texture: TexelBuffer,
}

/// Content-addressed registry of finished volume textures.
///
/// Textures are indexed by a hash of their dimensions and texel data, so
/// registering the same buffer twice yields the same id and one entry. The
/// registry can be persisted to disk as JSON for inspection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextureLibrary {
    textures: BTreeMap<TextureId, TextureRecord>,
}

impl TextureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a finished texture and return its content-addressed id.
    pub fn register(&mut self, name: impl Into<String>, texture: TexelBuffer) -> TextureId {
        let id = content_hash(&texture);
        let name = name.into();
        tracing::debug!(?id, name = %name, dims = ?texture.dims(), "texture registered");
        self.textures.insert(id, TextureRecord { name, texture });
        id
    }

    /// Remove a texture. Returns the record if it existed.
    pub fn unregister(&mut self, id: TextureId) -> Option<TextureRecord> {
        self.textures.remove(&id)
    }

    /// Get a record by id.
    pub fn get(&self, id: TextureId) -> Option<&TextureRecord> {
        self.textures.get(&id)
    }

    /// Get a texture buffer by id.
    pub fn get_texture(&self, id: TextureId) -> Option<&TexelBuffer> {
        self.textures.get(&id).map(|r| &r.texture)
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// All registered ids in sorted order.
    pub fn ids(&self) -> Vec<TextureId> {
        self.textures.keys().copied().collect()
    }

    /// Save the registry to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PublishError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PublishError> {
        let file = std::fs::File::open(path)?;
        let library: Self = serde_json::from_reader(file)?;
        Ok(library)
    }
}

/// Hash dims and texels into a content-addressed id (truncated SHA-256).
pub(crate) fn content_hash(texture: &TexelBuffer) -> TextureId {
    let dims = texture.dims();
    let mut hasher = Sha256::new();
    hasher.update(dims.width.to_le_bytes());
    hasher.update(dims.height.to_le_bytes());
    hasher.update(dims.depth.to_le_bytes());
    for texel in texture.texels() {
        hasher.update(texel.r.to_le_bytes());
        hasher.update(texel.g.to_le_bytes());
        hasher.update(texel.b.to_le_bytes());
        hasher.update(texel.a.to_le_bytes());
    }
    let result = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&result[..8]);
    TextureId(u64::from_le_bytes(bytes))
}
