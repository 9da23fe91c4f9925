//! Result publishing for finished volume textures.
//!
//! Finished texel buffers are registered in a content-addressed library,
//! optionally written to durable texture files, and optionally journaled so
//! a registration can be undone. The builder hands buffers over and never
//! learns what happens to them.
//!
//! # Invariants
//! - Texture ids are content-addressed; identical buffers dedup to one entry.
//! - Durable files are schema-versioned and integrity-checked, fail-closed.
//! - When the undo capability is present, every registration is reversible.

mod file;
mod journal;
mod library;
mod publisher;

pub use file::{load_texture, save_texture};
pub use journal::{PublishCommand, UndoJournal};
pub use library::{TextureId, TextureLibrary, TextureRecord};
pub use publisher::Publisher;

/// Errors from publishing operations.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CBOR serialization error: {0}")]
    CborEncode(String),
    #[error("CBOR deserialization error: {0}")]
    CborDecode(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },
    #[error("schema version mismatch: file has v{file_version}, expected v{expected_version}")]
    SchemaMismatch {
        file_version: u32,
        expected_version: u32,
    },
    #[error("texture not found: {0:?}")]
    NotFound(TextureId),
}

pub fn crate_info() -> &'static str {
    "voxtex-publish v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("publish"));
    }
}
