//! Durable texture file storage.
//!
//! A texture file is zstd-compressed CBOR: an envelope carrying the schema
//! version and the SHA-256 of the encoded texture payload, then the payload
//! itself. Loading verifies both and fails closed.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::{Read, Write};
use std::path::Path;
use voxtex_common::TexelBuffer;

use crate::PublishError;

const TEXTURE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct TextureEnvelope {
    schema_version: u32,
    payload_sha256: String,
    payload: Vec<u8>,
}

/// Write a finished texture to a durable file.
pub fn save_texture(path: impl AsRef<Path>, texture: &TexelBuffer) -> Result<(), PublishError> {
    let payload = cbor_serialize(texture)?;
    let envelope = TextureEnvelope {
        schema_version: TEXTURE_SCHEMA_VERSION,
        payload_sha256: sha256_hex(&payload),
        payload,
    };
    let encoded = cbor_serialize(&envelope)?;
    let compressed = zstd_compress(&encoded)?;
    std::fs::write(path.as_ref(), &compressed)?;
    tracing::info!(
        path = %path.as_ref().display(),
        dims = ?texture.dims(),
        bytes = compressed.len(),
        "texture file written"
    );
    Ok(())
}

/// Load a texture file, verifying schema version and payload integrity.
pub fn load_texture(path: impl AsRef<Path>) -> Result<TexelBuffer, PublishError> {
    let compressed = std::fs::read(path.as_ref())?;
    let encoded = zstd_decompress(&compressed)?;
    let envelope: TextureEnvelope = cbor_deserialize(&encoded)?;

    if envelope.schema_version != TEXTURE_SCHEMA_VERSION {
        return Err(PublishError::SchemaMismatch {
            file_version: envelope.schema_version,
            expected_version: TEXTURE_SCHEMA_VERSION,
        });
    }
    let actual = sha256_hex(&envelope.payload);
    if actual != envelope.payload_sha256 {
        return Err(PublishError::IntegrityMismatch {
            expected: envelope.payload_sha256,
            actual,
        });
    }
    cbor_deserialize(&envelope.payload)
}

fn cbor_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, PublishError> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| PublishError::CborEncode(e.to_string()))?;
    Ok(buf)
}

fn cbor_deserialize<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, PublishError> {
    ciborium::from_reader(data).map_err(|e| PublishError::CborDecode(e.to_string()))
}

fn zstd_compress(data: &[u8]) -> Result<Vec<u8>, PublishError> {
    let mut encoder = zstd::Encoder::new(Vec::new(), 3)?;
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn zstd_decompress(data: &[u8]) -> Result<Vec<u8>, PublishError> {
    let mut decoder = zstd::Decoder::new(data)?;
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf)?;
    Ok(buf)
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtex_common::{Rgba, VolumeDims};

    fn sample_texture() -> TexelBuffer {
        let mut texture = TexelBuffer::new(VolumeDims::new(4, 4, 4));
        texture.set(1, 2, 3, Rgba::new(0.25, 0.5, 0.75, 1.0));
        texture
    }

    #[test]
    fn save_and_load_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("volume.vxt");
        let texture = sample_texture();

        save_texture(&path, &texture).unwrap();
        let loaded = load_texture(&path).unwrap();
        assert_eq!(loaded, texture);
    }

    #[test]
    fn corruption_fails_closed() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("volume.vxt");
        save_texture(&path, &sample_texture()).unwrap();

        // Flip a byte somewhere in the middle of the file.
        let mut data = std::fs::read(&path).unwrap();
        let mid = data.len() / 2;
        data[mid] ^= 0xff;
        std::fs::write(&path, &data).unwrap();

        assert!(load_texture(&path).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = load_texture(tmp.path().join("absent.vxt"));
        assert!(matches!(result, Err(PublishError::Io(_))));
    }
}
