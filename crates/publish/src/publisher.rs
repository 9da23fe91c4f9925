use std::path::Path;
use voxtex_common::TexelBuffer;

use crate::file;
use crate::journal::UndoJournal;
use crate::library::{TextureId, TextureLibrary};
use crate::PublishError;

/// Consumes finished texel buffers on behalf of the host.
///
/// Registration always lands in the library; the undo journal is a
/// capability the host either grants or withholds at construction. The
/// builder that produced the buffer never sees any of this.
pub struct Publisher {
    library: TextureLibrary,
    journal: Option<UndoJournal>,
}

impl Publisher {
    /// A publisher without undo bookkeeping (runtime hosts).
    pub fn new() -> Self {
        Self {
            library: TextureLibrary::new(),
            journal: None,
        }
    }

    /// A publisher with the undo capability (editor hosts).
    pub fn with_undo() -> Self {
        Self {
            library: TextureLibrary::new(),
            journal: Some(UndoJournal::new()),
        }
    }

    pub fn library(&self) -> &TextureLibrary {
        &self.library
    }

    pub fn has_undo(&self) -> bool {
        self.journal.is_some()
    }

    /// Publish a finished texture: write the durable file when a destination
    /// is configured, then register (journaled when the capability exists).
    ///
    /// A file write failure surfaces to the host before anything is
    /// registered; the library is never left pointing at a failed file.
    pub fn publish(
        &mut self,
        name: impl Into<String>,
        texture: TexelBuffer,
        destination: Option<&Path>,
    ) -> Result<TextureId, PublishError> {
        let name = name.into();
        if let Some(path) = destination {
            file::save_texture(path, &texture)?;
        }
        let id = match self.journal.as_mut() {
            Some(journal) => journal.register(&mut self.library, name, texture),
            None => self.library.register(name, texture),
        };
        Ok(id)
    }

    /// Undo the last publication, if the capability exists and there is one.
    pub fn undo_last(&mut self) -> bool {
        match self.journal.as_mut() {
            Some(journal) => journal.undo(&mut self.library),
            None => false,
        }
    }

    /// Redo the last undone publication.
    pub fn redo_last(&mut self) -> bool {
        match self.journal.as_mut() {
            Some(journal) => journal.redo(&mut self.library),
            None => false,
        }
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtex_common::{Rgba, VolumeDims};

    fn sample_texture() -> TexelBuffer {
        let mut texture = TexelBuffer::new(VolumeDims::new(2, 2, 1));
        texture.set(1, 0, 0, Rgba::new(0.0, 1.0, 0.0, 1.0));
        texture
    }

    #[test]
    fn publish_registers() {
        let mut publisher = Publisher::new();
        let id = publisher
            .publish("demo", sample_texture(), None)
            .unwrap();
        assert!(publisher.library().get(id).is_some());
    }

    #[test]
    fn publish_writes_destination_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("out.vxt");

        let mut publisher = Publisher::new();
        publisher
            .publish("demo", sample_texture(), Some(&path))
            .unwrap();

        let loaded = file::load_texture(&path).unwrap();
        assert_eq!(loaded, sample_texture());
    }

    #[test]
    fn failed_file_write_registers_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let bad_path = tmp.path().join("no_such_dir").join("out.vxt");

        let mut publisher = Publisher::new();
        let result = publisher.publish("demo", sample_texture(), Some(&bad_path));
        assert!(result.is_err());
        assert!(publisher.library().is_empty());
    }

    #[test]
    fn undo_capability_reverses_publication() {
        let mut publisher = Publisher::with_undo();
        let id = publisher
            .publish("undoable", sample_texture(), None)
            .unwrap();
        assert!(publisher.undo_last());
        assert!(publisher.library().get(id).is_none());
        assert!(publisher.redo_last());
        assert!(publisher.library().get(id).is_some());
    }

    #[test]
    fn without_capability_undo_is_noop() {
        let mut publisher = Publisher::new();
        publisher.publish("fixed", sample_texture(), None).unwrap();
        assert!(!publisher.has_undo());
        assert!(!publisher.undo_last());
        assert_eq!(publisher.library().len(), 1);
    }
}
