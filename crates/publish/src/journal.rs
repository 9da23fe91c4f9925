use voxtex_common::TexelBuffer;

use crate::library::{TextureId, TextureLibrary};
use crate::PublishError;

/// A publishing command that can be applied to the library and reversed.
///
/// Each command carries the full record so its inverse can restore it.
#[derive(Debug, Clone)]
pub enum PublishCommand {
    /// Register a texture. Undo = unregister it.
    Register {
        id: TextureId,
        name: String,
        texture: TexelBuffer,
    },
    /// Unregister a texture. Undo = re-register it with its data.
    Unregister {
        id: TextureId,
        name: String,
        texture: TexelBuffer,
    },
}

impl PublishCommand {
    /// Produce the inverse command (for undo).
    pub fn inverse(&self) -> Self {
        match self {
            Self::Register { id, name, texture } => Self::Unregister {
                id: *id,
                name: name.clone(),
                texture: texture.clone(),
            },
            Self::Unregister { id, name, texture } => Self::Register {
                id: *id,
                name: name.clone(),
                texture: texture.clone(),
            },
        }
    }
}

/// Undo/redo journal over texture publications.
///
/// The publisher routes registrations through this journal when the host
/// grants the undo capability; hosts without it skip the journal entirely.
#[derive(Debug, Default)]
pub struct UndoJournal {
    undo_stack: Vec<PublishCommand>,
    redo_stack: Vec<PublishCommand>,
}

impl UndoJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture in the library and journal the operation.
    pub fn register(
        &mut self,
        library: &mut TextureLibrary,
        name: impl Into<String>,
        texture: TexelBuffer,
    ) -> TextureId {
        let name = name.into();
        let id = library.register(name.clone(), texture.clone());
        self.undo_stack.push(PublishCommand::Register {
            id,
            name,
            texture,
        });
        self.redo_stack.clear();
        id
    }

    /// Unregister a texture and journal the operation.
    pub fn unregister(
        &mut self,
        library: &mut TextureLibrary,
        id: TextureId,
    ) -> Result<(), PublishError> {
        let record = library.unregister(id).ok_or(PublishError::NotFound(id))?;
        self.undo_stack.push(PublishCommand::Unregister {
            id,
            name: record.name,
            texture: record.texture,
        });
        self.redo_stack.clear();
        Ok(())
    }

    /// Undo the last publication op. Returns true if one was undone.
    pub fn undo(&mut self, library: &mut TextureLibrary) -> bool {
        let Some(cmd) = self.undo_stack.pop() else {
            return false;
        };
        apply_command(library, &cmd.inverse());
        self.redo_stack.push(cmd);
        true
    }

    /// Redo the last undone op. Returns true if one was redone.
    pub fn redo(&mut self, library: &mut TextureLibrary) -> bool {
        let Some(cmd) = self.redo_stack.pop() else {
            return false;
        };
        apply_command(library, &cmd);
        self.undo_stack.push(cmd);
        true
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

fn apply_command(library: &mut TextureLibrary, cmd: &PublishCommand) {
    match cmd {
        PublishCommand::Register { name, texture, .. } => {
            library.register(name.clone(), texture.clone());
        }
        PublishCommand::Unregister { id, .. } => {
            library.unregister(*id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxtex_common::{Rgba, VolumeDims};

    fn sample_texture() -> TexelBuffer {
        let mut texture = TexelBuffer::new(VolumeDims::new(2, 2, 2));
        texture.set(0, 0, 0, Rgba::new(1.0, 1.0, 0.0, 1.0));
        texture
    }

    #[test]
    fn register_and_undo() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();

        let id = journal.register(&mut library, "t", sample_texture());
        assert_eq!(library.len(), 1);

        assert!(journal.undo(&mut library));
        assert!(library.get(id).is_none());
        assert!(library.is_empty());
    }

    #[test]
    fn register_undo_redo() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();

        let id = journal.register(&mut library, "t", sample_texture());
        journal.undo(&mut library);
        assert!(library.is_empty());

        journal.redo(&mut library);
        assert!(library.get(id).is_some());
    }

    #[test]
    fn unregister_and_undo_restores_record() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();

        let id = journal.register(&mut library, "kept", sample_texture());
        journal.unregister(&mut library, id).unwrap();
        assert!(library.is_empty());

        journal.undo(&mut library);
        assert_eq!(library.get(id).unwrap().name, "kept");
    }

    #[test]
    fn redo_cleared_on_new_op() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();

        journal.register(&mut library, "a", sample_texture());
        journal.undo(&mut library);
        assert!(journal.can_redo());

        journal.register(&mut library, "b", sample_texture());
        assert!(!journal.can_redo());
    }

    #[test]
    fn undo_empty_returns_false() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();
        assert!(!journal.undo(&mut library));
        assert!(!journal.redo(&mut library));
    }

    #[test]
    fn unregister_missing_is_error() {
        let mut library = TextureLibrary::new();
        let mut journal = UndoJournal::new();
        let result = journal.unregister(&mut library, TextureId(42));
        assert!(matches!(result, Err(PublishError::NotFound(_))));
    }
}
