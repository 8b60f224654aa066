//! JSON snapshot import into `MemoryNotesSource`.
//!
//! Snapshot shape:
//!
//! ```json
//! { "folders": [{ "id": "…", "name": "Work", "created_at": 0, "updated_at": 0 }],
//!   "notes":   [{ "id": "…", "content": "# Hi", "created_at": 0, "updated_at": 0 }] }
//! ```

use super::memory::MemoryNotesSource;
use super::{SourceError, SourceResult};
use crate::model::note::{Note, NoteFolder};
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized export of a notes store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesSnapshot {
    #[serde(default)]
    pub folders: Vec<NoteFolder>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl MemoryNotesSource {
    /// Builds a source from an already-parsed snapshot.
    ///
    /// # Errors
    /// - `InvalidData` for duplicate ids or dangling folder parents.
    /// - `FolderNotFound` for notes placed in an unknown folder.
    /// - `InvalidName` for blank folder names.
    pub fn from_snapshot(snapshot: NotesSnapshot) -> SourceResult<Self> {
        let mut source = Self::new();
        for folder in snapshot.folders {
            source.insert_folder(folder)?;
        }
        source.check_folder_parents()?;
        for note in snapshot.notes {
            source.insert_note(note)?;
        }
        Ok(source)
    }

    /// Parses snapshot JSON text.
    pub fn from_json_str(text: &str) -> SourceResult<Self> {
        let snapshot: NotesSnapshot = serde_json::from_str(text)?;
        Self::from_snapshot(snapshot)
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Side effects
    /// - Emits `snapshot_load` logging events with record counts only.
    pub fn from_json_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        });

        match text.and_then(|text| Self::from_json_str(&text)) {
            Ok(source) => {
                info!(
                    "event=snapshot_load module=source status=ok folders={} notes={}",
                    source.folder_count(),
                    source.note_count()
                );
                Ok(source)
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=source status=error error={}",
                    err
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::source::memory::MemoryNotesSource;
    use crate::source::SourceError;

    #[test]
    fn rejects_note_in_unknown_folder() {
        let text = r#"{
            "notes": [{
                "id": "7d0f7c4e-1f47-4b43-9bd3-5d7f3f0b8f01",
                "content": "orphan",
                "folder_id": "a6b1a7f4-7f5e-4d8c-9a49-3ac8a9a1d0aa",
                "created_at": 1,
                "updated_at": 1
            }]
        }"#;
        let err = MemoryNotesSource::from_json_str(text).expect_err("dangling folder");
        assert!(matches!(err, SourceError::FolderNotFound(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MemoryNotesSource::from_json_str("{ \"notes\": [").expect_err("bad json");
        assert!(matches!(err, SourceError::Json(_)));
    }
}
