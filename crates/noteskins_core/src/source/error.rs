use crate::model::note::{FolderId, NoteId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type SourceResult<T> = Result<T, SourceError>;

/// Failure reported by a notes source.
#[derive(Debug)]
pub enum SourceError {
    /// The source cannot serve reads right now (offline, not loaded).
    Unavailable(String),
    /// Requested folder does not exist.
    FolderNotFound(FolderId),
    /// Requested note does not exist.
    NoteNotFound(NoteId),
    /// Folder or note name is blank after trim.
    InvalidName,
    /// Source data violates a record invariant.
    InvalidData(String),
    /// Snapshot file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Snapshot text is not valid JSON for the expected shape.
    Json(serde_json::Error),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "notes source unavailable: {reason}"),
            Self::FolderNotFound(id) => write!(f, "folder not found: {id}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidName => write!(f, "name must not be blank"),
            Self::InvalidData(message) => write!(f, "invalid notes data: {message}"),
            Self::Io { path, source } => {
                write!(f, "failed to read notes snapshot `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid notes snapshot: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
