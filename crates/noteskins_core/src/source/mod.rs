//! Notes data source contract consumed by the page composer.
//!
//! # Responsibility
//! - Define the read-mostly interface the presentation layer depends on.
//! - Normalize list queries the same way for every implementation.
//!
//! # Invariants
//! - Note lists are ordered `is_pinned DESC, updated_at DESC, id ASC`.
//! - Trashed notes appear only in the trash view and are never counted.
//! - Folder lists are ordered `sort_order ASC, id ASC`.
//! - Loading/failure is reported through `status()`, not by panicking.

mod error;
pub mod memory;
pub mod snapshot;

pub use error::{SourceError, SourceResult};

use crate::model::note::{FolderId, Note, NoteFolder, NoteId};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const NOTES_DEFAULT_LIMIT: u32 = 10;
const NOTES_LIMIT_MAX: u32 = 50;

/// Readiness reported by a notes source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceStatus {
    /// Data is still being fetched.
    Loading,
    /// Reads can be served.
    Ready,
    /// The source gave up; the message is user-presentable.
    Failed(String),
}

/// Which slice of the notebook a list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NoteListView {
    /// Every note not in the trash.
    #[default]
    All,
    /// Favorite notes not in the trash.
    Favorites,
    /// Trashed notes only.
    Trash,
}

impl NoteListView {
    pub const ALL: [NoteListView; 3] = [Self::All, Self::Favorites, Self::Trash];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Favorites => "favorites",
            Self::Trash => "trash",
        }
    }

    /// Whether `note` belongs to this view.
    pub fn includes(self, note: &Note) -> bool {
        match self {
            Self::All => !note.is_trashed,
            Self::Favorites => note.is_favorite && !note.is_trashed,
            Self::Trash => note.is_trashed,
        }
    }
}

impl Display for NoteListView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteListView {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == normalized)
            .ok_or_else(|| format!("unknown view `{}`; expected all|favorites|trash", value.trim()))
    }
}

/// Query options for note list reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteQuery {
    pub view: NoteListView,
    /// Only notes directly inside this folder. `None` lists every note.
    pub folder_id: Option<FolderId>,
    /// Optional single-tag exact match filter (case-insensitive).
    pub tag: Option<String>,
    /// Case-insensitive substring over title and content.
    pub search: Option<String>,
    /// Maximum rows to return. Defaults to 10 and clamps to 50.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Read interface over the external notes store.
pub trait NotesSource {
    /// Current readiness. Sources that are always ready keep the default.
    fn status(&self) -> SourceStatus {
        SourceStatus::Ready
    }

    /// Lists every folder.
    fn folders(&self) -> SourceResult<Vec<NoteFolder>>;

    /// Lists notes matching `query`.
    fn notes(&self, query: &NoteQuery) -> SourceResult<Vec<Note>>;

    /// Gets one note by id.
    fn note(&self, id: NoteId) -> SourceResult<Option<Note>>;

    /// Non-trashed notes directly inside each folder. Folders without notes
    /// may be absent.
    fn folder_note_counts(&self) -> SourceResult<BTreeMap<FolderId, usize>>;
}

impl<S: NotesSource + ?Sized> NotesSource for &S {
    fn status(&self) -> SourceStatus {
        (**self).status()
    }

    fn folders(&self) -> SourceResult<Vec<NoteFolder>> {
        (**self).folders()
    }

    fn notes(&self, query: &NoteQuery) -> SourceResult<Vec<Note>> {
        (**self).notes(query)
    }

    fn note(&self, id: NoteId) -> SourceResult<Option<Note>> {
        (**self).note(id)
    }

    fn folder_note_counts(&self) -> SourceResult<BTreeMap<FolderId, usize>> {
        (**self).folder_note_counts()
    }
}

/// Normalizes list limit according to the notes list contract.
pub fn normalize_note_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => NOTES_DEFAULT_LIMIT,
        Some(value) => value.min(NOTES_LIMIT_MAX),
    }
}

/// Normalizes one tag value. Blank tags normalize to `None`.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Normalizes a search needle to lowercase. Blank input normalizes to `None`.
pub fn normalize_search(search: &str) -> Option<String> {
    let trimmed = search.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Ordering used for every note list.
pub fn note_list_order(left: &Note, right: &Note) -> Ordering {
    right
        .is_pinned
        .cmp(&left.is_pinned)
        .then_with(|| right.updated_at.cmp(&left.updated_at))
        .then_with(|| left.id.cmp(&right.id))
}

/// Ordering used for every folder list.
pub fn folder_order(left: &NoteFolder, right: &NoteFolder) -> Ordering {
    left.sort_order
        .cmp(&right.sort_order)
        .then_with(|| left.id.cmp(&right.id))
}
