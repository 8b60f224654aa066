//! In-process notes source.
//!
//! # Responsibility
//! - Serve folders/notes from memory for the CLI, demos and tests.
//! - Offer the minimal write helpers needed to build fixtures.
//!
//! # Invariants
//! - Every note `folder_id` and folder `parent_id` points to a known folder.
//! - Tags are stored lowercase and deduplicated.
//! - No record has `updated_at` earlier than `created_at`.
//! - `status()` is whatever was last set; reads still work in every status so
//!   callers decide how to present a non-ready source.

use super::{
    folder_order, normalize_note_limit, normalize_search, normalize_tag, note_list_order,
    NoteQuery, NotesSource, SourceError, SourceResult, SourceStatus,
};
use crate::model::note::{now_millis, FolderId, Note, NoteFolder, NoteId};
use std::collections::{BTreeMap, BTreeSet};

/// Notes source backed by in-memory maps.
#[derive(Debug, Clone)]
pub struct MemoryNotesSource {
    folders: BTreeMap<FolderId, NoteFolder>,
    notes: BTreeMap<NoteId, Note>,
    status: SourceStatus,
}

impl Default for MemoryNotesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNotesSource {
    /// Creates an empty, ready source.
    pub fn new() -> Self {
        Self {
            folders: BTreeMap::new(),
            notes: BTreeMap::new(),
            status: SourceStatus::Ready,
        }
    }

    /// Overrides the reported readiness.
    pub fn set_status(&mut self, status: SourceStatus) {
        self.status = status;
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Creates one folder under an optional parent, appended after its siblings.
    pub fn create_folder(
        &mut self,
        parent_id: Option<FolderId>,
        name: impl Into<String>,
    ) -> SourceResult<NoteFolder> {
        let name = normalize_name(name.into())?;
        if let Some(parent_id) = parent_id {
            self.ensure_folder_exists(parent_id)?;
        }
        let sort_order = self
            .folders
            .values()
            .filter(|folder| folder.parent_id == parent_id)
            .map(|folder| folder.sort_order + 1)
            .max()
            .unwrap_or(0);

        let folder = NoteFolder::new(parent_id, name, sort_order);
        self.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    /// Creates one note with an optional explicit title.
    pub fn create_note(
        &mut self,
        folder_id: Option<FolderId>,
        title: Option<&str>,
        content: impl Into<String>,
    ) -> SourceResult<Note> {
        if let Some(folder_id) = folder_id {
            self.ensure_folder_exists(folder_id)?;
        }
        let mut note = Note::new(content);
        note.folder_id = folder_id;
        note.title = title
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        self.notes.insert(note.id, note.clone());
        Ok(note)
    }

    /// Replaces note content and bumps `updated_at`.
    pub fn update_note(&mut self, id: NoteId, content: impl Into<String>) -> SourceResult<Note> {
        let note = self.notes.get_mut(&id).ok_or(SourceError::NoteNotFound(id))?;
        note.content = content.into();
        note.updated_at = now_millis().max(note.updated_at);
        Ok(note.clone())
    }

    /// Replaces the full tag set for one note.
    pub fn set_note_tags(&mut self, id: NoteId, tags: &[&str]) -> SourceResult<Note> {
        let note = self.notes.get_mut(&id).ok_or(SourceError::NoteNotFound(id))?;
        let normalized = tags
            .iter()
            .filter_map(|tag| normalize_tag(tag))
            .collect::<BTreeSet<_>>();
        note.tags = normalized.into_iter().collect();
        Ok(note.clone())
    }

    /// Pins or unpins one note. Pinned notes lead every list.
    pub fn set_pinned(&mut self, id: NoteId, pinned: bool) -> SourceResult<Note> {
        self.update_flags(id, |note| note.is_pinned = pinned)
    }

    pub fn set_favorite(&mut self, id: NoteId, favorite: bool) -> SourceResult<Note> {
        self.update_flags(id, |note| note.is_favorite = favorite)
    }

    /// Moves one note to the trash.
    pub fn trash_note(&mut self, id: NoteId) -> SourceResult<Note> {
        self.update_flags(id, |note| note.is_trashed = true)
    }

    /// Brings one note back from the trash.
    pub fn restore_note(&mut self, id: NoteId) -> SourceResult<Note> {
        self.update_flags(id, |note| note.is_trashed = false)
    }

    fn update_flags(&mut self, id: NoteId, apply: impl FnOnce(&mut Note)) -> SourceResult<Note> {
        let note = self.notes.get_mut(&id).ok_or(SourceError::NoteNotFound(id))?;
        apply(note);
        note.updated_at = now_millis().max(note.updated_at);
        Ok(note.clone())
    }

    /// Inserts a folder record as-is after reference checks.
    pub fn insert_folder(&mut self, folder: NoteFolder) -> SourceResult<()> {
        if folder.name.trim().is_empty() {
            return Err(SourceError::InvalidName);
        }
        if folder.updated_at < folder.created_at {
            return Err(SourceError::InvalidData(format!(
                "folder {} updated_at is earlier than created_at",
                folder.id
            )));
        }
        if self.folders.contains_key(&folder.id) {
            return Err(SourceError::InvalidData(format!(
                "duplicate folder id {}",
                folder.id
            )));
        }
        self.folders.insert(folder.id, folder);
        Ok(())
    }

    /// Inserts a note record as-is after reference checks.
    pub fn insert_note(&mut self, mut note: Note) -> SourceResult<()> {
        if self.notes.contains_key(&note.id) {
            return Err(SourceError::InvalidData(format!(
                "duplicate note id {}",
                note.id
            )));
        }
        if note.updated_at < note.created_at {
            return Err(SourceError::InvalidData(format!(
                "note {} updated_at is earlier than created_at",
                note.id
            )));
        }
        if let Some(folder_id) = note.folder_id {
            self.ensure_folder_exists(folder_id)?;
        }
        let tags = note
            .tags
            .iter()
            .filter_map(|tag| normalize_tag(tag))
            .collect::<BTreeSet<_>>();
        note.tags = tags.into_iter().collect();
        self.notes.insert(note.id, note);
        Ok(())
    }

    /// Verifies every folder parent reference resolves.
    ///
    /// Used after bulk inserts where parents may arrive after children.
    pub fn check_folder_parents(&self) -> SourceResult<()> {
        for folder in self.folders.values() {
            if let Some(parent_id) = folder.parent_id {
                if !self.folders.contains_key(&parent_id) {
                    return Err(SourceError::InvalidData(format!(
                        "folder {} references missing parent {parent_id}",
                        folder.id
                    )));
                }
            }
        }
        Ok(())
    }

    fn ensure_folder_exists(&self, folder_id: FolderId) -> SourceResult<()> {
        if self.folders.contains_key(&folder_id) {
            Ok(())
        } else {
            Err(SourceError::FolderNotFound(folder_id))
        }
    }
}

impl NotesSource for MemoryNotesSource {
    fn status(&self) -> SourceStatus {
        self.status.clone()
    }

    fn folders(&self) -> SourceResult<Vec<NoteFolder>> {
        let mut folders = self.folders.values().cloned().collect::<Vec<_>>();
        folders.sort_by(folder_order);
        Ok(folders)
    }

    fn notes(&self, query: &NoteQuery) -> SourceResult<Vec<Note>> {
        if let Some(folder_id) = query.folder_id {
            self.ensure_folder_exists(folder_id)?;
        }
        let tag = query.tag.as_deref().and_then(normalize_tag);
        let search = query.search.as_deref().and_then(normalize_search);

        let mut notes = self
            .notes
            .values()
            .filter(|note| query.view.includes(note))
            .filter(|note| query.folder_id.is_none() || note.folder_id == query.folder_id)
            .filter(|note| tag.as_deref().map_or(true, |tag| note.has_tag(tag)))
            .filter(|note| search.as_deref().map_or(true, |needle| note.matches_search(needle)))
            .cloned()
            .collect::<Vec<_>>();
        notes.sort_by(note_list_order);

        Ok(notes
            .into_iter()
            .skip(query.offset as usize)
            .take(normalize_note_limit(query.limit) as usize)
            .collect())
    }

    fn note(&self, id: NoteId) -> SourceResult<Option<Note>> {
        Ok(self.notes.get(&id).cloned())
    }

    fn folder_note_counts(&self) -> SourceResult<BTreeMap<FolderId, usize>> {
        let mut counts = BTreeMap::new();
        for note in self.notes.values().filter(|note| !note.is_trashed) {
            if let Some(folder_id) = note.folder_id {
                *counts.entry(folder_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}

fn normalize_name(value: String) -> SourceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SourceError::InvalidName);
    }
    Ok(trimmed.to_string())
}
