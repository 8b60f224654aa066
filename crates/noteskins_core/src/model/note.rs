//! Note and folder records consumed by the page composer.
//!
//! # Responsibility
//! - Define the read shapes handed over by a notes source.
//! - Derive display titles without touching storage.
//!
//! # Invariants
//! - `id` values are stable and never reused for another record.
//! - Timestamps are Unix epoch milliseconds.
//! - `updated_at` is never earlier than `created_at` for records built here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one note.
pub type NoteId = Uuid;

/// Stable identifier for one folder.
pub type FolderId = Uuid;

const UNTITLED_NOTE: &str = "Untitled note";
const MAX_TITLE_CHARS: usize = 80;

/// One note as exposed by the notes source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    /// Explicit title. When absent the title is derived from content.
    #[serde(default)]
    pub title: Option<String>,
    /// Markdown body owned by the external editor.
    pub content: String,
    /// Containing folder. `None` means the note lives at root level.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    /// Lowercase tag names.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Listed ahead of unpinned notes.
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_favorite: bool,
    /// Trashed notes only show up in the trash view.
    #[serde(default)]
    pub is_trashed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    /// Creates a root-level note with a generated ID and current timestamps.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), content)
    }

    /// Creates a note with a caller-provided ID.
    ///
    /// Used by snapshot import where identity already exists externally.
    pub fn with_id(id: NoteId, content: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id,
            title: None,
            content: content.into(),
            folder_id: None,
            tags: Vec::new(),
            is_pinned: false,
            is_favorite: false,
            is_trashed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the user-facing title.
    ///
    /// Order: explicit title, first non-empty content line (heading markers
    /// stripped), then a fixed placeholder.
    pub fn display_title(&self) -> String {
        let explicit = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        let derived = || {
            self.content
                .lines()
                .map(|line| line.trim().trim_start_matches('#').trim())
                .find(|line| !line.is_empty())
        };

        match explicit.or_else(derived) {
            Some(value) => truncate_chars(value, MAX_TITLE_CHARS),
            None => UNTITLED_NOTE.to_string(),
        }
    }

    /// Returns whether this note carries `tag` (case-insensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over display title and content.
    ///
    /// `needle` must already be lowercase.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.display_title().to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// One folder in the notes hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteFolder {
    pub id: FolderId,
    pub name: String,
    /// Parent folder. `None` means root level.
    #[serde(default)]
    pub parent_id: Option<FolderId>,
    /// Order key among siblings.
    #[serde(default)]
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl NoteFolder {
    /// Creates a folder with a generated ID.
    pub fn new(parent_id: Option<FolderId>, name: impl Into<String>, sort_order: i64) -> Self {
        let now = now_millis();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_id,
            sort_order,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut truncated = value.chars().take(max_chars).collect::<String>();
    if value.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn explicit_title_wins_over_content() {
        let mut note = Note::new("# From content");
        note.title = Some("  Explicit  ".to_string());
        assert_eq!(note.display_title(), "Explicit");
    }

    #[test]
    fn title_falls_back_to_first_content_line() {
        let note = Note::new("\n\n## Weekly review\nbody");
        assert_eq!(note.display_title(), "Weekly review");
    }

    #[test]
    fn blank_note_uses_placeholder_title() {
        let mut note = Note::new("   \n#\n");
        note.title = Some(" ".to_string());
        assert_eq!(note.display_title(), "Untitled note");
    }

    #[test]
    fn long_title_is_truncated() {
        let note = Note::new("x".repeat(200));
        let title = note.display_title();
        assert!(title.ends_with("..."));
        assert_eq!(title.chars().count(), 83);
    }

    #[test]
    fn search_matches_derived_title_and_content() {
        let note = Note::new("# Grocery List\nOat MILK and eggs");
        assert!(note.matches_search("grocery"));
        assert!(note.matches_search("oat milk"));
        assert!(!note.matches_search("butter"));
    }

    #[test]
    fn flags_default_to_false_when_absent_from_json() {
        let note: Note = serde_json::from_str(
            r#"{ "id": "6f1c1b8e-5d4e-4d43-9a53-0f1a2b3c4d5e", "content": "x",
                 "created_at": 1, "updated_at": 1 }"#,
        )
        .expect("note json");
        assert!(!note.is_pinned && !note.is_favorite && !note.is_trashed);
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let mut note = Note::new("tagged");
        note.tags = vec!["work".to_string()];
        assert!(note.has_tag("WORK"));
        assert!(!note.has_tag("home"));
    }
}
