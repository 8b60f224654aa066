use noteskins_core::{
    MemoryNotesSource, Note, NoteListView, NoteQuery, NotesSource, SourceError,
};
use std::io::Write;
use tempfile::NamedTempFile;
use uuid::Uuid;

fn note_at(content: &str, updated_at: i64) -> Note {
    let mut note = Note::new(content);
    note.created_at = updated_at;
    note.updated_at = updated_at;
    note
}

#[test]
fn notes_are_listed_newest_first_with_id_tiebreak() {
    let mut source = MemoryNotesSource::new();
    let low = Uuid::from_u128(1);
    let high = Uuid::from_u128(2);

    let mut tie_high = Note::with_id(high, "tie high");
    tie_high.created_at = 500;
    tie_high.updated_at = 500;
    let mut tie_low = Note::with_id(low, "tie low");
    tie_low.created_at = 500;
    tie_low.updated_at = 500;
    let newest = note_at("newest", 900);
    let newest_id = newest.id;

    for note in [tie_high, newest, tie_low] {
        source.insert_note(note).expect("insert note");
    }

    let ids = source
        .notes(&NoteQuery::default())
        .expect("list notes")
        .into_iter()
        .map(|note| note.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![newest_id, low, high]);
}

#[test]
fn limit_defaults_clamps_and_offsets() {
    let mut source = MemoryNotesSource::new();
    for index in 0..60 {
        source
            .insert_note(note_at(&format!("note {index}"), index))
            .expect("insert note");
    }

    let default_page = source.notes(&NoteQuery::default()).expect("default page");
    assert_eq!(default_page.len(), 10);
    assert_eq!(default_page[0].content, "note 59");

    let clamped = source
        .notes(&NoteQuery {
            limit: Some(500),
            ..NoteQuery::default()
        })
        .expect("clamped page");
    assert_eq!(clamped.len(), 50);

    let offset = source
        .notes(&NoteQuery {
            limit: Some(5),
            offset: 58,
            ..NoteQuery::default()
        })
        .expect("offset page");
    let contents = offset.iter().map(|note| note.content.as_str()).collect::<Vec<_>>();
    assert_eq!(contents, vec!["note 1", "note 0"]);
}

#[test]
fn folder_and_tag_filters_combine() {
    let mut source = MemoryNotesSource::new();
    let work = source.create_folder(None, "Work").expect("work folder");
    let in_work = source
        .create_note(Some(work.id), None, "tagged in work")
        .expect("work note");
    let untagged = source
        .create_note(Some(work.id), None, "untagged in work")
        .expect("work note");
    let at_root = source.create_note(None, None, "tagged at root").expect("root note");
    source.set_note_tags(in_work.id, &["Urgent"]).expect("tag");
    source.set_note_tags(at_root.id, &["urgent"]).expect("tag");

    let query = NoteQuery {
        folder_id: Some(work.id),
        tag: Some(" URGENT ".to_string()),
        ..NoteQuery::default()
    };
    let ids = source
        .notes(&query)
        .expect("filtered list")
        .into_iter()
        .map(|note| note.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![in_work.id]);

    let in_folder = source
        .notes(&NoteQuery {
            folder_id: Some(work.id),
            ..NoteQuery::default()
        })
        .expect("folder list");
    assert_eq!(in_folder.len(), 2);
    assert!(in_folder.iter().any(|note| note.id == untagged.id));
}

#[test]
fn note_lookup_returns_none_for_unknown_id() {
    let mut source = MemoryNotesSource::new();
    let note = source.create_note(None, Some("Title"), "body").expect("note");

    let found = source.note(note.id).expect("lookup");
    assert_eq!(found.map(|value| value.display_title()), Some("Title".to_string()));
    assert_eq!(source.note(Uuid::new_v4()).expect("lookup"), None);
}

#[test]
fn update_note_bumps_timestamp_and_rejects_unknown() {
    let mut source = MemoryNotesSource::new();
    source.insert_note(note_at("before", 10)).expect("insert");
    let id = source.notes(&NoteQuery::default()).expect("list")[0].id;

    let updated = source.update_note(id, "after").expect("update");
    assert_eq!(updated.content, "after");
    assert!(updated.updated_at > 10);
    assert!(matches!(
        source.update_note(Uuid::new_v4(), "x"),
        Err(SourceError::NoteNotFound(_))
    ));
}

#[test]
fn pinned_first_then_newest_and_trash_is_hidden() {
    let mut source = MemoryNotesSource::new();
    let old = note_at("old pinned", 100);
    let new = note_at("newest", 900);
    let gone = note_at("Trashed Draft", 500);
    let ids = [old.id, new.id, gone.id];
    for note in [old, new, gone] {
        source.insert_note(note).expect("insert note");
    }
    source.set_pinned(ids[0], true).expect("pin");
    source.trash_note(ids[2]).expect("trash");

    let listed = source.notes(&NoteQuery::default()).expect("list");
    assert_eq!(listed.iter().map(|note| note.id).collect::<Vec<_>>(), vec![ids[0], ids[1]]);
    assert!(source.note(ids[2]).expect("lookup").is_some());

    let trash = NoteQuery {
        view: NoteListView::Trash,
        search: Some("DRAFT".to_string()),
        ..NoteQuery::default()
    };
    assert_eq!(source.notes(&trash).expect("trash list").len(), 1);

    source.restore_note(ids[2]).expect("restore");
    assert!(source.notes(&trash).expect("trash list").is_empty());
    assert_eq!(source.notes(&NoteQuery::default()).expect("list").len(), 3);
}

#[test]
fn loads_snapshot_file() {
    let folder_id = Uuid::new_v4();
    let note_id = Uuid::new_v4();
    let json = format!(
        r#"{{
          "folders": [
            {{ "id": "{folder_id}", "name": "Inbox", "created_at": 1, "updated_at": 1 }}
          ],
          "notes": [
            {{ "id": "{note_id}", "content": "hello", "folder_id": "{folder_id}",
               "tags": ["Draft"], "is_favorite": true, "created_at": 5, "updated_at": 7 }}
          ]
        }}"#
    );
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write snapshot");

    let source = MemoryNotesSource::from_json_file(file.path()).expect("load snapshot");
    assert_eq!(source.folder_count(), 1);
    assert_eq!(source.note_count(), 1);

    let note = source.note(note_id).expect("lookup").expect("note exists");
    assert_eq!(note.folder_id, Some(folder_id));
    assert_eq!(note.tags, vec!["draft".to_string()]);
    assert_eq!(note.display_title(), "hello");
    assert!(note.is_favorite);
    assert!(!note.is_pinned && !note.is_trashed);
}

#[test]
fn snapshot_rejects_dangling_parent_and_bad_timestamps() {
    let dangling = format!(
        r#"{{ "folders": [{{ "id": "{}", "name": "Child", "parent_id": "{}",
             "created_at": 0, "updated_at": 0 }}] }}"#,
        Uuid::new_v4(),
        Uuid::new_v4()
    );
    assert!(matches!(
        MemoryNotesSource::from_json_str(&dangling),
        Err(SourceError::InvalidData(_))
    ));

    let backwards = format!(
        r#"{{ "notes": [{{ "id": "{}", "content": "x", "created_at": 10, "updated_at": 5 }}] }}"#,
        Uuid::new_v4()
    );
    assert!(matches!(
        MemoryNotesSource::from_json_str(&backwards),
        Err(SourceError::InvalidData(_))
    ));

    let backwards_folder = format!(
        r#"{{ "folders": [{{ "id": "{}", "name": "Old", "created_at": 9, "updated_at": 3 }}] }}"#,
        Uuid::new_v4()
    );
    assert!(matches!(
        MemoryNotesSource::from_json_str(&backwards_folder),
        Err(SourceError::InvalidData(_))
    ));
}

#[test]
fn missing_snapshot_file_reports_path() {
    let path = std::env::temp_dir().join(format!("noteskins-missing-{}.json", Uuid::new_v4()));
    match MemoryNotesSource::from_json_file(&path) {
        Err(SourceError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}
