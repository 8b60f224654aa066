//! Built-in notebook used when no snapshot is given.

use noteskins_core::{MemoryNotesSource, SourceResult};

pub fn demo_source() -> SourceResult<MemoryNotesSource> {
    let mut source = MemoryNotesSource::new();

    let work = source.create_folder(None, "Work")?;
    let meetings = source.create_folder(Some(work.id), "Meetings")?;
    let personal = source.create_folder(None, "Personal")?;

    let roadmap = source.create_note(
        Some(work.id),
        Some("Q3 roadmap"),
        "# Q3 roadmap\n\n- ship the **theme switcher**\n- [design review](https://example.com/review)",
    )?;
    source.set_note_tags(roadmap.id, &["planning", "work"])?;
    source.set_pinned(roadmap.id, true)?;

    let standup = source.create_note(
        Some(meetings.id),
        None,
        "## Standup notes\nBlocked on <review> & QA sign-off.",
    )?;
    source.set_note_tags(standup.id, &["work"])?;

    let trip = source.create_note(
        Some(personal.id),
        Some("Trip ideas"),
        "Kyoto in autumn ![maple](images/maple.jpg)\nBook the ryokan early.",
    )?;
    source.set_note_tags(trip.id, &["travel"])?;
    source.set_favorite(trip.id, true)?;

    source.create_note(None, None, "Scratchpad: remember to water the plants.")?;

    let draft = source.create_note(
        Some(work.id),
        Some("Old draft"),
        "Superseded by the Q3 roadmap.",
    )?;
    source.trash_note(draft.id)?;

    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::demo_source;
    use noteskins_core::{NoteListView, NoteQuery, NotesSource};

    #[test]
    fn demo_notebook_has_nested_folders_and_tagged_notes() {
        let source = demo_source().expect("demo notebook");
        assert_eq!(source.folder_count(), 3);
        assert_eq!(source.note_count(), 5);
        assert_eq!(source.notes(&NoteQuery::default()).expect("listed").len(), 4);

        let work = source
            .notes(&NoteQuery {
                tag: Some("work".to_string()),
                ..NoteQuery::default()
            })
            .expect("tagged notes");
        assert_eq!(work.len(), 2);

        let trash = source
            .notes(&NoteQuery {
                view: NoteListView::Trash,
                ..NoteQuery::default()
            })
            .expect("trash");
        assert_eq!(trash.len(), 1);
    }
}
