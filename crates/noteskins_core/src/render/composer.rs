//! Shared notes page composition.
//!
//! # Responsibility
//! - Read folders/notes from a `NotesSource` into a display state.
//! - Render the folder tree, note list and editor slot through the injected
//!   layout and panel wrappers.
//!
//! # Invariants
//! - No style-specific value is chosen here; every class comes from the
//!   wrappers or from the active theme in the scope.
//! - Source failures become `ViewState::Error`; nothing is propagated past
//!   `NotesPageLayout::render` and nothing is retried.
//! - Note order on the page is the order returned by the source.
//! - The editor opens only an explicitly selected note; otherwise it shows the
//!   active theme's empty state.

use super::classes::compose_classes;
use super::layout::{LayoutSlots, LayoutWrapper};
use super::markup::{document, Element, Markup};
use super::panel::PanelWrapper;
use super::tree::{build_folder_tree, FolderNode};
use crate::model::note::{FolderId, Note, NoteId};
use crate::model::preview::derive_preview;
use crate::source::{NoteListView, NoteQuery, NotesSource, SourceError, SourceStatus};
use crate::theme::{FolderStyle, Theme, ThemeScope, ThemeStyle};
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::BTreeMap;
use std::time::Instant;

const DEFAULT_PAGE_TITLE: &str = "Notes";

/// What the caller wants to see on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub view: NoteListView,
    /// Restrict the list to one folder.
    pub folder_id: Option<FolderId>,
    /// Note opened in the editor. Nothing is opened when absent.
    pub selected_note: Option<NoteId>,
    /// Single-tag filter.
    pub tag: Option<String>,
    /// Case-insensitive title/content filter.
    pub search: Option<String>,
    pub limit: Option<u32>,
    pub offset: u32,
    /// Page heading. Defaults to `Notes`.
    pub title: Option<String>,
}

impl PageRequest {
    fn note_query(&self) -> NoteQuery {
        NoteQuery {
            view: self.view,
            folder_id: self.folder_id,
            tag: self.tag.clone(),
            search: self.search.clone(),
            limit: self.limit,
            offset: self.offset,
        }
    }

    fn page_title(&self) -> String {
        non_blank(self.title.as_deref())
            .unwrap_or(DEFAULT_PAGE_TITLE)
            .to_string()
    }

    /// List panel message when the filtered list has no rows.
    fn empty_list_message(&self, source_is_empty: bool) -> String {
        if let Some(search) = non_blank(self.search.as_deref()) {
            return format!("No notes match \"{search}\".");
        }
        if let Some(tag) = non_blank(self.tag.as_deref()) {
            return format!("No notes tagged #{tag}.");
        }
        let message = match self.view {
            NoteListView::Favorites => "No favorite notes.",
            NoteListView::Trash => "Trash is empty.",
            NoteListView::All if self.folder_id.is_some() => "No notes in this folder.",
            NoteListView::All if self.offset > 0 => "No notes on this page.",
            NoteListView::All if source_is_empty => "No notes yet.",
            NoteListView::All => "No notes found.",
        };
        message.to_string()
    }

    fn note_href(&self, id: NoteId) -> String {
        let mut params = Vec::new();
        if self.view != NoteListView::All {
            params.push(format!("view={}", self.view));
        }
        if let Some(folder_id) = self.folder_id {
            params.push(format!("folder={folder_id}"));
        }
        params.push(format!("note={id}"));
        format!("?{}", params.join("&"))
    }
}

/// Display state of a notes page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    /// The filtered list has rows.
    Loaded,
    /// The filtered list is empty. An explicitly selected note may still be open.
    Empty,
    Error,
}

impl ViewState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}

/// Everything one page shows once the source answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub folders: Vec<FolderNode>,
    /// Non-trashed notes per folder.
    pub folder_counts: BTreeMap<FolderId, usize>,
    /// Filtered, ordered, paged list.
    pub notes: Vec<Note>,
    /// Note open in the editor.
    pub selected: Option<Note>,
    /// The source has no notes outside the trash.
    pub source_is_empty: bool,
}

/// Data resolved from the source for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesView {
    Loading,
    Loaded(PageData),
    Error { message: String },
}

impl NotesView {
    /// Reads everything one page needs from `source`.
    ///
    /// Never fails: source errors map to `NotesView::Error`.
    pub fn load<S: NotesSource + ?Sized>(source: &S, request: &PageRequest) -> Self {
        match source.status() {
            SourceStatus::Loading => return Self::Loading,
            SourceStatus::Failed(message) => return Self::Error { message },
            SourceStatus::Ready => {}
        }

        match Self::try_load(source, request) {
            Ok(data) => Self::Loaded(data),
            Err(err) => Self::Error {
                message: err.to_string(),
            },
        }
    }

    fn try_load<S: NotesSource + ?Sized>(
        source: &S,
        request: &PageRequest,
    ) -> Result<PageData, SourceError> {
        let folders = build_folder_tree(&source.folders()?);
        let folder_counts = source.folder_note_counts()?;
        let notes = source.notes(&request.note_query())?;

        let source_is_empty = notes.is_empty()
            && source
                .notes(&NoteQuery {
                    limit: Some(1),
                    ..NoteQuery::default()
                })?
                .is_empty();

        let selected = match request.selected_note {
            Some(id) => {
                let found = source.note(id)?;
                if found.is_none() {
                    warn!(
                        "event=note_missing module=composer status=degraded note_id={}",
                        id
                    );
                }
                found
            }
            None => None,
        };

        Ok(PageData {
            folders,
            folder_counts,
            notes,
            selected,
            source_is_empty,
        })
    }

    pub fn state(&self) -> ViewState {
        match self {
            Self::Loading => ViewState::Loading,
            Self::Loaded(data) if data.notes.is_empty() => ViewState::Empty,
            Self::Loaded(_) => ViewState::Loaded,
            Self::Error { .. } => ViewState::Error,
        }
    }

    /// Listed note ids in page order.
    pub fn note_ids(&self) -> Vec<NoteId> {
        match self {
            Self::Loaded(data) => data.notes.iter().map(|note| note.id).collect(),
            _ => Vec::new(),
        }
    }
}

/// Output of one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Style of the theme that was active for the page.
    pub style: ThemeStyle,
    pub state: ViewState,
    /// Listed note ids in page order.
    pub note_ids: Vec<NoteId>,
    pub title: String,
    /// Page background classes for the surrounding document body.
    pub backdrop: String,
    pub html: Markup,
}

impl RenderedPage {
    /// Wraps the fragment into a standalone HTML document.
    pub fn to_document(&self) -> Markup {
        document(&self.title, &self.backdrop, self.html.clone())
    }
}

/// Page composer parameterized by a layout and a panel wrapper.
pub struct NotesPageLayout<'w, L: ?Sized, P: ?Sized> {
    layout: &'w L,
    panel: &'w P,
}

impl<'w, L, P> NotesPageLayout<'w, L, P>
where
    L: LayoutWrapper + ?Sized,
    P: PanelWrapper + ?Sized,
{
    pub fn new(layout: &'w L, panel: &'w P) -> Self {
        Self { layout, panel }
    }

    /// Loads and renders one notes page.
    ///
    /// # Side effects
    /// - Emits one `page_render` logging event with counts and timing only.
    pub fn render<S: NotesSource + ?Sized>(
        &self,
        scope: &ThemeScope<'_>,
        source: &S,
        request: &PageRequest,
    ) -> RenderedPage {
        let started_at = Instant::now();
        let view = NotesView::load(source, request);
        let page = self.render_view(scope, &view, request);

        match &view {
            NotesView::Error { message } => warn!(
                "event=page_render module=composer status=error theme={} layout={} panel={} duration_ms={} error={}",
                page.style,
                self.layout.style(),
                self.panel.style(),
                started_at.elapsed().as_millis(),
                message
            ),
            _ => info!(
                "event=page_render module=composer status=ok theme={} layout={} panel={} state={} notes={} duration_ms={}",
                page.style,
                self.layout.style(),
                self.panel.style(),
                page.state.as_str(),
                page.note_ids.len(),
                started_at.elapsed().as_millis()
            ),
        }
        page
    }

    /// Renders an already-loaded view.
    pub fn render_view(
        &self,
        scope: &ThemeScope<'_>,
        view: &NotesView,
        request: &PageRequest,
    ) -> RenderedPage {
        let theme = scope.active();
        let (nav, body) = match view {
            NotesView::Loading => (
                Markup::empty(),
                self.status_panel(scope, "status", "Loading notes…"),
            ),
            NotesView::Error { message } => (
                Markup::empty(),
                self.status_panel(scope, "alert", &format!("Notes are unavailable: {message}")),
            ),
            NotesView::Loaded(data) => {
                let body = Markup::concat([
                    self.list_panel(scope, data, request),
                    self.editor_panel(scope, data.selected.as_ref()),
                ]);
                (self.folder_panel(scope, data, request), body)
            }
        };

        let state = view.state();
        let body = Element::new("div")
            .attr("data-state", state.as_str())
            .child(body)
            .build();
        let title = request.page_title();
        let html = self.layout.render(
            scope,
            LayoutSlots {
                title: title.clone(),
                nav,
                body,
            },
        );

        RenderedPage {
            style: theme.style,
            state,
            note_ids: view.note_ids(),
            title,
            backdrop: theme.backdrop.clone(),
            html,
        }
    }

    fn status_panel(&self, scope: &ThemeScope<'_>, role: &str, message: &str) -> Markup {
        let content = Element::new("p")
            .class(scope.active().muted.as_str())
            .attr("role", role)
            .text(message)
            .build();
        self.panel.render(scope, Some("notes-status"), content)
    }

    fn folder_panel(&self, scope: &ThemeScope<'_>, data: &PageData, request: &PageRequest) -> Markup {
        let theme = scope.active();
        let views = NoteListView::ALL.into_iter().map(|view| {
            let label = match view {
                NoteListView::All => "All notes",
                NoteListView::Favorites => "Favorites",
                NoteListView::Trash => "Trash",
            };
            let is_active = request.view == view
                && (view != NoteListView::All || request.folder_id.is_none());
            Element::new("a")
                .class(active_class(theme, is_active))
                .attr("href", format!("?view={view}"))
                .attr("data-view", view.as_str())
                .text(label)
                .build()
        });

        let mut content = Markup::concat(views);
        if request.view == NoteListView::All {
            content.push(folder_list(
                theme,
                &data.folders,
                &data.folder_counts,
                request.folder_id,
            ));
        }
        self.panel.render(scope, Some("notes-folders"), content)
    }

    fn list_panel(&self, scope: &ThemeScope<'_>, data: &PageData, request: &PageRequest) -> Markup {
        let theme = scope.active();
        if data.notes.is_empty() {
            let message = Element::new("p")
                .class(theme.muted.as_str())
                .attr("role", "status")
                .attr("data-role", "list-empty")
                .text(&request.empty_list_message(data.source_is_empty))
                .build();
            return self.panel.render(scope, Some("notes-list"), message);
        }

        let selected = data.selected.as_ref().map(|note| note.id);
        let items = data.notes.iter().map(|note| {
            note_list_item(theme, note, selected == Some(note.id), request.note_href(note.id))
        });
        let list = Element::new("ul")
            .attr("data-role", "note-list")
            .child(Markup::concat(items))
            .build();
        self.panel.render(scope, Some("notes-list"), list)
    }

    fn editor_panel(&self, scope: &ThemeScope<'_>, selected: Option<&Note>) -> Markup {
        let theme = scope.active();
        let Some(note) = selected else {
            let content = Element::new("div")
                .attr("role", "status")
                .attr("data-role", "editor-empty")
                .child(
                    Element::new("h2")
                        .class(compose_classes([theme.accent.as_str(), theme.font.as_str()]))
                        .text(&theme.empty_title)
                        .build(),
                )
                .child(
                    Element::new("p")
                        .class(theme.muted.as_str())
                        .text(&theme.empty_subtitle)
                        .build(),
                )
                .build();
            return self.panel.render(scope, Some("notes-editor"), content);
        };

        let tags = Markup::concat(note.tags.iter().map(|tag| {
            Element::new("li")
                .class(theme.muted.as_str())
                .text(&format!("#{tag}"))
                .build()
        }));
        let article = Element::new("article")
            .attr("data-editor", "rich-text")
            .attr("data-note-id", note.id.to_string())
            .child(
                Element::new("h2")
                    .class(theme.accent.as_str())
                    .text(&note.display_title())
                    .build(),
            )
            .child(note_flags(theme, note))
            .child(timestamp(theme, note.updated_at))
            .child(Element::new("ul").attr("data-role", "tags").child(tags).build())
            .child(
                Element::new("textarea")
                    .attr("name", "content")
                    .attr("aria-label", "Note content")
                    .class("w-full min-h-[16rem] bg-transparent")
                    .text(&note.content)
                    .build(),
            )
            .build();
        self.panel.render(scope, Some("notes-editor"), article)
    }
}

fn folder_list(
    theme: &Theme,
    nodes: &[FolderNode],
    counts: &BTreeMap<FolderId, usize>,
    active: Option<FolderId>,
) -> Markup {
    if nodes.is_empty() {
        return Markup::empty();
    }
    let items = nodes.iter().map(|node| {
        let id = node.folder.id;
        let count = counts.get(&id).copied().unwrap_or(0);
        let link = Element::new("a")
            .class(active_class(theme, active == Some(id)))
            .attr("href", format!("?folder={id}"))
            .text(&node.folder.name)
            .build();

        let mut item = Element::new("li").attr("data-folder-id", id.to_string());
        if theme.folder_style == FolderStyle::Technical {
            item = item.class("border-b border-dashed");
        }
        item.child(folder_marker(theme, !node.children.is_empty(), count))
            .child(link)
            .child(note_count_badge(theme, count))
            .child(folder_list(theme, &node.children, counts, active))
            .build()
    });
    Element::new("ul")
        .attr("role", "group")
        .child(Markup::concat(items))
        .build()
}

/// Tree is rendered fully expanded, so open markers are used throughout.
fn folder_marker(theme: &Theme, has_children: bool, count: usize) -> Markup {
    let marker = match theme.folder_style {
        FolderStyle::Ascii if has_children || count > 0 => "[-]",
        FolderStyle::Ascii => "[ ]",
        FolderStyle::Modern | FolderStyle::Technical if has_children => "▾",
        FolderStyle::Modern | FolderStyle::Technical => return Markup::empty(),
    };
    Element::new("span")
        .attr("aria-hidden", "true")
        .attr("data-role", "folder-marker")
        .text(marker)
        .build()
}

fn note_count_badge(theme: &Theme, count: usize) -> Markup {
    if count == 0 {
        return Markup::empty();
    }
    Element::new("span")
        .class(compose_classes(["text-xs px-1", theme.border.as_str(), theme.accent.as_str()]))
        .attr("data-role", "note-count")
        .text(&count.to_string())
        .build()
}

fn note_flags(theme: &Theme, note: &Note) -> Markup {
    let flags = [
        (note.is_pinned, "pinned", "Pinned"),
        (note.is_favorite, "favorite", "Favorite"),
    ];
    Markup::concat(flags.into_iter().filter(|(set, _, _)| *set).map(|(_, flag, label)| {
        Element::new("span")
            .class(theme.accent.as_str())
            .attr("data-flag", flag)
            .text(label)
            .build()
    }))
}

fn note_list_item(theme: &Theme, note: &Note, is_selected: bool, href: String) -> Markup {
    let preview = derive_preview(&note.content);

    let mut link = Element::new("a").attr("href", href).child(
        Element::new("h3")
            .class(active_class(theme, is_selected))
            .text(&note.display_title())
            .build(),
    );
    link = link.child(note_flags(theme, note));
    if let Some(text) = preview.text {
        link = link.child(Element::new("p").class(theme.muted.as_str()).text(&text).build());
    }
    if let Some(image) = preview.image {
        link = link.child(
            Element::new("img")
                .attr("src", image)
                .attr("alt", "")
                .attr("loading", "lazy")
                .build(),
        );
    }
    link = link.child(timestamp(theme, note.updated_at));

    let mut item = Element::new("li").attr("data-note-id", note.id.to_string());
    if is_selected {
        item = item.attr("aria-current", "true");
    }
    item.child(link.build()).build()
}

fn timestamp(theme: &Theme, epoch_ms: i64) -> Markup {
    let mut time = Element::new("time").class(theme.muted.as_str());
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(at) => {
            time = time
                .attr("datetime", at.to_rfc3339())
                .text(&at.format("%Y-%m-%d %H:%M").to_string());
        }
        None => time = time.text("unknown time"),
    }
    time.build()
}

fn active_class(theme: &Theme, is_active: bool) -> &str {
    if is_active {
        theme.accent.as_str()
    } else {
        ""
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
