//! Themed notes page rendering.
//!
//! One shared notes page (folder tree, note list, editor slot) rendered under
//! interchangeable visual skins. Each skin is a theme token set plus a layout
//! wrapper and a panel wrapper, selected from `SkinRegistry` by style.

pub mod logging;
pub mod model;
pub mod render;
pub mod skin;
pub mod source;
pub mod theme;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::note::{FolderId, Note, NoteFolder, NoteId};
pub use model::preview::{derive_preview, NotePreview};
pub use render::{
    escape_html, layout_for, panel_for, Element, LayoutSlots, LayoutWrapper, Markup,
    NotesPageLayout, NotesView, PageData, PageRequest, PanelWrapper, RenderedPage, ViewState,
};
pub use render::layout::{
    ArchiveLayout, BlueprintLayout, BrutalistLayout, ExecLayout, GlassLayout, PaperLayout,
    TerminalLayout, ZenLayout,
};
pub use render::panel::{
    ArchivePanel, BlueprintPanel, BrutalistPanel, ExecPanel, GlassPanel, PaperPanel,
    TerminalPanel, ZenPanel,
};
pub use skin::{Skin, SkinRegistry};
pub use source::memory::MemoryNotesSource;
pub use source::snapshot::NotesSnapshot;
pub use source::{
    NoteListView, NoteQuery, NotesSource, SourceError, SourceResult, SourceStatus,
};
pub use theme::{
    builtin_theme, default_theme, FolderStyle, StyleParseError, Theme, ThemeConfig,
    ThemeConfigError, ThemeOverrides, ThemeScope, ThemeStyle, DEFAULT_STYLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
