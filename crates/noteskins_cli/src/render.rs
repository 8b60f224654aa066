//! `render` and `render-all` subcommands.

use crate::demo::demo_source;
use anyhow::{Context, Result};
use clap::Args;
use log::info;
use noteskins_core::{
    MemoryNotesSource, NoteListView, PageRequest, RenderedPage, SkinRegistry, ThemeConfig,
    ThemeStyle,
};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Inputs shared by both render commands.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Listed notes: all|favorites|trash
    #[arg(long, value_name = "VIEW", default_value_t = NoteListView::All)]
    pub view: NoteListView,

    /// Notes snapshot JSON. A built-in demo notebook is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub notes: Option<PathBuf>,

    /// TOML file with per-style token overrides
    #[arg(long, value_name = "FILE")]
    pub theme_config: Option<PathBuf>,

    /// Only list notes in this folder
    #[arg(long, value_name = "UUID")]
    pub folder: Option<Uuid>,

    /// Note to open in the editor
    #[arg(long, value_name = "UUID")]
    pub note: Option<Uuid>,

    /// Only list notes with this tag
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Only list notes whose title or content contains TEXT (any case)
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Maximum listed notes (default 10, max 50)
    #[arg(long, value_name = "N")]
    pub limit: Option<u32>,

    /// Listed notes to skip
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub offset: u32,

    /// Page heading
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

impl InputArgs {
    fn page_request(&self) -> PageRequest {
        PageRequest {
            view: self.view,
            folder_id: self.folder,
            selected_note: self.note,
            tag: self.tag.clone(),
            search: self.search.clone(),
            limit: self.limit,
            offset: self.offset,
            title: self.title.clone(),
        }
    }

    fn load_source(&self) -> Result<MemoryNotesSource> {
        match &self.notes {
            Some(path) => MemoryNotesSource::from_json_file(path)
                .with_context(|| format!("failed to load notes from `{}`", path.display())),
            None => demo_source().context("failed to build demo notebook"),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Style to render. Falls back to the configured default style.
    #[arg(short, long, value_name = "STYLE")]
    pub style: Option<ThemeStyle>,

    /// Output HTML file. Writes to stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub input: InputArgs,
}

impl RenderArgs {
    pub fn execute(&self) -> Result<()> {
        let registry = load_registry(self.input.theme_config.as_deref())?;
        let source = self.input.load_source()?;
        let style = self.style.unwrap_or(registry.default_style());

        let page = registry.render_page(style, &source, &self.input.page_request());
        let document = page.to_document().into_string();
        match &self.out {
            Some(path) => {
                write_page(path, &document)?;
                report(&page, path);
            }
            None => print!("{document}"),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Args)]
pub struct RenderAllArgs {
    /// Directory receiving one `<style>.html` per style
    #[arg(long, value_name = "DIR")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

impl RenderAllArgs {
    pub fn execute(&self) -> Result<()> {
        let registry = load_registry(self.input.theme_config.as_deref())?;
        let source = self.input.load_source()?;
        let request = self.input.page_request();

        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create `{}`", self.out_dir.display()))?;
        for skin in registry.skins() {
            let page = skin.render_page(&source, &request);
            let path = self.out_dir.join(format!("{}.html", skin.style()));
            write_page(&path, &page.to_document().into_string())?;
            report(&page, &path);
        }
        info!(
            "event=render_all module=cli status=ok styles={} out_dir={}",
            ThemeStyle::ALL.len(),
            self.out_dir.display()
        );
        Ok(())
    }
}

/// Builds the skin registry, applying the optional theme config file.
pub fn load_registry(theme_config: Option<&Path>) -> Result<SkinRegistry> {
    let config = match theme_config {
        Some(path) => ThemeConfig::load(path)
            .with_context(|| format!("failed to load theme config `{}`", path.display()))?,
        None => ThemeConfig::default(),
    };
    Ok(SkinRegistry::from_config(&config))
}

fn write_page(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).with_context(|| format!("failed to write `{}`", path.display()))
}

fn report(page: &RenderedPage, path: &Path) {
    println!(
        "{:<9} {:<7} notes={} -> {}",
        page.style.as_str(),
        page.state.as_str(),
        page.note_ids.len(),
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::{load_registry, InputArgs, RenderAllArgs, RenderArgs};
    use noteskins_core::{NoteListView, ThemeStyle};
    use std::fs;

    fn input() -> InputArgs {
        InputArgs {
            view: NoteListView::All,
            notes: None,
            theme_config: None,
            folder: None,
            note: None,
            tag: None,
            search: None,
            limit: None,
            offset: 0,
            title: Some("Demo".to_string()),
        }
    }

    #[test]
    fn render_all_writes_one_document_per_style() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = RenderAllArgs {
            out_dir: dir.path().join("pages"),
            input: input(),
        };
        args.execute().expect("render all");

        for style in ThemeStyle::ALL {
            let path = dir.path().join("pages").join(format!("{style}.html"));
            let html = fs::read_to_string(&path).expect("rendered page");
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.contains(&format!("data-layout=\"{style}\"")));
            assert!(html.contains("data-state=\"loaded\""));
        }
    }

    #[test]
    fn trash_view_and_search_reach_the_page() {
        let dir = tempfile::tempdir().expect("temp dir");
        let out = dir.path().join("trash.html");
        let mut input = input();
        input.view = NoteListView::Trash;
        input.search = Some("OLD DRAFT".to_string());
        let args = RenderArgs {
            style: Some(ThemeStyle::Terminal),
            out: Some(out.clone()),
            input,
        };
        args.execute().expect("render");

        let html = fs::read_to_string(&out).expect("rendered page");
        assert!(html.contains("data-state=\"loaded\""));
        assert!(html.contains("Old draft"));
        assert!(!html.contains("theme switcher"));
    }

    #[test]
    fn missing_theme_config_is_reported_with_path() {
        let err = load_registry(Some(std::path::Path::new("/nonexistent/theme.toml")))
            .expect_err("missing config");
        assert!(format!("{err:#}").contains("/nonexistent/theme.toml"));
    }
}
