//! Built-in theme definitions, one per style.
//!
//! Built lazily once per process and shared by reference afterwards.

use super::definition::{FolderStyle, Theme};
use super::style::ThemeStyle;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Style used when a page is rendered without a provided theme.
pub const DEFAULT_STYLE: ThemeStyle = ThemeStyle::Paper;

static BUILTIN_THEMES: Lazy<[Arc<Theme>; 8]> =
    Lazy::new(|| ThemeStyle::ALL.map(|style| Arc::new(build(style))));

/// Returns the built-in theme for `style`.
pub fn builtin_theme(style: ThemeStyle) -> &'static Theme {
    BUILTIN_THEMES[style as usize].as_ref()
}

/// Returns a shared handle to the built-in theme for `style`.
pub fn shared_builtin_theme(style: ThemeStyle) -> Arc<Theme> {
    Arc::clone(&BUILTIN_THEMES[style as usize])
}

/// The theme every unscoped render falls back to.
pub fn default_theme() -> &'static Theme {
    builtin_theme(DEFAULT_STYLE)
}

fn build(style: ThemeStyle) -> Theme {
    let tokens: [&str; 9] = match style {
        ThemeStyle::Archive => [
            "bg-amber-50",
            "border border-amber-900/30",
            "rounded-sm",
            "shadow-sm",
            "text-amber-800",
            "text-stone-800",
            "text-stone-500",
            "font-serif",
            "bg-amber-100",
        ],
        ThemeStyle::Blueprint => [
            "bg-blue-900/80",
            "border border-dashed border-sky-300",
            "rounded-none",
            "shadow-none",
            "text-sky-200",
            "text-sky-50",
            "text-sky-300",
            "font-mono",
            "bg-blue-950",
        ],
        ThemeStyle::Brutalist => [
            "bg-white",
            "border-4 border-black",
            "rounded-none",
            "shadow-[8px_8px_0_0_#000]",
            "text-red-600",
            "text-black",
            "text-neutral-700",
            "font-sans font-black",
            "bg-yellow-300",
        ],
        ThemeStyle::Exec => [
            "bg-slate-800",
            "border border-slate-700",
            "rounded-md",
            "shadow-lg",
            "text-indigo-400",
            "text-slate-100",
            "text-slate-400",
            "font-sans",
            "bg-slate-900",
        ],
        ThemeStyle::Glass => [
            "bg-white/10 backdrop-blur-xl",
            "border border-white/20",
            "rounded-2xl",
            "shadow-2xl",
            "text-cyan-200",
            "text-white",
            "text-white/60",
            "font-sans",
            "bg-gradient-to-br from-indigo-500 to-pink-500",
        ],
        ThemeStyle::Paper => [
            "bg-white",
            "border border-neutral-200",
            "rounded-lg",
            "shadow-sm",
            "text-neutral-900",
            "text-neutral-800",
            "text-neutral-500",
            "font-sans",
            "bg-neutral-50",
        ],
        ThemeStyle::Terminal => [
            "bg-black",
            "border border-green-500",
            "rounded-none",
            "shadow-[0_0_12px_rgba(34,197,94,0.4)]",
            "text-green-300",
            "text-green-400",
            "text-green-700",
            "font-mono",
            "bg-neutral-950",
        ],
        ThemeStyle::Zen => [
            "bg-stone-50",
            "border border-transparent",
            "rounded-3xl",
            "shadow-none",
            "text-stone-600",
            "text-stone-700",
            "text-stone-400",
            "font-light",
            "bg-stone-100",
        ],
    };

    let [surface, border, radius, shadow, accent, text, muted, font, backdrop] =
        tokens.map(str::to_string);
    let (empty_title, empty_subtitle, folder_style) = empty_state(style);
    Theme {
        style,
        surface,
        border,
        radius,
        shadow,
        accent,
        text,
        muted,
        font,
        backdrop,
        empty_title: empty_title.to_string(),
        empty_subtitle: empty_subtitle.to_string(),
        folder_style,
    }
}

fn empty_state(style: ThemeStyle) -> (&'static str, &'static str, FolderStyle) {
    match style {
        ThemeStyle::Archive => (
            "No Document Open",
            "Select a file from the archive.",
            FolderStyle::Modern,
        ),
        ThemeStyle::Blueprint => (
            "No Schematic Selected",
            "Select a document or create a new schematic.",
            FolderStyle::Technical,
        ),
        ThemeStyle::Brutalist => ("NO DOCUMENT", "Select a file.", FolderStyle::Modern),
        ThemeStyle::Exec => (
            "No Document Selected",
            "Choose a briefing to review.",
            FolderStyle::Modern,
        ),
        ThemeStyle::Glass => (
            "Select a Note",
            "Choose a document to view or edit.",
            FolderStyle::Modern,
        ),
        ThemeStyle::Paper => (
            "No Document Selected",
            "Choose a note to begin editing.",
            FolderStyle::Modern,
        ),
        ThemeStyle::Terminal => (
            "[NO BUFFER SELECTED]",
            "Select a file to edit or create new.",
            FolderStyle::Ascii,
        ),
        ThemeStyle::Zen => (
            "空 Empty",
            "Select a note to begin your practice.",
            FolderStyle::Modern,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{builtin_theme, default_theme, shared_builtin_theme, DEFAULT_STYLE};
    use crate::theme::definition::FolderStyle;
    use crate::theme::style::ThemeStyle;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn every_builtin_theme_matches_its_style() {
        for style in ThemeStyle::ALL {
            assert_eq!(builtin_theme(style).style, style);
        }
    }

    #[test]
    fn builtin_themes_are_built_once_and_shared() {
        let first = shared_builtin_theme(ThemeStyle::Glass);
        let second = shared_builtin_theme(ThemeStyle::Glass);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(std::ptr::eq(builtin_theme(ThemeStyle::Glass), first.as_ref()));
    }

    #[test]
    fn only_terminal_uses_ascii_folders() {
        let ascii = ThemeStyle::ALL
            .into_iter()
            .filter(|style| builtin_theme(*style).folder_style == FolderStyle::Ascii)
            .collect::<Vec<_>>();
        assert_eq!(ascii, vec![ThemeStyle::Terminal]);
        assert_eq!(builtin_theme(ThemeStyle::Terminal).empty_title, "[NO BUFFER SELECTED]");
    }

    #[test]
    fn default_theme_is_paper() {
        assert_eq!(default_theme().style, DEFAULT_STYLE);
        assert_eq!(DEFAULT_STYLE, ThemeStyle::Paper);
    }

    #[test]
    fn styles_have_distinct_token_sets() {
        let distinct = ThemeStyle::ALL
            .iter()
            .map(|style| builtin_theme(*style).tokens().map(|(_, value)| value.to_string()))
            .collect::<HashSet<_>>();
        assert_eq!(distinct.len(), ThemeStyle::ALL.len());
    }
}
