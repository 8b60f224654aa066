//! Theme token sets.
//!
//! # Responsibility
//! - Hold the semantic tokens one style renders with.
//! - Apply per-token overrides from configuration.
//!
//! # Invariants
//! - A `Theme` is immutable once built; overrides produce a new value.
//! - Class tokens are utility class lists, never markup. Empty-state copy is
//!   plain text and is escaped by the renderer.

use super::style::ThemeStyle;
use serde::{Deserialize, Serialize};

/// Immutable mapping from semantic token to style value for one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub style: ThemeStyle,
    /// Container background.
    pub surface: String,
    /// Border weight and color.
    pub border: String,
    /// Corner rounding.
    pub radius: String,
    /// Elevation / blur treatment.
    pub shadow: String,
    /// Highlight color for active items and headings.
    pub accent: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (timestamps, previews).
    pub muted: String,
    /// Font family.
    pub font: String,
    /// Page background behind every container.
    pub backdrop: String,
    /// Editor heading shown while no note is open.
    pub empty_title: String,
    pub empty_subtitle: String,
    pub folder_style: FolderStyle,
}

/// How folder rows are marked in the navigation tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderStyle {
    /// Disclosure glyphs.
    #[default]
    Modern,
    /// Bracket markers: `[-]` for folders with content, `[ ]` for empty ones.
    Ascii,
    /// Drafting-sheet look. Marked like `Modern`, rows carry a dashed rule.
    Technical,
}

impl FolderStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Ascii => "ascii",
            Self::Technical => "technical",
        }
    }
}

/// Optional per-token replacements loaded from a theme config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeOverrides {
    pub surface: Option<String>,
    pub border: Option<String>,
    pub radius: Option<String>,
    pub shadow: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub font: Option<String>,
    pub backdrop: Option<String>,
    pub empty_title: Option<String>,
    pub empty_subtitle: Option<String>,
    pub folder_style: Option<FolderStyle>,
}

impl ThemeOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl Theme {
    /// Returns the class tokens as `(name, value)` pairs in stable order.
    pub fn tokens(&self) -> [(&'static str, &str); 9] {
        [
            ("surface", self.surface.as_str()),
            ("border", self.border.as_str()),
            ("radius", self.radius.as_str()),
            ("shadow", self.shadow.as_str()),
            ("accent", self.accent.as_str()),
            ("text", self.text.as_str()),
            ("muted", self.muted.as_str()),
            ("font", self.font.as_str()),
            ("backdrop", self.backdrop.as_str()),
        ]
    }

    /// Builds a new theme with every provided override applied.
    ///
    /// Blank override values are ignored so a config file cannot erase a
    /// token by accident.
    pub fn with_overrides(&self, overrides: &ThemeOverrides) -> Theme {
        let pick = |base: &String, value: &Option<String>| -> String {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map_or_else(|| base.clone(), str::to_string)
        };

        Theme {
            style: self.style,
            surface: pick(&self.surface, &overrides.surface),
            border: pick(&self.border, &overrides.border),
            radius: pick(&self.radius, &overrides.radius),
            shadow: pick(&self.shadow, &overrides.shadow),
            accent: pick(&self.accent, &overrides.accent),
            text: pick(&self.text, &overrides.text),
            muted: pick(&self.muted, &overrides.muted),
            font: pick(&self.font, &overrides.font),
            backdrop: pick(&self.backdrop, &overrides.backdrop),
            empty_title: pick(&self.empty_title, &overrides.empty_title),
            empty_subtitle: pick(&self.empty_subtitle, &overrides.empty_subtitle),
            folder_style: overrides.folder_style.unwrap_or(self.folder_style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FolderStyle, ThemeOverrides};
    use crate::theme::presets::builtin_theme;
    use crate::theme::style::ThemeStyle;

    #[test]
    fn overrides_replace_only_named_tokens() {
        let base = builtin_theme(ThemeStyle::Zen);
        let overrides = ThemeOverrides {
            accent: Some("text-emerald-700".to_string()),
            radius: Some("   ".to_string()),
            ..ThemeOverrides::default()
        };
        let themed = base.with_overrides(&overrides);

        assert_eq!(themed.accent, "text-emerald-700");
        assert_eq!(themed.radius, base.radius);
        assert_eq!(themed.surface, base.surface);
        assert_eq!(themed.style, ThemeStyle::Zen);
    }

    #[test]
    fn overrides_cover_empty_state_and_folder_style() {
        let base = builtin_theme(ThemeStyle::Paper);
        let themed = base.with_overrides(&ThemeOverrides {
            empty_title: Some("Nothing open".to_string()),
            folder_style: Some(FolderStyle::Ascii),
            ..ThemeOverrides::default()
        });

        assert_eq!(themed.empty_title, "Nothing open");
        assert_eq!(themed.empty_subtitle, base.empty_subtitle);
        assert_eq!(themed.folder_style, FolderStyle::Ascii);
        assert_eq!(base.folder_style, FolderStyle::Modern);
    }

    #[test]
    fn tokens_are_listed_in_stable_order() {
        let names = builtin_theme(ThemeStyle::Paper)
            .tokens()
            .map(|(name, _)| name);
        assert_eq!(names[0], "surface");
        assert_eq!(names[8], "backdrop");
    }
}
