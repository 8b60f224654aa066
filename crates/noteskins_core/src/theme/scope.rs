//! Scoped binding of the active theme to one render subtree.
//!
//! # Invariants
//! - Exactly one theme is active for a scope.
//! - An unscoped render resolves to `default_theme()`, never to nothing.
//! - Scopes are plain borrowed values; nothing global is mutated.

use super::definition::Theme;
use super::presets::default_theme;

/// Active theme handed explicitly through every render call.
#[derive(Debug, Clone, Copy)]
pub struct ThemeScope<'t> {
    theme: Option<&'t Theme>,
}

impl<'t> ThemeScope<'t> {
    /// Binds `theme` to the subtree rendered with this scope.
    pub fn provide(theme: &'t Theme) -> Self {
        Self { theme: Some(theme) }
    }

    /// A scope with no provided theme.
    pub fn unscoped() -> Self {
        Self { theme: None }
    }

    /// Returns an inner scope overriding the active theme.
    ///
    /// The receiver is left untouched, so sibling subtrees keep rendering
    /// with the outer theme.
    pub fn nest<'n>(&self, theme: &'n Theme) -> ThemeScope<'n> {
        ThemeScope::provide(theme)
    }

    /// Theme every wrapper in this subtree must read tokens from.
    pub fn active(&self) -> &'t Theme {
        match self.theme {
            Some(theme) => theme,
            None => default_theme(),
        }
    }

    /// Whether a theme was provided explicitly.
    pub fn is_provided(&self) -> bool {
        self.theme.is_some()
    }
}

impl Default for ThemeScope<'_> {
    fn default() -> Self {
        Self::unscoped()
    }
}
