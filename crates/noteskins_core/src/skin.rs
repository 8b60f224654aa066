//! Style table: which theme, layout and panel make up each skin.
//!
//! # Responsibility
//! - Select one theme + layout + panel per style from a single table.
//! - Apply theme config overrides once, at registry construction.
//!
//! # Invariants
//! - Every `ThemeStyle` has exactly one registered skin.
//! - Skins are immutable after construction and safe to share across threads.

use crate::render::{
    layout_for, panel_for, LayoutWrapper, NotesPageLayout, PageRequest, PanelWrapper,
    RenderedPage,
};
use crate::source::NotesSource;
use crate::theme::{
    shared_builtin_theme, StyleParseError, Theme, ThemeConfig, ThemeScope, ThemeStyle,
    DEFAULT_STYLE,
};
use log::info;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// One themed presentation of the notes page.
#[derive(Clone)]
pub struct Skin {
    theme: Arc<Theme>,
    layout: &'static dyn LayoutWrapper,
    panel: &'static dyn PanelWrapper,
}

impl Debug for Skin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skin")
            .field("style", &self.theme.style)
            .field("layout", &self.layout.style())
            .field("panel", &self.panel.style())
            .finish()
    }
}

impl Skin {
    fn new(theme: Arc<Theme>) -> Self {
        let style = theme.style;
        Self {
            theme,
            layout: layout_for(style),
            panel: panel_for(style),
        }
    }

    pub fn style(&self) -> ThemeStyle {
        self.theme.style
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn layout(&self) -> &'static dyn LayoutWrapper {
        self.layout
    }

    pub fn panel(&self) -> &'static dyn PanelWrapper {
        self.panel
    }

    /// Scope binding this skin's theme.
    pub fn scope(&self) -> ThemeScope<'_> {
        ThemeScope::provide(&self.theme)
    }

    /// Renders the notes page under this skin.
    pub fn render_page<S: NotesSource + ?Sized>(
        &self,
        source: &S,
        request: &PageRequest,
    ) -> RenderedPage {
        NotesPageLayout::new(self.layout, self.panel).render(&self.scope(), source, request)
    }
}

/// Configuration table of skins keyed by style.
#[derive(Debug, Clone)]
pub struct SkinRegistry {
    default_style: ThemeStyle,
    skins: BTreeMap<ThemeStyle, Skin>,
}

impl Default for SkinRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkinRegistry {
    /// Registry with built-in themes only.
    pub fn builtin() -> Self {
        Self::from_config(&ThemeConfig::default())
    }

    /// Registry with config overrides applied.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let skins = ThemeStyle::ALL
            .into_iter()
            .map(|style| {
                let base = shared_builtin_theme(style);
                let theme = match config.overrides.get(&style) {
                    Some(overrides) => Arc::new(base.with_overrides(overrides)),
                    None => base,
                };
                (style, Skin::new(theme))
            })
            .collect::<BTreeMap<_, _>>();

        let default_style = config.default_style.unwrap_or(DEFAULT_STYLE);
        info!(
            "event=skin_registry_init module=skin status=ok default_style={} overridden_styles={}",
            default_style,
            config.overrides.len()
        );
        Self {
            default_style,
            skins,
        }
    }

    pub fn default_style(&self) -> ThemeStyle {
        self.default_style
    }

    pub fn skin(&self, style: ThemeStyle) -> &Skin {
        &self.skins[&style]
    }

    pub fn default_skin(&self) -> &Skin {
        self.skin(self.default_style)
    }

    /// Looks a skin up by its config/CLI name.
    pub fn skin_by_name(&self, name: &str) -> Result<&Skin, StyleParseError> {
        let style = name.parse::<ThemeStyle>()?;
        Ok(self.skin(style))
    }

    /// Every skin in style order.
    pub fn skins(&self) -> impl Iterator<Item = &Skin> {
        self.skins.values()
    }

    pub fn render_page<S: NotesSource + ?Sized>(
        &self,
        style: ThemeStyle,
        source: &S,
        request: &PageRequest,
    ) -> RenderedPage {
        self.skin(style).render_page(source, request)
    }
}

#[cfg(test)]
mod tests {
    use super::SkinRegistry;
    use crate::theme::{builtin_theme, ThemeConfig, ThemeOverrides, ThemeStyle};

    #[test]
    fn builtin_registry_has_one_skin_per_style() {
        let registry = SkinRegistry::builtin();
        let styles = registry.skins().map(|skin| skin.style()).collect::<Vec<_>>();
        assert_eq!(styles, ThemeStyle::ALL.to_vec());
        for skin in registry.skins() {
            assert_eq!(skin.layout().style(), skin.style());
            assert_eq!(skin.panel().style(), skin.style());
        }
        assert_eq!(registry.default_style(), ThemeStyle::Paper);
    }

    #[test]
    fn config_overrides_only_touch_named_style() {
        let mut config = ThemeConfig {
            default_style: Some(ThemeStyle::Zen),
            ..ThemeConfig::default()
        };
        config.overrides.insert(
            ThemeStyle::Zen,
            ThemeOverrides {
                accent: Some("text-emerald-700".to_string()),
                ..ThemeOverrides::default()
            },
        );

        let registry = SkinRegistry::from_config(&config);
        assert_eq!(registry.default_skin().style(), ThemeStyle::Zen);
        assert_eq!(registry.skin(ThemeStyle::Zen).theme().accent, "text-emerald-700");
        assert_eq!(
            registry.skin(ThemeStyle::Paper).theme(),
            builtin_theme(ThemeStyle::Paper)
        );
        assert_ne!(builtin_theme(ThemeStyle::Zen).accent, "text-emerald-700");
    }

    #[test]
    fn lookup_by_name_rejects_unknown_style() {
        let registry = SkinRegistry::builtin();
        assert_eq!(
            registry.skin_by_name("Glass").expect("glass skin").style(),
            ThemeStyle::Glass
        );
        assert!(registry.skin_by_name("neon").is_err());
    }
}
