//! Themed content containers, one variant per style.
//!
//! # Invariants
//! - `render` is a pure function of `(scope, modifier, children)`.
//! - Children are embedded unchanged; only attributes differ between variants.
//! - The caller modifier extends the base classes, it never replaces them.

use super::classes::{compose_classes, with_modifier};
use super::markup::{Element, Markup};
use crate::theme::{Theme, ThemeScope, ThemeStyle};

/// Capability: render a themed container around arbitrary content.
pub trait PanelWrapper: Send + Sync {
    fn style(&self) -> ThemeStyle;

    /// Layout classes owned by the variant, independent of theme tokens.
    fn structure(&self) -> &'static str;

    /// Full base class list for `theme`.
    fn base_classes(&self, theme: &Theme) -> String {
        compose_classes([
            self.structure(),
            theme.surface.as_str(),
            theme.border.as_str(),
            theme.radius.as_str(),
            theme.shadow.as_str(),
            theme.text.as_str(),
        ])
    }

    fn render(&self, scope: &ThemeScope<'_>, modifier: Option<&str>, children: Markup) -> Markup {
        let classes = with_modifier(&self.base_classes(scope.active()), modifier);
        Element::new("section")
            .class(classes)
            .attr("data-panel", self.style().as_str())
            .child(children)
            .build()
    }
}

/// Catalogue card with a ruled top edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArchivePanel;

impl PanelWrapper for ArchivePanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Archive
    }

    fn structure(&self) -> &'static str {
        "p-5 border-t-4 tracking-wide"
    }
}

/// Drafting sheet: dashed outline, no fill shadow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueprintPanel;

impl PanelWrapper for BlueprintPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Blueprint
    }

    fn structure(&self) -> &'static str {
        "p-4 uppercase text-xs"
    }

    fn base_classes(&self, theme: &Theme) -> String {
        compose_classes([
            self.structure(),
            theme.surface.as_str(),
            theme.border.as_str(),
            theme.radius.as_str(),
            theme.accent.as_str(),
            theme.font.as_str(),
        ])
    }
}

/// Heavy border with hard offset shadow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrutalistPanel;

impl PanelWrapper for BrutalistPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Brutalist
    }

    fn structure(&self) -> &'static str {
        "p-6 -translate-x-1 -translate-y-1"
    }
}

/// Compact dashboard tile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecPanel;

impl PanelWrapper for ExecPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Exec
    }

    fn structure(&self) -> &'static str {
        "p-3 text-sm"
    }
}

/// Frosted translucent card.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlassPanel;

impl PanelWrapper for GlassPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Glass
    }

    fn structure(&self) -> &'static str {
        "p-6 ring-1 ring-inset ring-white/10"
    }
}

/// Plain sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaperPanel;

impl PanelWrapper for PaperPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Paper
    }

    fn structure(&self) -> &'static str {
        "p-4"
    }
}

/// Console pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPanel;

impl PanelWrapper for TerminalPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Terminal
    }

    fn structure(&self) -> &'static str {
        "p-3 whitespace-pre-wrap"
    }

    fn base_classes(&self, theme: &Theme) -> String {
        compose_classes([
            self.structure(),
            theme.surface.as_str(),
            theme.border.as_str(),
            theme.shadow.as_str(),
            theme.text.as_str(),
            theme.font.as_str(),
        ])
    }
}

/// Borderless, airy container.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZenPanel;

impl PanelWrapper for ZenPanel {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Zen
    }

    fn structure(&self) -> &'static str {
        "px-10 py-8 leading-relaxed"
    }

    fn base_classes(&self, theme: &Theme) -> String {
        compose_classes([
            self.structure(),
            theme.surface.as_str(),
            theme.radius.as_str(),
            theme.text.as_str(),
            theme.font.as_str(),
        ])
    }
}

/// Panel variant registered for `style`.
pub fn panel_for(style: ThemeStyle) -> &'static dyn PanelWrapper {
    match style {
        ThemeStyle::Archive => &ArchivePanel,
        ThemeStyle::Blueprint => &BlueprintPanel,
        ThemeStyle::Brutalist => &BrutalistPanel,
        ThemeStyle::Exec => &ExecPanel,
        ThemeStyle::Glass => &GlassPanel,
        ThemeStyle::Paper => &PaperPanel,
        ThemeStyle::Terminal => &TerminalPanel,
        ThemeStyle::Zen => &ZenPanel,
    }
}

#[cfg(test)]
mod tests {
    use super::{panel_for, PanelWrapper, ZenPanel};
    use crate::render::markup::Markup;
    use crate::theme::{builtin_theme, ThemeScope, ThemeStyle};

    #[test]
    fn registered_panel_matches_style() {
        for style in ThemeStyle::ALL {
            assert_eq!(panel_for(style).style(), style);
        }
    }

    #[test]
    fn zen_panel_reads_tokens_from_scope() {
        let theme = builtin_theme(ThemeStyle::Terminal);
        let scope = ThemeScope::provide(theme);
        let markup = ZenPanel.render(&scope, None, Markup::text("x"));
        assert!(markup.as_str().contains("font-mono"));
        assert!(markup.as_str().contains("px-10"));
    }

    #[test]
    fn empty_children_render_empty_container() {
        let scope = ThemeScope::unscoped();
        let markup = ZenPanel.render(&scope, None, Markup::empty());
        assert!(markup.as_str().ends_with("\"zen\"></section>"));
    }
}
