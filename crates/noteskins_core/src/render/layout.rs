//! Themed page shells, one variant per style.
//!
//! A layout owns the frame (header, navigation, main area) and embeds the
//! slot contents without inspecting them.

use super::classes::compose_classes;
use super::markup::{Element, Markup};
use crate::theme::{Theme, ThemeScope, ThemeStyle};

/// Content handed to a layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutSlots {
    /// Plain-text page heading.
    pub title: String,
    /// Navigation content, usually the folder panel.
    pub nav: Markup,
    /// Main page content.
    pub body: Markup,
}

/// Where a variant places the navigation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    Sidebar,
    Top,
    Footer,
}

/// Structural classes for every part of one shell.
#[derive(Debug, Clone, Copy)]
pub struct ShellClasses {
    pub root: &'static str,
    pub header: &'static str,
    pub heading: &'static str,
    pub nav: &'static str,
    pub main: &'static str,
    /// Decorative text shown before the title, e.g. a shell prompt.
    pub title_prefix: Option<&'static str>,
    pub nav_placement: NavPlacement,
}

/// Capability: render a themed page shell around arbitrary slots.
pub trait LayoutWrapper: Send + Sync {
    fn style(&self) -> ThemeStyle;

    fn shell(&self) -> ShellClasses;

    fn render(&self, scope: &ThemeScope<'_>, slots: LayoutSlots) -> Markup {
        render_shell(self.style(), &self.shell(), scope.active(), slots)
    }
}

fn render_shell(
    style: ThemeStyle,
    shell: &ShellClasses,
    theme: &Theme,
    slots: LayoutSlots,
) -> Markup {
    let mut heading = Element::new("h1").class(compose_classes([shell.heading, theme.accent.as_str()]));
    if let Some(prefix) = shell.title_prefix {
        heading = heading.child(
            Element::new("span")
                .class(theme.muted.as_str())
                .attr("aria-hidden", "true")
                .text(prefix)
                .build(),
        );
    }
    let heading = heading.text(&slots.title).build();

    let header = Element::new("header")
        .class(compose_classes([shell.header, theme.border.as_str()]))
        .child(heading);
    let nav = Element::new("nav")
        .class(shell.nav)
        .attr("aria-label", "Folders")
        .child(slots.nav)
        .build();
    let main = Element::new("main").class(shell.main).child(slots.body);

    let root = Element::new("div")
        .class(compose_classes([
            shell.root,
            theme.backdrop.as_str(),
            theme.text.as_str(),
            theme.font.as_str(),
        ]))
        .attr("data-layout", style.as_str());

    match shell.nav_placement {
        NavPlacement::Top => root
            .child(header.child(nav).build())
            .child(main.build())
            .build(),
        NavPlacement::Sidebar => {
            let frame = Element::new("div")
                .class("flex flex-1 gap-6")
                .child(nav)
                .child(main.build())
                .build();
            root.child(header.build()).child(frame).build()
        }
        NavPlacement::Footer => root
            .child(header.build())
            .child(main.build())
            .child(Element::new("footer").class("mt-16").child(nav).build())
            .build(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArchiveLayout;

impl LayoutWrapper for ArchiveLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Archive
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen p-8",
            header: "mb-6 pb-3 border-b-2 border-double",
            heading: "text-3xl italic",
            nav: "w-64 shrink-0",
            main: "flex-1 space-y-6",
            title_prefix: Some("No. "),
            nav_placement: NavPlacement::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BlueprintLayout;

impl LayoutWrapper for BlueprintLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Blueprint
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen p-6 bg-[linear-gradient(#1e3a8a_1px,transparent_1px)] bg-[size:24px_24px]",
            header: "mb-4 pb-2 border-b",
            heading: "text-xl uppercase tracking-[0.3em]",
            nav: "w-56 shrink-0",
            main: "flex-1 grid gap-4",
            title_prefix: Some("SHEET / "),
            nav_placement: NavPlacement::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrutalistLayout;

impl LayoutWrapper for BrutalistLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Brutalist
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen p-4",
            header: "mb-8 p-4 border-b-8",
            heading: "text-6xl uppercase",
            nav: "mt-4 flex gap-4",
            main: "grid gap-8",
            title_prefix: None,
            nav_placement: NavPlacement::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ExecLayout;

impl LayoutWrapper for ExecLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Exec
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen flex flex-col",
            header: "px-6 py-3 border-b flex items-center justify-between",
            heading: "text-lg font-semibold",
            nav: "w-60 shrink-0 py-4",
            main: "flex-1 grid grid-cols-2 gap-4 p-4",
            title_prefix: None,
            nav_placement: NavPlacement::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlassLayout;

impl LayoutWrapper for GlassLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Glass
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen p-10",
            header: "mb-8 px-6 py-4 rounded-2xl backdrop-blur-md",
            heading: "text-4xl font-semibold drop-shadow",
            nav: "mt-3 flex flex-wrap gap-3",
            main: "grid gap-6 lg:grid-cols-2",
            title_prefix: None,
            nav_placement: NavPlacement::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PaperLayout;

impl LayoutWrapper for PaperLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Paper
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen max-w-5xl mx-auto p-8",
            header: "mb-6 pb-4 border-b",
            heading: "text-2xl font-semibold",
            nav: "w-56 shrink-0",
            main: "flex-1 space-y-4",
            title_prefix: None,
            nav_placement: NavPlacement::Sidebar,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalLayout;

impl LayoutWrapper for TerminalLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Terminal
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen p-4",
            header: "mb-3 pb-1 border-b",
            heading: "text-base",
            nav: "mt-1 flex gap-4",
            main: "space-y-3",
            title_prefix: Some("~/notes $ "),
            nav_placement: NavPlacement::Top,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ZenLayout;

impl LayoutWrapper for ZenLayout {
    fn style(&self) -> ThemeStyle {
        ThemeStyle::Zen
    }

    fn shell(&self) -> ShellClasses {
        ShellClasses {
            root: "min-h-screen max-w-3xl mx-auto px-6 py-24",
            header: "mb-16 text-center",
            heading: "text-2xl tracking-widest",
            nav: "flex justify-center gap-6 text-sm",
            main: "space-y-16",
            title_prefix: None,
            nav_placement: NavPlacement::Footer,
        }
    }
}

/// Layout variant registered for `style`.
pub fn layout_for(style: ThemeStyle) -> &'static dyn LayoutWrapper {
    match style {
        ThemeStyle::Archive => &ArchiveLayout,
        ThemeStyle::Blueprint => &BlueprintLayout,
        ThemeStyle::Brutalist => &BrutalistLayout,
        ThemeStyle::Exec => &ExecLayout,
        ThemeStyle::Glass => &GlassLayout,
        ThemeStyle::Paper => &PaperLayout,
        ThemeStyle::Terminal => &TerminalLayout,
        ThemeStyle::Zen => &ZenLayout,
    }
}
