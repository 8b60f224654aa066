//! `styles` subcommand.

use crate::render::load_registry;
use anyhow::Result;
use clap::Args;
use noteskins_core::SkinRegistry;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct StylesArgs {
    /// TOML file with per-style token overrides
    #[arg(long, value_name = "FILE")]
    pub theme_config: Option<PathBuf>,
}

impl StylesArgs {
    pub fn execute(&self) -> Result<()> {
        let registry = load_registry(self.theme_config.as_deref())?;
        print!("{}", describe(&registry));
        Ok(())
    }
}

fn describe(registry: &SkinRegistry) -> String {
    let mut out = String::new();
    for skin in registry.skins() {
        let style = skin.style();
        let marker = if style == registry.default_style() {
            " [default]"
        } else {
            ""
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{style} ({}){marker}", style.label());
        for (name, value) in skin.theme().tokens() {
            let _ = writeln!(out, "  {name:<9} {value}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::describe;
    use noteskins_core::SkinRegistry;

    #[test]
    fn lists_every_style_and_marks_default() {
        let text = describe(&SkinRegistry::builtin());
        assert!(text.contains("paper (Paper) [default]"));
        assert!(text.contains("exec (Executive)\n"));
        assert_eq!(text.matches("  backdrop  ").count(), 8);
    }
}
