//! Visual style identifiers.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the interchangeable visual presentations of the notes page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeStyle {
    /// Sepia, catalogue-card look.
    Archive,
    /// Technical drawing on a blue grid.
    Blueprint,
    /// Hard black borders and offset shadows.
    Brutalist,
    /// Dense dashboard for power users.
    Exec,
    /// Frosted translucent surfaces.
    Glass,
    /// Plain off-white page. Used when no theme is provided.
    Paper,
    /// Monospace green-on-black console.
    Terminal,
    /// Sparse, low-contrast, generous whitespace.
    Zen,
}

impl ThemeStyle {
    /// Every style in stable declaration order.
    pub const ALL: [ThemeStyle; 8] = [
        Self::Archive,
        Self::Blueprint,
        Self::Brutalist,
        Self::Exec,
        Self::Glass,
        Self::Paper,
        Self::Terminal,
        Self::Zen,
    ];

    /// Stable lowercase name used in config files, CLI flags and markup.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Archive => "archive",
            Self::Blueprint => "blueprint",
            Self::Brutalist => "brutalist",
            Self::Exec => "exec",
            Self::Glass => "glass",
            Self::Paper => "paper",
            Self::Terminal => "terminal",
            Self::Zen => "zen",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Blueprint => "Blueprint",
            Self::Brutalist => "Brutalist",
            Self::Exec => "Executive",
            Self::Glass => "Glass",
            Self::Paper => "Paper",
            Self::Terminal => "Terminal",
            Self::Zen => "Zen",
        }
    }
}

impl Display for ThemeStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeStyle {
    type Err = StyleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| StyleParseError(value.trim().to_string()))
    }
}

/// Unknown style name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParseError(pub String);

impl Display for StyleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let known = ThemeStyle::ALL
            .iter()
            .map(|style| style.as_str())
            .collect::<Vec<_>>()
            .join("|");
        write!(f, "unknown style `{}`; expected {known}", self.0)
    }
}

impl Error for StyleParseError {}

#[cfg(test)]
mod tests {
    use super::ThemeStyle;

    #[test]
    fn parses_case_insensitive_names() {
        assert_eq!(" ZEN ".parse::<ThemeStyle>(), Ok(ThemeStyle::Zen));
        assert_eq!("exec".parse::<ThemeStyle>(), Ok(ThemeStyle::Exec));
    }

    #[test]
    fn every_style_round_trips_through_its_name() {
        for style in ThemeStyle::ALL {
            assert_eq!(style.as_str().parse::<ThemeStyle>(), Ok(style));
        }
    }

    #[test]
    fn unknown_name_lists_known_styles() {
        let err = "neon".parse::<ThemeStyle>().expect_err("neon is not a style");
        let message = err.to_string();
        assert!(message.contains("neon"));
        assert!(message.contains("terminal"));
    }
}
