//! Theme configuration file loading.
//!
//! # Responsibility
//! - Parse an optional TOML file with per-style token overrides.
//! - Resolve style names before any theme is built.
//!
//! # Invariants
//! - Unknown style names and unknown token keys are rejected, not ignored.
//! - Two keys naming the same style (`zen`, `Zen`) are rejected.
//! - Loading never mutates built-in themes.

use super::definition::ThemeOverrides;
use super::style::{StyleParseError, ThemeStyle};
use log::{error, info};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Errors from theme configuration loading.
#[derive(Debug)]
pub enum ThemeConfigError {
    /// Config file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config text is not valid TOML for the expected shape.
    Parse(toml::de::Error),
    /// A style key or `default_style` names no known style.
    UnknownStyle(StyleParseError),
    /// Two `[styles.*]` keys resolve to the same style.
    DuplicateStyle(ThemeStyle),
}

impl Display for ThemeConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read theme config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid theme config: {err}"),
            Self::UnknownStyle(err) => write!(f, "invalid theme config: {err}"),
            Self::DuplicateStyle(style) => {
                write!(f, "invalid theme config: style `{style}` is configured twice")
            }
        }
    }
}

impl Error for ThemeConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::UnknownStyle(err) => Some(err),
            Self::DuplicateStyle(_) => None,
        }
    }
}

impl From<toml::de::Error> for ThemeConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<StyleParseError> for ThemeConfigError {
    fn from(value: StyleParseError) -> Self {
        Self::UnknownStyle(value)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawThemeConfig {
    #[serde(default)]
    default_style: Option<String>,
    #[serde(default)]
    styles: BTreeMap<String, ThemeOverrides>,
}

/// Parsed theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Style used by callers that do not name one.
    pub default_style: Option<ThemeStyle>,
    /// Token overrides keyed by style.
    pub overrides: BTreeMap<ThemeStyle, ThemeOverrides>,
}

impl ThemeConfig {
    /// Parses configuration from TOML text.
    ///
    /// ```toml
    /// default_style = "zen"
    ///
    /// [styles.zen]
    /// accent = "text-emerald-700"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ThemeConfigError> {
        let raw: RawThemeConfig = toml::from_str(text)?;

        let default_style = raw
            .default_style
            .as_deref()
            .map(str::parse::<ThemeStyle>)
            .transpose()?;

        let mut seen = BTreeSet::new();
        let mut overrides = BTreeMap::new();
        for (name, value) in raw.styles {
            let style = name.parse::<ThemeStyle>()?;
            if !seen.insert(style) {
                return Err(ThemeConfigError::DuplicateStyle(style));
            }
            if !value.is_empty() {
                overrides.insert(style, value);
            }
        }

        Ok(Self {
            default_style,
            overrides,
        })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Side effects
    /// - Emits `theme_config_load` logging events.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            error!(
                "event=theme_config_load module=theme status=error error_code=read_failed error={}",
                source
            );
            ThemeConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        match Self::from_toml_str(&text) {
            Ok(config) => {
                info!(
                    "event=theme_config_load module=theme status=ok overridden_styles={}",
                    config.overrides.len()
                );
                Ok(config)
            }
            Err(err) => {
                error!(
                    "event=theme_config_load module=theme status=error error_code=invalid_config error={}",
                    err
                );
                Err(err)
            }
        }
    }
}
