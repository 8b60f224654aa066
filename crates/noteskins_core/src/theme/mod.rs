//! Theme definitions and the scoped active-theme binding.
//!
//! # Responsibility
//! - Name the available visual styles.
//! - Provide one immutable token set per style, optionally overridden by config.
//! - Carry the active theme explicitly through render calls.
//!
//! # Invariants
//! - Themes are never mutated after construction.
//! - Renderers read tokens only from the `ThemeScope` they are given.

pub mod config;
pub mod definition;
pub mod presets;
pub mod scope;
pub mod style;

pub use config::{ThemeConfig, ThemeConfigError};
pub use definition::{FolderStyle, Theme, ThemeOverrides};
pub use presets::{builtin_theme, default_theme, shared_builtin_theme, DEFAULT_STYLE};
pub use scope::ThemeScope;
pub use style::{StyleParseError, ThemeStyle};
