//! Presentation layer: markup, themed wrappers and the shared page composer.
//!
//! # Responsibility
//! - Produce escape-safe HTML fragments.
//! - Implement the panel and layout capabilities for every style.
//! - Compose the notes page from injected wrappers.
//!
//! # Invariants
//! - Every render call receives its theme explicitly through `ThemeScope`.
//! - Rendering is synchronous and side-effect free apart from logging.

pub mod classes;
pub mod composer;
pub mod layout;
pub mod markup;
pub mod panel;
pub mod tree;

pub use composer::{NotesPageLayout, NotesView, PageData, PageRequest, RenderedPage, ViewState};
pub use layout::{layout_for, LayoutSlots, LayoutWrapper};
pub use markup::{escape_html, Element, Markup};
pub use panel::{panel_for, PanelWrapper};
