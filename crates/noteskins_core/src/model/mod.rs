//! Note records as seen by the presentation layer.
//!
//! # Responsibility
//! - Define the note/folder shapes passed from a notes source to renderers.
//! - Derive list projections (titles, previews) from raw note content.
//!
//! # Invariants
//! - Records are plain data; rendering never mutates them.

pub mod note;
pub mod preview;
