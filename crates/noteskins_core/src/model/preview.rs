//! Plain-text summary of a note for list panels.
//!
//! # Invariants
//! - Block markers, emphasis marks, link targets and images never reach the text.
//! - Hyphens inside words are kept (`well-known`).
//! - Text holds at most `PREVIEW_MAX_CHARS` characters before the ellipsis and
//!   is cut at a word boundary when the cap falls inside a word.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;
const ELLIPSIS: char = '…';

static IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(\s*([^)\s]+)[^)]*\)").expect("valid image regex"));
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("valid link regex"));
static RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*_][ \t]*){3,}$").expect("valid rule regex"));
static BLOCK_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:#{1,6}|>+|[-*+]|\d+[.)])(?:[ \t]+|$)").expect("valid marker regex")
});
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*`~]+").expect("valid emphasis regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Summary shown under a note title in list panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePreview {
    pub text: Option<String>,
    /// Path of the first embedded image.
    pub image: Option<String>,
}

/// Builds the list summary for markdown `content`.
pub fn derive_preview(content: &str) -> NotePreview {
    let image = IMAGE_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|path| path.as_str().to_string());

    let text = IMAGE_RE.replace_all(content, " ");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = RULE_RE.replace_all(&text, " ");
    let text = BLOCK_MARKER_RE.replace_all(&text, "");
    let text = EMPHASIS_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    let text = text.trim();

    NotePreview {
        text: (!text.is_empty()).then(|| cap_at_word(text, PREVIEW_MAX_CHARS)),
        image,
    }
}

fn cap_at_word(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head = text.chars().take(max_chars).collect::<String>();
    let ends_on_boundary = text
        .chars()
        .nth(max_chars)
        .map_or(true, char::is_whitespace);

    let kept = match head.rfind(' ') {
        Some(space) if !ends_on_boundary && space > 0 => &head[..space],
        _ => head.as_str(),
    };
    let mut capped = kept.trim_end().to_string();
    capped.push(ELLIPSIS);
    capped
}
