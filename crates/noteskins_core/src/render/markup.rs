//! Escape-safe HTML fragments.
//!
//! # Invariants
//! - Text and attribute values are always escaped on the way in.
//! - `Markup` values are only produced by escaping or by `Element::build`.

use std::fmt::{Display, Formatter};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "link", "meta"];

/// Rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Escaped text node.
    pub fn text(value: &str) -> Self {
        Self(escape_html(value))
    }

    /// Joins fragments in order.
    pub fn concat(parts: impl IntoIterator<Item = Markup>) -> Self {
        let mut joined = Self::empty();
        for part in parts {
            joined.push(part);
        }
        joined
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Builder for one element with escaped attributes.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Markup,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Markup::empty(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attrs.push((name, value.as_ref().to_string()));
        self
    }

    /// Adds a `class` attribute unless `classes` is blank.
    pub fn class(self, classes: impl AsRef<str>) -> Self {
        let classes = classes.as_ref().trim();
        if classes.is_empty() {
            return self;
        }
        self.attr("class", classes)
    }

    pub fn child(mut self, markup: Markup) -> Self {
        self.children.push(markup);
        self
    }

    pub fn text(self, value: &str) -> Self {
        self.child(Markup::text(value))
    }

    pub fn build(self) -> Markup {
        let mut out = String::with_capacity(32 + self.children.0.len());
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_html(value));
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return Markup(out);
        }
        out.push_str(&self.children.0);
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
        Markup(out)
    }
}

/// Wraps a page fragment into a standalone HTML document.
pub fn document(title: &str, body_classes: &str, body: Markup) -> Markup {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8").build())
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1")
                .build(),
        )
        .child(Element::new("title").text(title).build())
        .build();
    let html = Element::new("html")
        .attr("lang", "en")
        .child(head)
        .child(Element::new("body").class(body_classes).child(body).build())
        .build();

    let mut out = String::from("<!DOCTYPE html>\n");
    out.push_str(&html.0);
    out.push('\n');
    Markup(out)
}
