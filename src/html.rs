//! HTML emission: child content nodes and text escaping.
//!
//! Components render to plain HTML text. This module holds the escaping
//! helpers, the shared container-element writer, and [`Node`] — the child
//! content of an item: escaped text, pre-built raw markup, or a nested
//! grid.

use crate::class_list::ClassList;
use crate::component::{Component, RenderContext};
use crate::widgets::Grid;

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape text content: `&`, `<`, `>`.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape an attribute value: text escapes plus `"`.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Container element
// ---------------------------------------------------------------------------

/// Write the opening `<div>` of a container with its class attribute and,
/// when non-empty, its id attribute.
pub(crate) fn write_container_open(out: &mut String, classes: &ClassList, id: &str) {
    out.push_str("<div class=\"");
    out.push_str(&escape_attr(&classes.join()));
    out.push('"');
    if !id.is_empty() {
        out.push_str(" id=\"");
        out.push_str(&escape_attr(id));
        out.push('"');
    }
    out.push('>');
}

/// Write the closing tag of a container.
pub(crate) fn write_container_close(out: &mut String) {
    out.push_str("</div>");
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Child content of an item.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain text, escaped on render.
    Text(String),
    /// Pre-built markup, written as-is.
    Raw(String),
    /// A nested grid. Nesting starts a fresh render context: a surrounding
    /// grid's default size applies only to its immediate items.
    Grid(Grid),
}

impl Node {
    /// Plain text content.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Raw markup content.
    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub(crate) fn render_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => out.push_str(&escape_text(content)),
            Node::Raw(markup) => out.push_str(markup),
            Node::Grid(grid) => grid.render_html(&RenderContext::new(), out),
        }
    }
}

impl From<Grid> for Node {
    fn from(grid: Grid) -> Self {
        Node::Grid(grid)
    }
}
