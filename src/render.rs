//! HTML Rendering
//!
//! Serializes converted trees to HTML strings or writers.

use std::io::Write;

use crate::attr::Attrs;
use crate::error::HtmlResult;
use crate::node::{Document, Element, Node};

// =============================================================================
// RenderConfig
// =============================================================================

/// Configuration for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Wrap the fragment in a complete page (doctype, head, title, body).
    pub standalone: bool,
}

impl RenderConfig {
    /// Bare fragment: only the converted content.
    pub const FRAGMENT: Self = Self { standalone: false };

    /// Complete page titled after the document.
    pub const PAGE: Self = Self { standalone: true };

    /// Create a new config.
    pub fn new(standalone: bool) -> Self {
        Self { standalone }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::FRAGMENT
    }
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a document to HTML string.
pub fn render_document(doc: &Document, config: &RenderConfig) -> String {
    let mut output = String::new();
    if config.standalone {
        output.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\" /><title>");
        output.push_str(&escape_html(&doc.title));
        output.push_str("</title></head><body>");
    }
    for child in &doc.children {
        render_node(child, &mut output);
    }
    if config.standalone {
        output.push_str("</body></html>\n");
    }
    output
}

/// Render a document to HTML bytes.
pub fn render_document_bytes(doc: &Document, config: &RenderConfig) -> Vec<u8> {
    render_document(doc, config).into_bytes()
}

/// Render a document into a writer.
pub fn write_document(doc: &Document, config: &RenderConfig, mut writer: impl Write) -> HtmlResult<()> {
    writer.write_all(render_document(doc, config).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Render an element to HTML.
fn render_element(elem: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&elem.tag);

    // Render attributes
    render_attrs(&elem.attrs, output);

    // Void elements
    if is_void_element(&elem.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    // Render children
    for child in &elem.children {
        render_node(child, output);
    }

    output.push_str("</");
    output.push_str(&elem.tag);
    output.push('>');
}

/// Render a node to HTML.
fn render_node(node: &Node, output: &mut String) {
    match node {
        Node::Element(elem) => render_element(elem, output),
        Node::Text(text) => output.push_str(&escape_html(&text.content)),
    }
}

/// Render attributes to HTML.
fn render_attrs(attrs: &Attrs, output: &mut String) {
    for (name, value) in attrs.iter() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
