//! Element type - HTML elements with ordered attributes and children
//!
//! The core building block of the output tree.

use crate::attr::{Attrs, AttrsExt};

use super::{Children, ChildrenExt, Node};

// =============================================================================
// Element
// =============================================================================

/// HTML element with attributes and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// HTML tag name
    pub tag: String,
    /// Element attributes
    pub attrs: Attrs,
    /// Child nodes
    pub children: Children,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Children::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builder API
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace all attributes
    pub fn with_attrs(mut self, attrs: Attrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Add or update a single attribute
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Append a child element
    pub fn child(mut self, elem: Element) -> Self {
        self.children.push(Node::element(elem));
        self
    }

    /// Append a text child
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::text(content));
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // In-place mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Append a child element, returning a reference to it
    pub fn push_elem(&mut self, elem: Element) -> &mut Element {
        self.children.push_element(elem)
    }

    /// Append a text child
    pub fn push_text(&mut self, content: impl Into<String>) {
        self.children.push_text(content);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute access
    // ─────────────────────────────────────────────────────────────────────────

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Check if attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.has_attr(name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Other helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Check if element has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children (all node types)
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// First direct child that is an element
    pub fn first_child(&self) -> Option<&Element> {
        self.children_elements().next()
    }

    /// Iterate over child element references
    pub fn children_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Direct child elements with the given tag
    pub fn children_tagged<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children_elements().filter(move |e| e.tag == tag)
    }

    /// Get text content of this element (concatenated from all text nodes)
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => buf.push_str(&t.content),
                Node::Element(e) => e.collect_text(buf),
            }
        }
    }
}
