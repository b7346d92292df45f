//! Document type and related utilities
//!
//! The root container of a converted tree, with query and traversal APIs.

use crate::hash::StableHasher;

use super::{Children, Element, Node};

// =============================================================================
// Document
// =============================================================================

/// Root of an HTML tree
///
/// Unlike [`Element`], the root has no tag of its own: it renders as the
/// concatenation of its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Title carried over from the source document
    pub title: String,
    /// Top-level nodes
    pub children: Children,
}

impl Document {
    /// Create an empty document
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Children::new(),
        }
    }

    /// Check if the document has no top-level nodes
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Query API
    // ─────────────────────────────────────────────────────────────────────────

    /// Find first element matching predicate (depth-first search)
    pub fn find_element<F>(&self, predicate: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().find(|e| predicate(e))
    }

    /// Find all elements matching predicate, in document order
    pub fn find_all<F>(&self, predicate: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.iter_elements().filter(|e| predicate(e)).collect()
    }

    /// All elements with the given tag, in document order
    pub fn find_tagged(&self, tag: &str) -> Vec<&Element> {
        self.find_all(|e| e.tag == tag)
    }

    /// Check if any element matches predicate
    pub fn has_element<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Element) -> bool,
    {
        self.find_element(predicate).is_some()
    }

    /// Count total elements in document
    pub fn element_count(&self) -> usize {
        self.iter_elements().count()
    }

    /// Iterate over all elements (depth-first, document order)
    pub fn iter_elements(&self) -> ElementIterator<'_> {
        ElementIterator::new(&self.children)
    }

    /// Concatenated text of the whole document
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => result.push_str(&t.content),
                Node::Element(e) => result.push_str(&e.text_content()),
            }
        }
        result
    }

    /// Collect statistics about the document
    pub fn collect_stats(&self) -> Stats {
        let mut stats = Stats::default();
        for child in &self.children {
            Self::collect_stats_recursive(child, &mut stats);
        }
        stats
    }

    fn collect_stats_recursive(node: &Node, stats: &mut Stats) {
        let elem = match node {
            Node::Text(_) => {
                stats.text_count += 1;
                return;
            }
            Node::Element(elem) => elem,
        };

        stats.element_count += 1;
        match elem.tag.as_str() {
            "ul" | "ol" => stats.list_count += 1,
            "table" => stats.table_count += 1,
            "img" => stats.image_count += 1,
            "a" => stats.link_count += 1,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => stats.heading_count += 1,
            _ => {}
        }

        for child in &elem.children {
            Self::collect_stats_recursive(child, stats);
        }
    }

    /// Deterministic structural digest of the tree
    ///
    /// Two documents have the same fingerprint iff they have the same
    /// title and the same tags, attributes and text in the same order.
    pub fn fingerprint(&self) -> u64 {
        StableHasher::new()
            .update_str(&self.title)
            .update_children(&self.children)
            .finish()
    }
}

// =============================================================================
// ElementIterator - depth-first element traversal
// =============================================================================

/// Depth-first iterator over elements
pub struct ElementIterator<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> ElementIterator<'a> {
    fn new(roots: &'a Children) -> Self {
        let stack = roots.iter().rev().filter_map(Node::as_element).collect();
        Self { stack }
    }
}

impl<'a> Iterator for ElementIterator<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        for child in elem.children.iter().rev() {
            if let Some(child_elem) = child.as_element() {
                self.stack.push(child_elem);
            }
        }
        Some(elem)
    }
}

// =============================================================================
// Stats - document statistics
// =============================================================================

/// Document statistics collected from traversal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub element_count: usize,
    pub text_count: usize,
    pub heading_count: usize,
    pub list_count: usize,
    pub table_count: usize,
    pub image_count: usize,
    pub link_count: usize,
}
