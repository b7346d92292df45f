//! Text node type
//!
//! Literal text content in the output tree. Escaping happens at render time.

// =============================================================================
// Text
// =============================================================================

/// Text content node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    /// Text content, unescaped
    pub content: String,
}

impl Text {
    /// Create a new text node
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Check if text content is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
