//! Conversion configuration.

use super::index::ListKind;
use super::style::StyleTable;

/// Configuration for document conversion.
///
/// The defaults emit everything the source carries: blank runs,
/// suggestion markers and highlights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Paragraph style → block tag table
    pub styles: StyleTable,
    /// Drop text runs that are empty or only whitespace
    pub skip_blank_runs: bool,
    /// Wrap suggested insertions in `<ins>` and deletions in `<del>`
    pub render_suggestions: bool,
    /// Wrap runs with a background color in `<mark>`
    pub render_highlight: bool,
    /// Let consecutive runs share identical style wrappers
    pub merge_wrappers: bool,
    /// Container used for bullets whose list id is not indexed
    pub fallback_list: ListKind,
}

impl ConvertConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self {
            styles: StyleTable::default(),
            skip_blank_runs: false,
            render_suggestions: true,
            render_highlight: true,
            merge_wrappers: true,
            fallback_list: ListKind::Unordered,
        }
    }

    /// Set the style table.
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    /// Set whether whitespace-only runs are dropped.
    pub fn with_skip_blank_runs(mut self, skip: bool) -> Self {
        self.skip_blank_runs = skip;
        self
    }

    /// Set whether suggestion markers are rendered.
    pub fn with_suggestions(mut self, render: bool) -> Self {
        self.render_suggestions = render;
        self
    }

    /// Set whether highlights are rendered.
    pub fn with_highlight(mut self, render: bool) -> Self {
        self.render_highlight = render;
        self
    }

    /// Set whether consecutive runs share style wrappers.
    pub fn with_merge_wrappers(mut self, merge: bool) -> Self {
        self.merge_wrappers = merge;
        self
    }

    /// Set the container kind for unresolved list ids.
    pub fn with_fallback_list(mut self, kind: ListKind) -> Self {
        self.fallback_list = kind;
        self
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert!(!config.skip_blank_runs);
        assert!(config.render_suggestions);
        assert!(config.render_highlight);
        assert!(config.merge_wrappers);
        assert_eq!(config.fallback_list, ListKind::Unordered);
        assert_eq!(config.styles, StyleTable::default());
    }

    #[test]
    fn test_builder() {
        let config = ConvertConfig::new()
            .with_skip_blank_runs(true)
            .with_suggestions(false)
            .with_highlight(false)
            .with_merge_wrappers(false)
            .with_fallback_list(ListKind::Ordered);
        assert!(config.skip_blank_runs);
        assert!(!config.render_suggestions);
        assert!(!config.render_highlight);
        assert!(!config.merge_wrappers);
        assert_eq!(config.fallback_list, ListKind::Ordered);
    }
}
