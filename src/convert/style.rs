//! Named paragraph style → block tag table.

use rustc_hash::FxHashMap;

use crate::model::NamedStyleType;

/// Tag used for styles the table does not map
pub const DEFAULT_BLOCK_TAG: &str = "div";

/// Immutable mapping from paragraph style to block tag
///
/// Injected into the converter through
/// [`ConvertConfig`](super::ConvertConfig); a miss yields the fallback tag.
/// Empty tags are never stored: an empty entry is dropped and an empty
/// fallback becomes [`DEFAULT_BLOCK_TAG`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    tags: FxHashMap<NamedStyleType, String>,
    fallback: String,
}

impl StyleTable {
    /// A table with no entries: every style maps to `fallback`
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            tags: FxHashMap::default(),
            fallback: DEFAULT_BLOCK_TAG.to_string(),
        }
        .with_fallback(fallback)
    }

    /// Map `style` to `tag`, replacing any previous entry
    ///
    /// An empty `tag` removes the entry, so `style` resolves to the fallback.
    pub fn with_tag(mut self, style: NamedStyleType, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.is_empty() {
            tracing::warn!(?style, "empty block tag, style will use the fallback");
            self.tags.remove(&style);
        } else {
            self.tags.insert(style, tag);
        }
        self
    }

    /// Replace the fallback tag; an empty one resets it to [`DEFAULT_BLOCK_TAG`]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        let fallback = fallback.into();
        self.fallback = if fallback.is_empty() {
            tracing::warn!(default = DEFAULT_BLOCK_TAG, "empty fallback tag");
            DEFAULT_BLOCK_TAG.to_string()
        } else {
            fallback
        };
        self
    }

    /// Block tag for `style`
    pub fn tag_for(&self, style: NamedStyleType) -> &str {
        match self.tags.get(&style) {
            Some(tag) => tag.as_str(),
            None => {
                tracing::trace!(?style, fallback = %self.fallback, "unmapped paragraph style");
                self.fallback.as_str()
            }
        }
    }

    /// Check if `style` has an explicit entry
    pub fn contains(&self, style: NamedStyleType) -> bool {
        self.tags.contains_key(&style)
    }

    /// The tag used on a miss
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        use NamedStyleType::*;

        [
            (Unspecified, "div"),
            (NormalText, "p"),
            (Title, "h1"),
            (Subtitle, "h1"),
            (Heading1, "h1"),
            (Heading2, "h2"),
            (Heading3, "h3"),
            (Heading4, "h4"),
            (Heading5, "h5"),
            (Heading6, "h6"),
        ]
        .into_iter()
        .fold(Self::empty(DEFAULT_BLOCK_TAG), |table, (style, tag)| {
            table.with_tag(style, tag)
        })
    }
}
