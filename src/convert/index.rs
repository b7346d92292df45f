//! Lookup indices built from the document registries
//!
//! Both indices are built once per conversion and only read afterwards, so
//! the traversal resolves list ids and inline object ids in O(1).

use rustc_hash::FxHashMap;

use crate::attr::{Attrs, attrs_from_pairs};
use crate::model::{InlineObject, List};

// =============================================================================
// ListKind / ListIndex
// =============================================================================

/// How a list renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `<ol>`
    Ordered,
    /// `<ul>`
    #[default]
    Unordered,
}

impl ListKind {
    /// Container tag for items of this kind
    pub const fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}

/// List id → rendered list kind
#[derive(Debug, Clone, Default)]
pub struct ListIndex {
    kinds: FxHashMap<String, ListKind>,
}

impl ListIndex {
    /// Index every list that has properties.
    ///
    /// A list is ordered iff its outermost nesting level declares a glyph
    /// type. Lists without properties are left out.
    pub fn build(lists: &FxHashMap<String, List>) -> Self {
        let kinds = lists
            .iter()
            .filter_map(|(id, list)| {
                let props = list.list_properties.as_ref()?;
                let ordered = props
                    .nesting_levels
                    .first()
                    .is_some_and(|level| !level.glyph_type.is_empty());
                let kind = if ordered { ListKind::Ordered } else { ListKind::Unordered };
                Some((id.clone(), kind))
            })
            .collect();
        Self { kinds }
    }

    /// Kind of list `id`, if indexed
    pub fn get(&self, id: &str) -> Option<ListKind> {
        self.kinds.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// =============================================================================
// ObjectIndex
// =============================================================================

/// Inline object id → `img` attributes
#[derive(Debug, Clone, Default)]
pub struct ObjectIndex {
    attrs: FxHashMap<String, Attrs>,
}

impl ObjectIndex {
    /// Index every inline object that has properties.
    ///
    /// Each entry is `[src, title, alt]`; `src` is empty when the embedded
    /// object carries no image properties.
    pub fn build(objects: &FxHashMap<String, InlineObject>) -> Self {
        let attrs = objects
            .iter()
            .filter_map(|(id, object)| {
                let embedded = &object.inline_object_properties.as_ref()?.embedded_object;
                let src = embedded
                    .image_properties
                    .as_ref()
                    .map_or("", |image| image.content_uri.as_str());
                let attrs = attrs_from_pairs(&[
                    "src",
                    src,
                    "title",
                    embedded.title.as_str(),
                    "alt",
                    embedded.description.as_str(),
                ]);
                Some((id.clone(), attrs))
            })
            .collect();
        Self { attrs }
    }

    /// Attributes for object `id`, if indexed
    pub fn get(&self, id: &str) -> Option<&Attrs> {
        self.attrs.get(id)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// `img` attributes used when an object id is not indexed
pub fn empty_image_attrs() -> Attrs {
    attrs_from_pairs(&["src", "", "title", "", "alt", ""])
}
