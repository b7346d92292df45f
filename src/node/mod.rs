//! Output HTML tree: `Document`, `Element`, `Text` and `Node`.
//!
//! The tree is append-only while it is being built. The converter keeps
//! an explicit insertion point (a `&mut Children`) and grows the tree
//! through [`ChildrenExt`], never through back-references to parents.

mod element;
mod text;
mod document;

pub use element::Element;
pub use text::Text;
pub use document::{Document, ElementIterator, Stats};

use smallvec::SmallVec;

/// Node in an HTML tree - either Element or Text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    // Generates for each variant (element -> Element, etc.):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&Type>
    //   - as_xxx_mut(&mut self) -> Option<&mut Type>
    impl_enum_accessors!(element, text);

    /// Wrap an element.
    #[inline]
    pub fn element(elem: Element) -> Self {
        Node::Element(Box::new(elem))
    }

    /// Create a text node.
    #[inline]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(Text::new(content))
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Node::element(elem)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 8]>;

// =============================================================================
// ChildrenExt - append-only builder primitives
// =============================================================================

/// Builder operations on a child list acting as the insertion point.
pub trait ChildrenExt {
    /// Append an element and return it as the new insertion target.
    fn push_element(&mut self, elem: Element) -> &mut Element;

    /// Append a text node.
    fn push_text(&mut self, content: impl Into<String>);

    /// Reuse the last child if it is an element with `tag` and no
    /// attributes, otherwise append a new empty `tag` element.
    fn reuse_or_push(&mut self, tag: &str) -> &mut Element;

    /// Reuse the last child if it is an element with `tag` and exactly
    /// `attrs`, otherwise append a new element carrying them.
    fn reuse_or_push_with(&mut self, tag: &str, attrs: &[(String, String)]) -> &mut Element;

    /// The last child, if it is an element.
    fn last_element(&self) -> Option<&Element>;
}

impl ChildrenExt for Children {
    fn push_element(&mut self, elem: Element) -> &mut Element {
        self.push(Node::element(elem));
        match self.last_mut() {
            Some(Node::Element(elem)) => &mut **elem,
            _ => unreachable!("an element was just appended"),
        }
    }

    fn push_text(&mut self, content: impl Into<String>) {
        self.push(Node::text(content));
    }

    fn reuse_or_push(&mut self, tag: &str) -> &mut Element {
        self.reuse_or_push_with(tag, &[])
    }

    fn reuse_or_push_with(&mut self, tag: &str, attrs: &[(String, String)]) -> &mut Element {
        let reusable = self
            .last_element()
            .is_some_and(|last| last.tag == tag && last.attrs == attrs);
        if reusable {
            match self.last_mut() {
                Some(Node::Element(elem)) => &mut **elem,
                _ => unreachable!("last child was checked to be an element"),
            }
        } else {
            self.push_element(Element::new(tag).with_attrs(attrs.to_vec()))
        }
    }

    fn last_element(&self) -> Option<&Element> {
        self.last().and_then(Node::as_element)
    }
}
