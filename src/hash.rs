//! Stable fingerprints of converted trees
//!
//! blake3 digests that stay identical across processes and platforms, so
//! a fingerprint can be stored and compared against a later conversion.

use crate::attr::Attrs;
use crate::node::{Children, Node};

const TEXT_MARKER: u8 = b't';
const ELEMENT_MARKER: u8 = b'e';

/// A deterministic hasher using blake3
///
/// Every variable-length input is length-prefixed, so distinct trees never
/// feed the same byte stream.
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a length-prefixed string
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_len(s.len()).update(s.as_bytes())
    }

    /// Update with a length, widened to u64 little-endian
    #[inline]
    pub fn update_len(self, len: usize) -> Self {
        self.update(&(len as u64).to_le_bytes())
    }

    /// Update with an attribute list, in order
    pub fn update_attrs(self, attrs: &Attrs) -> Self {
        attrs
            .iter()
            .fold(self.update_len(attrs.len()), |h, (key, value)| {
                h.update_str(key).update_str(value)
            })
    }

    /// Update with a child list and everything below it
    pub fn update_children(self, children: &Children) -> Self {
        children
            .iter()
            .fold(self.update_len(children.len()), |h, child| match child {
                Node::Text(text) => h.update(&[TEXT_MARKER]).update_str(&text.content),
                Node::Element(elem) => h
                    .update(&[ELEMENT_MARKER])
                    .update_str(&elem.tag)
                    .update_attrs(&elem.attrs)
                    .update_children(&elem.children),
            })
    }

    /// First 8 bytes of the digest as a little-endian u64
    pub fn finish(self) -> u64 {
        let hash = self.inner.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{ChildrenExt, Element};

    fn digest(children: &Children) -> u64 {
        StableHasher::new().update_children(children).finish()
    }

    #[test]
    fn test_same_input_same_hash() {
        let a = StableHasher::new().update_str("p").update_str("Hello").finish();
        let b = StableHasher::new().update_str("p").update_str("Hello").finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_prefix_separates_strings() {
        let a = StableHasher::new().update_str("ab").update_str("c").finish();
        let b = StableHasher::new().update_str("a").update_str("bc").finish();
        assert_ne!(a, b);
    }

    #[test]
    fn test_text_and_element_differ() {
        let mut text = Children::new();
        text.push_text("p");
        let mut elem = Children::new();
        elem.push_element(Element::new("p"));
        assert_ne!(digest(&text), digest(&elem));
    }

    #[test]
    fn test_attrs_contribute() {
        let mut a = Children::new();
        a.push_element(Element::new("a").attr("href", "/x"));
        let mut b = Children::new();
        b.push_element(Element::new("a").attr("href", "/y"));
        assert_ne!(digest(&a), digest(&b));
    }

    #[test]
    fn test_nesting_contributes() {
        let mut nested = Children::new();
        nested
            .push_element(Element::new("strong"))
            .push_elem(Element::new("em"));
        let mut flat = Children::new();
        flat.push_element(Element::new("strong"));
        flat.push_element(Element::new("em"));
        assert_ne!(digest(&nested), digest(&flat));
    }
}
