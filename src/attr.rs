//! Attribute system for HTML elements
//!
//! Attributes are stored as a plain `Vec<(String, String)>`: ordered,
//! duplicates allowed, no wrapper types.

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(String, String)>;

/// Build attributes from a flat `[key, value, key, value, ...]` sequence.
///
/// # Panics
///
/// Panics if the sequence has an odd length. An unpaired key is a bug in
/// the caller, never a property of the input document.
pub fn attrs_from_pairs<S: AsRef<str>>(flat: &[S]) -> Attrs {
    assert!(
        flat.len() % 2 == 0,
        "uneven number of attr/value pairs: {}",
        flat.len()
    );
    flat.chunks_exact(2)
        .map(|pair| (pair[0].as_ref().to_owned(), pair[1].as_ref().to_owned()))
        .collect()
}

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update)
    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>);
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        self.iter().any(|(k, _)| k == name)
    }

    fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.iter_mut().find(|(k, _)| k == &name) {
            attr.1 = value;
        } else {
            self.push((name, value));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
