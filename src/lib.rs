//! gdocs-html - Google Docs JSON to HTML trees
//!
//! ## Core Concepts
//!
//! **Typed source model**: the Google Docs API document is deserialized into
//! [`model::Document`], with every "one of" field resolved into an enum at
//! parse time.
//!
//! **Index, then traverse**: list and inline object registries are indexed
//! once, then a single depth-first pass appends nodes to an explicit
//! insertion point. Consecutive list items share their `<ul>`/`<ol>` and
//! consecutive runs share identical style wrappers.
//!
//! ## Modules
//! - `model`: Google Docs document model (serde)
//! - `convert`: Indices, style table and the converter
//! - `node`: Node/Element/Text/Document types of the output tree
//! - `render`: HTML serialization
//! - `attr`: Attribute system
//!
//! ## Usage
//!
//! ```ignore
//! use gdocs_html::{Converter, ConvertConfig, RenderConfig, model, render_document};
//!
//! let source = model::Document::from_json(&json)?;
//! let tree = Converter::new(ConvertConfig::default()).convert(&source);
//! let html = render_document(&tree, &RenderConfig::FRAGMENT);
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Google Docs document model
pub mod model;

/// Conversion: indices, style table, converter
pub mod convert;

/// Node types: Document, Element, Node, Text
pub mod node;

/// Attribute types
pub mod attr;

/// Error types
pub mod error;

/// Stable content hashing
pub mod hash;

/// HTML rendering
pub mod render;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

pub use attr::{Attrs, AttrsExt, attrs_from_pairs};
pub use convert::{ConvertConfig, Converter, ListKind, StyleTable, convert, convert_batch};
pub use error::{HtmlError, HtmlResult};
pub use hash::StableHasher;
pub use node::{Children, ChildrenExt, Document, Element, Node, Text};
pub use render::{RenderConfig, render_document, render_document_bytes, write_document};
