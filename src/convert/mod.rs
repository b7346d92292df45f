//! Google Docs → HTML tree conversion
//!
//! The conversion runs in two stages over an immutable [`model::Document`](crate::model::Document):
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Index | [`index`] | [`ListIndex`], [`ObjectIndex`] |
//! | Traverse | [`converter`] | [`node::Document`](crate::node::Document) |
//!
//! Block tags come from the injected [`StyleTable`]; everything else the
//! traversal decides is controlled by [`ConvertConfig`].

pub mod config;
pub mod converter;
pub mod index;
pub mod style;

pub use config::ConvertConfig;
pub use converter::{Converter, convert, convert_batch};
pub use index::{ListIndex, ListKind, ObjectIndex, empty_image_attrs};
pub use style::{DEFAULT_BLOCK_TAG, StyleTable};
