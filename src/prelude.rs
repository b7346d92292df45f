//! Prelude module for common imports.
//!
//! ```ignore
//! use gdocs_html::prelude::*;
//! ```

// Source model
pub use crate::model::{
    Bullet, NamedStyleType, Paragraph, ParagraphElement, StructuralElement, Table, TextRun,
    TextStyle,
};

// Conversion
pub use crate::convert::{ConvertConfig, Converter, ListKind, StyleTable, convert, convert_batch};

// Node types
pub use crate::node::{Children, ChildrenExt, Document, Element, Node, Text};

// Attributes
pub use crate::attr::{Attrs, AttrsExt};

// Error
pub use crate::error::{HtmlError, HtmlResult};

// Render
pub use crate::render::{RenderConfig, render_document, write_document};
