//! Input document model
//!
//! Rust types for the subset of the Google Docs API document JSON that the
//! converter reads. Field names follow the API's camelCase JSON; any field
//! the API omits falls back to its empty value.
//!
//! The API encodes "one of" payloads as independent optional fields. Those
//! are resolved into enums once, at parse time (see [`wire`]), so the
//! converter only ever matches on [`StructuralElement`] and
//! [`ParagraphElement`].

mod paragraph;
mod registry;
mod wire;

pub use paragraph::{
    Bullet, Color, InlineObjectElement, Link, NamedStyleType, OptionalColor, Paragraph,
    ParagraphElement, RgbColor, TextRun, TextStyle,
};
pub use registry::{
    EmbeddedObject, ImageProperties, InlineObject, InlineObjectProperties, List, ListProperties,
    NestingLevel,
};

use std::io::Read;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::HtmlResult;

// =============================================================================
// Document
// =============================================================================

/// A Google Docs document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// API document id
    pub document_id: String,
    /// Document title
    pub title: String,
    /// Main body content
    pub body: Body,
    /// List registry, keyed by list id
    pub lists: FxHashMap<String, List>,
    /// Inline object registry, keyed by inline object id
    pub inline_objects: FxHashMap<String, InlineObject>,
}

impl Document {
    /// Create an empty document with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Parse a document from API JSON
    pub fn from_json(json: &str) -> HtmlResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a document from a reader yielding API JSON
    pub fn from_reader(reader: impl Read) -> HtmlResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Append a top-level structural element
    pub fn push(&mut self, element: impl Into<StructuralElement>) {
        self.body.content.push(element.into());
    }

    /// Builder form of [`Document::push`]
    pub fn with(mut self, element: impl Into<StructuralElement>) -> Self {
        self.push(element);
        self
    }

    /// Register a list
    pub fn with_list(mut self, id: impl Into<String>, list: List) -> Self {
        self.lists.insert(id.into(), list);
        self
    }

    /// Register an inline object
    pub fn with_inline_object(mut self, id: impl Into<String>, object: InlineObject) -> Self {
        self.inline_objects.insert(id.into(), object);
        self
    }
}

/// Document body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Top-level structural elements, in document order
    #[serde(deserialize_with = "wire::content")]
    pub content: Vec<StructuralElement>,
}

// =============================================================================
// Structural elements
// =============================================================================

/// A unit of body content
#[derive(Debug, Clone)]
pub enum StructuralElement {
    Paragraph(Paragraph),
    Table(Table),
}

impl StructuralElement {
    impl_enum_accessors!(paragraph, table);
}

impl From<Paragraph> for StructuralElement {
    fn from(paragraph: Paragraph) -> Self {
        StructuralElement::Paragraph(paragraph)
    }
}

impl From<Table> for StructuralElement {
    fn from(table: Table) -> Self {
        StructuralElement::Table(table)
    }
}

/// A table: rows of cells, each cell holding its own body content
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Build a table from rows of cell contents
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| TableRow {
                    cells: row.into_iter().map(Into::into).collect(),
                })
                .collect(),
        }
    }
}

/// A table row
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableRow {
    #[serde(rename = "tableCells")]
    pub cells: Vec<TableCell>,
}

/// A table cell
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableCell {
    #[serde(deserialize_with = "wire::content")]
    pub content: Vec<StructuralElement>,
}

impl From<Paragraph> for TableCell {
    fn from(paragraph: Paragraph) -> Self {
        Self {
            content: vec![paragraph.into()],
        }
    }
}

impl From<Vec<StructuralElement>> for TableCell {
    fn from(content: Vec<StructuralElement>) -> Self {
        Self { content }
    }
}
