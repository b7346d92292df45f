//! Wire forms of the API's "one of" payloads.
//!
//! The API sends structural and paragraph elements as objects with one
//! optional field per kind. These helpers deserialize that shape and
//! resolve it into the model's enums:
//!
//! - a structural element yields its table, then its paragraph; elements
//!   with neither (section breaks, tables of contents) yield nothing
//! - a paragraph element yields its horizontal rule, inline object and text
//!   run, in that order; other kinds (page breaks, footnotes) yield nothing

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::{
    InlineObjectElement, NamedStyleType, Paragraph, ParagraphElement, StructuralElement, Table,
    TableRow, TextRun,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StructuralElementWire {
    #[serde(default)]
    paragraph: Option<Paragraph>,
    #[serde(default)]
    table: Option<TableWire>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableWire {
    #[serde(default)]
    table_rows: Option<Vec<TableRow>>,
}

impl StructuralElementWire {
    fn resolve(self) -> impl Iterator<Item = StructuralElement> {
        let table = self
            .table
            .and_then(|table| table.table_rows)
            .map(|rows| StructuralElement::Table(Table { rows }));
        let paragraph = self.paragraph.map(StructuralElement::Paragraph);
        table.into_iter().chain(paragraph)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphElementWire {
    #[serde(default)]
    horizontal_rule: Option<IgnoredAny>,
    #[serde(default)]
    inline_object_element: Option<InlineObjectElement>,
    #[serde(default)]
    text_run: Option<TextRun>,
}

impl ParagraphElementWire {
    fn resolve(self) -> impl Iterator<Item = ParagraphElement> {
        let rule = self.horizontal_rule.map(|_| ParagraphElement::HorizontalRule);
        let object = self.inline_object_element.map(ParagraphElement::InlineObject);
        let run = self.text_run.map(ParagraphElement::TextRun);
        rule.into_iter().chain(object).chain(run)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParagraphStyleWire {
    #[serde(default)]
    named_style_type: NamedStyleType,
}

/// Deserialize a `content` array into resolved structural elements
pub(super) fn content<'de, D>(deserializer: D) -> Result<Vec<StructuralElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<Vec<StructuralElementWire>>::deserialize(deserializer)?;
    Ok(wire
        .unwrap_or_default()
        .into_iter()
        .flat_map(StructuralElementWire::resolve)
        .collect())
}

/// Deserialize a paragraph `elements` array into resolved inline elements
pub(super) fn paragraph_elements<'de, D>(deserializer: D) -> Result<Vec<ParagraphElement>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<Vec<ParagraphElementWire>>::deserialize(deserializer)?;
    Ok(wire
        .unwrap_or_default()
        .into_iter()
        .flat_map(ParagraphElementWire::resolve)
        .collect())
}

/// Deserialize a `paragraphStyle` object down to its named style
pub(super) fn named_style<'de, D>(deserializer: D) -> Result<NamedStyleType, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<ParagraphStyleWire>::deserialize(deserializer)?;
    Ok(wire.map(|style| style.named_style_type).unwrap_or_default())
}
