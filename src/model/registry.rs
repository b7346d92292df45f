//! Document-level registries: lists and inline objects.

use serde::Deserialize;

/// A list definition
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct List {
    pub list_properties: Option<ListProperties>,
}

impl List {
    /// A list whose top level has no glyph type (bulleted)
    pub fn unordered() -> Self {
        Self::with_glyph_type("")
    }

    /// A list whose top level is numbered with `glyph_type`
    pub fn ordered(glyph_type: impl Into<String>) -> Self {
        Self::with_glyph_type(glyph_type)
    }

    fn with_glyph_type(glyph_type: impl Into<String>) -> Self {
        Self {
            list_properties: Some(ListProperties {
                nesting_levels: vec![NestingLevel {
                    glyph_type: glyph_type.into(),
                    ..Default::default()
                }],
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProperties {
    /// One entry per nesting level, outermost first
    pub nesting_levels: Vec<NestingLevel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NestingLevel {
    /// Numbering kind (`DECIMAL`, `ALPHA`, ...); empty for bulleted levels
    pub glyph_type: String,
    pub glyph_symbol: String,
}

/// An embedded object referenced from paragraph content
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObject {
    pub object_id: String,
    pub inline_object_properties: Option<InlineObjectProperties>,
}

impl InlineObject {
    /// An image object
    pub fn image(
        content_uri: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::embedded(EmbeddedObject {
            title: title.into(),
            description: description.into(),
            image_properties: Some(ImageProperties {
                content_uri: content_uri.into(),
                ..Default::default()
            }),
        })
    }

    /// An object with properties wrapping `embedded`
    pub fn embedded(embedded: EmbeddedObject) -> Self {
        Self {
            object_id: String::new(),
            inline_object_properties: Some(InlineObjectProperties {
                embedded_object: embedded,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectProperties {
    pub embedded_object: EmbeddedObject,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedObject {
    pub title: String,
    pub description: String,
    pub image_properties: Option<ImageProperties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProperties {
    /// Short-lived URI of the rendered image
    pub content_uri: String,
    pub source_uri: String,
}
