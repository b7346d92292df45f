//! Paragraphs and their inline content.

use serde::Deserialize;

use super::wire;

// =============================================================================
// NamedStyleType
// =============================================================================

/// Paragraph role, driving block-tag selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamedStyleType {
    #[serde(rename = "NAMED_STYLE_TYPE_UNSPECIFIED")]
    Unspecified,
    NormalText,
    Title,
    Subtitle,
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[serde(rename = "HEADING_5")]
    Heading5,
    #[serde(rename = "HEADING_6")]
    Heading6,
    /// Missing or unrecognized style name
    #[default]
    #[serde(other)]
    Unknown,
}

impl NamedStyleType {
    /// Every recognized style, in API order
    pub const ALL: [NamedStyleType; 10] = [
        NamedStyleType::Unspecified,
        NamedStyleType::NormalText,
        NamedStyleType::Title,
        NamedStyleType::Subtitle,
        NamedStyleType::Heading1,
        NamedStyleType::Heading2,
        NamedStyleType::Heading3,
        NamedStyleType::Heading4,
        NamedStyleType::Heading5,
        NamedStyleType::Heading6,
    ];
}

// =============================================================================
// Paragraph
// =============================================================================

/// A paragraph: a named style, an optional bullet and inline content
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// `paragraphStyle.namedStyleType`
    #[serde(rename = "paragraphStyle", deserialize_with = "wire::named_style")]
    pub style: NamedStyleType,
    /// List membership
    pub bullet: Option<Bullet>,
    /// Inline content, in order
    #[serde(deserialize_with = "wire::paragraph_elements")]
    pub elements: Vec<ParagraphElement>,
}

impl Paragraph {
    /// Create an empty paragraph with a named style
    pub fn new(style: NamedStyleType) -> Self {
        Self {
            style,
            bullet: None,
            elements: Vec::new(),
        }
    }

    /// Create an empty `NORMAL_TEXT` paragraph
    pub fn normal() -> Self {
        Self::new(NamedStyleType::NormalText)
    }

    /// Mark the paragraph as an item of list `list_id`
    pub fn bullet(mut self, list_id: impl Into<String>) -> Self {
        self.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level: None,
        });
        self
    }

    /// Append an unstyled text run
    pub fn text(self, content: impl Into<String>) -> Self {
        self.run(TextRun::plain(content))
    }

    /// Append a styled text run
    pub fn styled(self, content: impl Into<String>, style: TextStyle) -> Self {
        self.run(TextRun::styled(content, style))
    }

    /// Append a text run
    pub fn run(mut self, run: TextRun) -> Self {
        self.elements.push(ParagraphElement::TextRun(run));
        self
    }

    /// Append an inline object reference
    pub fn image(mut self, inline_object_id: impl Into<String>) -> Self {
        self.elements
            .push(ParagraphElement::InlineObject(InlineObjectElement {
                inline_object_id: inline_object_id.into(),
            }));
        self
    }

    /// Append a horizontal rule
    pub fn rule(mut self) -> Self {
        self.elements.push(ParagraphElement::HorizontalRule);
        self
    }
}

/// List membership of a paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    pub list_id: String,
    pub nesting_level: Option<u32>,
}

// =============================================================================
// Paragraph elements
// =============================================================================

/// An inline unit of a paragraph
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphElement {
    TextRun(TextRun),
    InlineObject(InlineObjectElement),
    HorizontalRule,
}

/// A run of text sharing one style
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    pub content: String,
    #[serde(rename = "textStyle")]
    pub style: Option<TextStyle>,
    pub suggested_insertion_ids: Vec<String>,
    pub suggested_deletion_ids: Vec<String>,
}

impl TextRun {
    /// A run without style payload
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    /// A run with a style payload
    pub fn styled(content: impl Into<String>, style: TextStyle) -> Self {
        Self {
            content: content.into(),
            style: Some(style),
            ..Default::default()
        }
    }

    /// Check if the run is empty or only whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Check if the run is part of a suggested insertion
    pub fn is_suggested_insertion(&self) -> bool {
        !self.suggested_insertion_ids.is_empty()
    }

    /// Check if the run is part of a suggested deletion
    pub fn is_suggested_deletion(&self) -> bool {
        !self.suggested_deletion_ids.is_empty()
    }
}

/// Reference to an entry of the inline object registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectElement {
    pub inline_object_id: String,
}

// =============================================================================
// TextStyle
// =============================================================================

/// Character styling of a text run
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub link: Option<Link>,
    /// Present (even when empty) means the run is highlighted
    pub background_color: Option<OptionalColor>,
}

impl TextStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    pub fn underline() -> Self {
        Self {
            underline: true,
            ..Default::default()
        }
    }

    pub fn link(url: impl Into<String>) -> Self {
        Self {
            link: Some(Link {
                url: Some(url.into()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    pub fn and_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn and_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn and_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn and_highlight(mut self) -> Self {
        self.background_color = Some(OptionalColor::default());
        self
    }
}

/// Hyperlink target
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub url: Option<String>,
    pub bookmark_id: Option<String>,
    pub heading_id: Option<String>,
}

impl Link {
    /// The `href` to emit; empty for in-document targets
    pub fn href(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

/// A color that may be absent (transparent)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionalColor {
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Color {
    pub rgb_color: Option<RgbColor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RgbColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}
