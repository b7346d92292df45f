//! Document → HTML tree conversion
//!
//! # Flow
//!
//! ```text
//! model::Document
//!         │
//!         ▼ ListIndex::build / ObjectIndex::build
//! indices (read-only for the rest of the pass)
//!         │
//!         ▼ convert_content, over the body then each table cell
//! node::Document
//! ```
//!
//! Every conversion function receives the current insertion point as a
//! `&mut Children` and only ever appends to it. Merging happens through
//! [`ChildrenExt::reuse_or_push`], which looks at the insertion point's
//! last child.

use smallvec::SmallVec;

use crate::attr::{Attrs, attrs_from_pairs};
use crate::model::{
    self, Bullet, Paragraph, ParagraphElement, StructuralElement, Table, TextRun, TextStyle,
};
use crate::node::{self, Children, ChildrenExt, Element};

use super::config::ConvertConfig;
use super::index::{ListIndex, ObjectIndex, empty_image_attrs};

// =============================================================================
// Converter
// =============================================================================

/// Converts Google Docs documents into HTML trees.
///
/// A converter holds only its configuration, so one instance can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with the given configuration
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert a document into an HTML tree
    ///
    /// Never fails: unresolved list or object ids and unmapped styles
    /// degrade to defaults.
    pub fn convert(&self, doc: &model::Document) -> node::Document {
        let _span = tracing::debug_span!("convert", title = %doc.title).entered();

        let pass = Pass {
            config: &self.config,
            lists: ListIndex::build(&doc.lists),
            objects: ObjectIndex::build(&doc.inline_objects),
        };
        tracing::debug!(
            elements = doc.body.content.len(),
            lists = pass.lists.len(),
            objects = pass.objects.len(),
            "built indices"
        );

        let mut out = node::Document::new(doc.title.as_str());
        pass.convert_content(&mut out.children, &doc.body.content);

        tracing::debug!(html_elements = out.element_count(), "converted document");
        out
    }
}

// =============================================================================
// Pass - per-document state
// =============================================================================

/// State of a single conversion: the config and the document's indices
struct Pass<'a> {
    config: &'a ConvertConfig,
    lists: ListIndex,
    objects: ObjectIndex,
}

/// Wrapper chain of one text run, outermost first
type Wrappers = SmallVec<[(&'static str, Attrs); 4]>;

impl Pass<'_> {
    /// Convert a sequence of structural elements into one insertion point
    ///
    /// Tracks the list id of the container left open at `at`, so only
    /// bullets of the same list share a container.
    fn convert_content(&self, at: &mut Children, content: &[StructuralElement]) {
        let mut open_list: Option<&str> = None;
        for element in content {
            open_list = self.convert_element(at, element, open_list);
        }
    }

    /// Returns the list id of the container now open at `at`, if any
    fn convert_element<'d>(
        &self,
        at: &mut Children,
        element: &'d StructuralElement,
        open_list: Option<&str>,
    ) -> Option<&'d str> {
        match element {
            StructuralElement::Table(table) => {
                self.convert_table(at, table);
                None
            }
            StructuralElement::Paragraph(paragraph) => {
                self.convert_paragraph(at, paragraph, open_list);
                paragraph.bullet.as_ref().map(|bullet| bullet.list_id.as_str())
            }
        }
    }

    /// Tables nest: each cell's content is converted recursively
    fn convert_table(&self, at: &mut Children, table: &Table) {
        let table_elem = at.push_element(Element::new("table"));
        for row in &table.rows {
            let row_elem = table_elem.push_elem(Element::new("tr"));
            for cell in &row.cells {
                let cell_elem = row_elem.push_elem(Element::new("td"));
                self.convert_content(&mut cell_elem.children, &cell.content);
            }
        }
    }

    fn convert_paragraph(&self, at: &mut Children, paragraph: &Paragraph, open_list: Option<&str>) {
        // Bullets redirect the insertion point into a fresh list item
        let at = match &paragraph.bullet {
            Some(bullet) => {
                let same_list = open_list == Some(bullet.list_id.as_str());
                &mut self.list_item(at, bullet, same_list).children
            }
            None => at,
        };

        let block = self.config.styles.tag_for(paragraph.style);
        at.push_element(Element::new(block));

        for item in &paragraph.elements {
            match item {
                // Sibling of the block, not inside it
                ParagraphElement::HorizontalRule => {
                    at.push_element(Element::new("hr"));
                }
                ParagraphElement::InlineObject(object) => {
                    let attrs = self.image_attrs(&object.inline_object_id);
                    at.reuse_or_push(block)
                        .push_elem(Element::new("img").with_attrs(attrs));
                }
                ParagraphElement::TextRun(run) => self.convert_run(at, block, run),
            }
        }
    }

    /// Continue or open the list container, then append a new `<li>`
    ///
    /// The container is continued only when `same_list` holds and it is
    /// still the last child of `at`.
    fn list_item<'c>(
        &self,
        at: &'c mut Children,
        bullet: &Bullet,
        same_list: bool,
    ) -> &'c mut Element {
        let kind = self.lists.get(&bullet.list_id).unwrap_or_else(|| {
            tracing::trace!(list_id = %bullet.list_id, "unknown list, using fallback container");
            self.config.fallback_list
        });
        let container = if same_list {
            at.reuse_or_push(kind.tag())
        } else {
            at.push_element(Element::new(kind.tag()))
        };
        container.push_elem(Element::new("li"))
    }

    fn image_attrs(&self, id: &str) -> Attrs {
        match self.objects.get(id) {
            Some(attrs) => attrs.clone(),
            None => {
                tracing::trace!(inline_object_id = %id, "unknown inline object");
                empty_image_attrs()
            }
        }
    }

    fn convert_run(&self, at: &mut Children, block: &str, run: &TextRun) {
        if self.config.skip_blank_runs && run.is_blank() {
            return;
        }

        let mut target = at.reuse_or_push(block);
        if let Some(style) = &run.style {
            for (tag, attrs) in self.wrappers(run, style) {
                target = self.wrap(target, tag, attrs);
            }
        }
        target.push_text(run.content.as_str());
    }

    /// Style wrappers in nesting order
    fn wrappers(&self, run: &TextRun, style: &TextStyle) -> Wrappers {
        let mut chain = Wrappers::new();
        if self.config.render_suggestions {
            if run.is_suggested_insertion() {
                chain.push(("ins", Attrs::new()));
            }
            if run.is_suggested_deletion() {
                chain.push(("del", Attrs::new()));
            }
        }
        if let Some(link) = &style.link {
            chain.push(("a", attrs_from_pairs(&["href", link.href()])));
        }
        if self.config.render_highlight && style.background_color.is_some() {
            chain.push(("mark", Attrs::new()));
        }
        if style.bold {
            chain.push(("strong", Attrs::new()));
        }
        if style.italic {
            chain.push(("em", Attrs::new()));
        }
        // Links already render underlined
        if style.underline && style.link.is_none() {
            chain.push(("u", Attrs::new()));
        }
        chain
    }

    fn wrap<'c>(&self, parent: &'c mut Element, tag: &str, attrs: Attrs) -> &'c mut Element {
        if self.config.merge_wrappers {
            parent.children.reuse_or_push_with(tag, &attrs)
        } else {
            parent.push_elem(Element::new(tag).with_attrs(attrs))
        }
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Convert a document with the default configuration
///
/// # Example
///
/// ```ignore
/// let doc = gdocs_html::model::Document::from_json(&json)?;
/// let tree = gdocs_html::convert(&doc);
/// let html = gdocs_html::render_document(&tree, &RenderConfig::FRAGMENT);
/// ```
pub fn convert(doc: &model::Document) -> node::Document {
    Converter::default().convert(doc)
}

/// Convert independent documents, in parallel with the `parallel` feature
///
/// Output order matches input order.
pub fn convert_batch(converter: &Converter, docs: &[model::Document]) -> Vec<node::Document> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        docs.par_iter().map(|doc| converter.convert(doc)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        docs.iter().map(|doc| converter.convert(doc)).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{Document, InlineObject, List, NamedStyleType, TextRun, TextStyle};
    use crate::node::Node;
    use crate::render::{RenderConfig, render_document};

    fn html(tree: &node::Document) -> String {
        render_document(tree, &RenderConfig::FRAGMENT)
    }

    fn convert_with(config: ConvertConfig, doc: &Document) -> String {
        html(&Converter::new(config).convert(doc))
    }

    fn tags(children: &Children) -> Vec<&str> {
        children
            .iter()
            .map(|node| match node {
                Node::Element(e) => e.tag.as_str(),
                Node::Text(_) => "#text",
            })
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Basic shapes
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_document() {
        let tree = convert(&Document::new("Empty"));
        assert!(tree.is_empty());
        assert_eq!(tree.title, "Empty");
    }

    #[test]
    fn test_heading_with_plain_run() {
        let doc = Document::new("").with(Paragraph::new(NamedStyleType::Heading2).text("Hello"));
        let tree = convert(&doc);

        assert_eq!(tags(&tree.children), vec!["h2"]);
        let heading = tree.children[0].as_element().unwrap();
        assert_eq!(heading.child_count(), 1);
        assert_eq!(heading.children[0].as_text().unwrap().content, "Hello");
    }

    #[test]
    fn test_block_tags_follow_style_table() {
        let doc = Document::new("")
            .with(Paragraph::new(NamedStyleType::Title).text("T"))
            .with(Paragraph::new(NamedStyleType::Subtitle).text("S"))
            .with(Paragraph::normal().text("N"))
            .with(Paragraph::new(NamedStyleType::Unspecified).text("U"))
            .with(Paragraph::new(NamedStyleType::Unknown).text("?"));

        assert_eq!(
            html(&convert(&doc)),
            "<h1>T</h1><h1>S</h1><p>N</p><div>U</div><div>?</div>"
        );
    }

    #[test]
    fn test_injected_style_table() {
        let styles = crate::convert::StyleTable::default()
            .with_tag(NamedStyleType::Subtitle, "h2")
            .with_fallback("section");
        let doc = Document::new("")
            .with(Paragraph::new(NamedStyleType::Subtitle).text("S"))
            .with(Paragraph::new(NamedStyleType::Unknown).text("?"));

        assert_eq!(
            convert_with(ConvertConfig::new().with_styles(styles), &doc),
            "<h2>S</h2><section>?</section>"
        );
    }

    #[test]
    fn test_injected_empty_tag_falls_back() {
        let styles = crate::convert::StyleTable::default().with_tag(NamedStyleType::Heading1, "");
        let doc = Document::new("").with(Paragraph::new(NamedStyleType::Heading1).text("H"));

        assert_eq!(
            convert_with(ConvertConfig::new().with_styles(styles), &doc),
            "<div>H</div>"
        );
    }

    #[test]
    fn test_empty_paragraph_still_emits_block() {
        let doc = Document::new("").with(Paragraph::normal());
        assert_eq!(html(&convert(&doc)), "<p></p>");
    }

    #[test]
    fn test_consecutive_plain_runs_share_block() {
        let doc = Document::new("").with(Paragraph::normal().text("a").text("b"));
        let tree = convert(&doc);

        let p = tree.children[0].as_element().unwrap();
        assert_eq!(tags(&p.children), vec!["#text", "#text"]);
        assert_eq!(p.text_content(), "ab");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_consecutive_bullets_merge_into_one_list() {
        let doc = Document::new("")
            .with_list("kix.list", List::unordered())
            .with(Paragraph::normal().bullet("kix.list").text("one"))
            .with(Paragraph::normal().bullet("kix.list").text("two"));
        let tree = convert(&doc);

        assert_eq!(tags(&tree.children), vec!["ul"]);
        let list = tree.children[0].as_element().unwrap();
        assert_eq!(tags(&list.children), vec!["li", "li"]);
        assert_eq!(
            html(&tree),
            "<ul><li><p>one</p></li><li><p>two</p></li></ul>"
        );
    }

    #[test]
    fn test_ordered_list() {
        let doc = Document::new("")
            .with_list("nums", List::ordered("DECIMAL"))
            .with(Paragraph::normal().bullet("nums").text("first"));
        assert_eq!(html(&convert(&doc)), "<ol><li><p>first</p></li></ol>");
    }

    #[test]
    fn test_non_bullet_paragraph_breaks_list() {
        let doc = Document::new("")
            .with_list("l", List::unordered())
            .with(Paragraph::normal().bullet("l").text("a"))
            .with(Paragraph::normal().text("break"))
            .with(Paragraph::normal().bullet("l").text("b"));

        assert_eq!(tags(&convert(&doc).children), vec!["ul", "p", "ul"]);
    }

    #[test]
    fn test_bullets_of_different_kind_start_new_container() {
        let doc = Document::new("")
            .with_list("bullets", List::unordered())
            .with_list("numbers", List::ordered("DECIMAL"))
            .with(Paragraph::normal().bullet("bullets").text("a"))
            .with(Paragraph::normal().bullet("numbers").text("1"))
            .with(Paragraph::normal().bullet("bullets").text("b"));

        assert_eq!(tags(&convert(&doc).children), vec!["ul", "ol", "ul"]);
    }

    #[test]
    fn test_bullets_of_different_lists_start_new_container() {
        let doc = Document::new("")
            .with_list("a", List::unordered())
            .with_list("b", List::unordered())
            .with(Paragraph::normal().bullet("a").text("x"))
            .with(Paragraph::normal().bullet("b").text("y"))
            .with(Paragraph::normal().bullet("b").text("z"));

        assert_eq!(
            html(&convert(&doc)),
            "<ul><li><p>x</p></li></ul><ul><li><p>y</p></li><li><p>z</p></li></ul>"
        );
    }

    #[test]
    fn test_list_does_not_continue_across_table() {
        let doc = Document::new("")
            .with_list("l", List::unordered())
            .with(Paragraph::normal().bullet("l").text("a"))
            .with(crate::model::Table::from_rows([[vec![StructuralElement::from(
                Paragraph::normal().text("cell"),
            )]]]))
            .with(Paragraph::normal().bullet("l").text("b"));

        assert_eq!(tags(&convert(&doc).children), vec!["ul", "table", "ul"]);
    }

    #[test]
    fn test_unknown_list_uses_fallback_container() {
        let doc = Document::new("")
            .with_list("bare", List::default())
            .with(Paragraph::normal().bullet("missing").text("a"))
            .with(Paragraph::normal().bullet("missing").text("b"))
            .with(Paragraph::normal().bullet("bare").text("c"));
        assert_eq!(
            html(&convert(&doc)),
            "<ul><li><p>a</p></li><li><p>b</p></li></ul><ul><li><p>c</p></li></ul>"
        );

        let config = ConvertConfig::new().with_fallback_list(crate::convert::ListKind::Ordered);
        assert_eq!(
            convert_with(config, &doc),
            "<ol><li><p>a</p></li><li><p>b</p></li></ol><ol><li><p>c</p></li></ol>"
        );
    }

    #[test]
    fn test_bullet_in_table_cell() {
        let doc = Document::new("")
            .with_list("l", List::unordered())
            .with(crate::model::Table::from_rows([[vec![
                StructuralElement::from(Paragraph::normal().bullet("l").text("a")),
                StructuralElement::from(Paragraph::normal().bullet("l").text("b")),
            ]]]));
        assert_eq!(
            html(&convert(&doc)),
            "<table><tr><td><ul><li><p>a</p></li><li><p>b</p></li></ul></td></tr></table>"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Styled runs
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_bold_wraps_italic() {
        let doc = Document::new("")
            .with(Paragraph::normal().styled("both", TextStyle::bold().and_italic()));
        let tree = convert(&doc);

        let p = tree.children[0].as_element().unwrap();
        let strong = p.first_child().unwrap();
        assert_eq!(strong.tag, "strong");
        let em = strong.first_child().unwrap();
        assert_eq!(em.tag, "em");
        assert_eq!(em.children[0].as_text().unwrap().content, "both");
    }

    #[test]
    fn test_full_wrapper_order() {
        let mut run = TextRun::styled(
            "x",
            TextStyle::link("https://example.com")
                .and_highlight()
                .and_bold()
                .and_italic()
                .and_underline(),
        );
        run.suggested_insertion_ids = vec!["s1".into()];
        run.suggested_deletion_ids = vec!["s2".into()];
        let doc = Document::new("").with(Paragraph::normal().run(run));

        assert_eq!(
            html(&convert(&doc)),
            "<p><ins><del><a href=\"https://example.com\"><mark><strong><em>x</em></strong></mark></a></del></ins></p>"
        );
    }

    #[test]
    fn test_underline_without_link() {
        let doc = Document::new("").with(Paragraph::normal().styled("u", TextStyle::underline()));
        assert_eq!(html(&convert(&doc)), "<p><u>u</u></p>");
    }

    #[test]
    fn test_empty_style_payload_adds_no_wrappers() {
        let doc =
            Document::new("").with(Paragraph::normal().styled("plain", TextStyle::default()));
        assert_eq!(html(&convert(&doc)), "<p>plain</p>");
    }

    #[test]
    fn test_suggestions_need_style_payload() {
        let mut run = TextRun::plain("s");
        run.suggested_insertion_ids = vec!["s1".into()];
        let doc = Document::new("").with(Paragraph::normal().run(run));
        assert_eq!(html(&convert(&doc)), "<p>s</p>");
    }

    #[test]
    fn test_suggestion_and_highlight_toggles() {
        let mut run = TextRun::styled("x", TextStyle::bold().and_highlight());
        run.suggested_deletion_ids = vec!["s".into()];
        let doc = Document::new("").with(Paragraph::normal().run(run));

        assert_eq!(
            html(&convert(&doc)),
            "<p><del><mark><strong>x</strong></mark></del></p>"
        );
        assert_eq!(
            convert_with(ConvertConfig::new().with_suggestions(false), &doc),
            "<p><mark><strong>x</strong></mark></p>"
        );
        assert_eq!(
            convert_with(ConvertConfig::new().with_highlight(false), &doc),
            "<p><del><strong>x</strong></del></p>"
        );
    }

    #[test]
    fn test_consecutive_styled_runs_merge_wrappers() {
        let doc = Document::new("").with(
            Paragraph::normal()
                .styled("a", TextStyle::bold())
                .styled("b", TextStyle::bold().and_italic())
                .text(" plain ")
                .styled("c", TextStyle::bold()),
        );

        assert_eq!(
            html(&convert(&doc)),
            "<p><strong>a<em>b</em></strong> plain <strong>c</strong></p>"
        );
        assert_eq!(
            convert_with(ConvertConfig::new().with_merge_wrappers(false), &doc),
            "<p><strong>a</strong><strong><em>b</em></strong> plain <strong>c</strong></p>"
        );
    }

    #[test]
    fn test_links_with_different_targets_do_not_merge() {
        let doc = Document::new("").with(
            Paragraph::normal()
                .styled("a", TextStyle::link("https://a.example"))
                .styled("b", TextStyle::link("https://a.example"))
                .styled("c", TextStyle::link("https://c.example")),
        );
        assert_eq!(
            html(&convert(&doc)),
            "<p><a href=\"https://a.example\">ab</a><a href=\"https://c.example\">c</a></p>"
        );
    }

    #[test]
    fn test_skip_blank_runs() {
        let doc = Document::new("").with(Paragraph::normal().text("word").text("\n"));
        let kept = convert(&doc);
        assert_eq!(kept.children[0].as_element().unwrap().child_count(), 2);

        let skipped = Converter::new(ConvertConfig::new().with_skip_blank_runs(true)).convert(&doc);
        assert_eq!(html(&skipped), "<p>word</p>");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rules and images
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_horizontal_rule_is_sibling_of_block() {
        let doc = Document::new("").with(Paragraph::normal().text("above").rule().text("below"));
        assert_eq!(html(&convert(&doc)), "<p>above</p><hr /><p>below</p>");
    }

    #[test]
    fn test_horizontal_rule_inside_list_item() {
        let doc = Document::new("")
            .with_list("l", List::unordered())
            .with(Paragraph::normal().bullet("l").rule());
        assert_eq!(html(&convert(&doc)), "<ul><li><p></p><hr /></li></ul>");
    }

    #[test]
    fn test_image_attributes() {
        let doc = Document::new("")
            .with_inline_object(
                "titled",
                InlineObject::embedded(crate::model::EmbeddedObject {
                    title: "Chart".into(),
                    description: "Sales chart".into(),
                    image_properties: None,
                }),
            )
            .with(Paragraph::normal().image("titled").image("missing"));
        let tree = convert(&doc);

        let images = tree.find_tagged("img");
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].get_attr("src"), Some(""));
        assert_eq!(images[0].get_attr("title"), Some("Chart"));
        assert_eq!(images[0].get_attr("alt"), Some("Sales chart"));
        for key in ["src", "title", "alt"] {
            assert_eq!(images[1].get_attr(key), Some(""));
        }
    }

    #[test]
    fn test_image_joins_text_block() {
        let doc = Document::new("")
            .with_inline_object("cat", InlineObject::image("https://img/cat", "Cat", "A cat"))
            .with(Paragraph::normal().text("see ").image("cat"));
        assert_eq!(
            html(&convert(&doc)),
            "<p>see <img src=\"https://img/cat\" title=\"Cat\" alt=\"A cat\" /></p>"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tables
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_two_by_two_table() {
        let doc = Document::new("").with(crate::model::Table::from_rows([
            [Paragraph::normal().text("a1"), Paragraph::normal().text("b1")],
            [Paragraph::normal().text("a2"), Paragraph::normal().text("b2")],
        ]));
        let tree = convert(&doc);

        assert_eq!(tags(&tree.children), vec!["table"]);
        let table = tree.children[0].as_element().unwrap();
        assert_eq!(tags(&table.children), vec!["tr", "tr"]);
        for row in table.children_elements() {
            assert_eq!(tags(&row.children), vec!["td", "td"]);
            for cell in row.children_elements() {
                assert_eq!(tags(&cell.children), vec!["p"]);
            }
        }
        assert_eq!(
            html(&tree),
            "<table><tr><td><p>a1</p></td><td><p>b1</p></td></tr>\
             <tr><td><p>a2</p></td><td><p>b2</p></td></tr></table>"
        );
    }

    #[test]
    fn test_nested_tables() {
        let inner = crate::model::Table::from_rows([[Paragraph::normal().text("deep")]]);
        let doc = Document::new("").with(crate::model::Table::from_rows([[vec![
            StructuralElement::from(inner),
        ]]]));
        assert_eq!(
            html(&convert(&doc)),
            "<table><tr><td><table><tr><td><p>deep</p></td></tr></table></td></tr></table>"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Whole documents
    // ─────────────────────────────────────────────────────────────────────────

    fn api_document() -> Document {
        Document::from_json(
            &json!({
                "documentId": "1abc",
                "title": "Report",
                "body": { "content": [
                    { "endIndex": 1, "sectionBreak": {} },
                    { "paragraph": {
                        "elements": [ { "textRun": { "content": "Report\n", "textStyle": {} } } ],
                        "paragraphStyle": { "namedStyleType": "TITLE" }
                    } },
                    { "paragraph": {
                        "elements": [
                            { "textRun": { "content": "Read ", "textStyle": {} } },
                            { "textRun": { "content": "this", "textStyle": {
                                "link": { "url": "https://example.com" }, "underline": true
                            } } },
                            { "textRun": { "content": "\n", "textStyle": {} } }
                        ],
                        "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" }
                    } },
                    { "paragraph": {
                        "elements": [ { "textRun": { "content": "Item\n", "textStyle": {} } } ],
                        "paragraphStyle": { "namedStyleType": "NORMAL_TEXT" },
                        "bullet": { "listId": "kix.1" }
                    } }
                ] },
                "lists": { "kix.1": { "listProperties": { "nestingLevels": [ { "glyphType": "DECIMAL" } ] } } }
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_api_document() {
        let converter = Converter::new(ConvertConfig::new().with_skip_blank_runs(true));
        let tree = converter.convert(&api_document());

        assert_eq!(tree.title, "Report");
        assert_eq!(
            html(&tree),
            "<h1>Report\n</h1><p>Read <a href=\"https://example.com\">this</a></p><ol><li><p>Item\n</p></li></ol>"
        );
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let doc = api_document();
        let first = convert(&doc);
        let second = convert(&doc);
        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_convert_batch_keeps_order() {
        let docs = vec![
            Document::new("a").with(Paragraph::normal().text("a")),
            Document::new("b").with(Paragraph::normal().text("b")),
        ];
        let trees = convert_batch(&Converter::default(), &docs);
        let titles: Vec<_> = trees.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_converter_is_send_sync() {
        static_assertions::assert_impl_all!(Converter: Send, Sync);
        static_assertions::assert_impl_all!(node::Document: Send, Sync);
    }
}
