//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate. The parsed `Document` is the arena
//! that owns every node for the duration of one extraction call; nodes are
//! visited through `NodeRef` borrows scoped to it.
//!
//! Node kinds and the small tag vocabulary the pipelines care about are
//! classified once into closed enums so that extraction logic can `match`
//! instead of comparing strings.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::{Error, Options, Result};

/// Element tags the extraction pipelines distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementTag {
    Div,
    A,
    Span,
    Link,
    Title,
    Video,
    Script,
    Style,
    Other,
}

impl ElementTag {
    /// Classify a lowercase local tag name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "div" => Self::Div,
            "a" => Self::A,
            "span" => Self::Span,
            "link" => Self::Link,
            "title" => Self::Title,
            "video" => Self::Video,
            "script" => Self::Script,
            "style" => Self::Style,
            _ => Self::Other,
        }
    }
}

/// What a node is, as far as extraction is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An element, with its tag classified.
    Element(ElementTag),
    /// A text node with at least one non-whitespace character.
    Text(StrTendril),
    /// A text node made only of whitespace.
    Whitespace(StrTendril),
    /// Document, doctype, comment and processing-instruction nodes.
    Other,
}

/// Classify a node.
#[must_use]
pub fn kind(node: &NodeRef) -> NodeKind {
    if node.is_element() {
        let tag = node
            .node_name()
            .map_or(ElementTag::Other, |name| ElementTag::from_name(&name));
        NodeKind::Element(tag)
    } else if node.is_text() {
        let text = node.text();
        if text.chars().all(char::is_whitespace) {
            NodeKind::Whitespace(text)
        } else {
            NodeKind::Text(text)
        }
    } else {
        NodeKind::Other
    }
}

/// Tag of an element node, `None` for any other node.
#[inline]
#[must_use]
pub fn element_tag(node: &NodeRef) -> Option<ElementTag> {
    match kind(node) {
        NodeKind::Element(tag) => Some(tag),
        _ => None,
    }
}

/// Check whether a node is an element with the given tag.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: ElementTag) -> bool {
    element_tag(node) == Some(tag)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    Selection::from(*node).attr(name).map(|s| s.to_string())
}

/// True iff the element's `id` attribute is exactly `id`.
#[must_use]
pub fn has_id(node: &NodeRef, id: &str) -> bool {
    attribute_equals(node, "id", id)
}

/// True iff the element's `class` attribute is exactly `class`.
///
/// This is whole-value equality, not a token match: `class="a b"` does not
/// satisfy `has_class(node, "a")`.
#[must_use]
pub fn has_class(node: &NodeRef, class: &str) -> bool {
    attribute_equals(node, "class", class)
}

fn attribute_equals(node: &NodeRef, name: &str, expected: &str) -> bool {
    node.is_element()
        && Selection::from(*node)
            .attr(name)
            .is_some_and(|value| &*value == expected)
}

// === Text Content ===

/// Visible text of a subtree.
///
/// Concatenates text and whitespace nodes in document order, skipping the
/// contents of `script` and `style` elements. No trimming is applied.
#[must_use]
pub fn collect_text(node: &NodeRef) -> String {
    let mut out = String::new();
    let mut stack = vec![*node];
    while let Some(node) = stack.pop() {
        match kind(&node) {
            NodeKind::Text(text) | NodeKind::Whitespace(text) => out.push_str(&text),
            NodeKind::Element(ElementTag::Script | ElementTag::Style) | NodeKind::Other => {}
            NodeKind::Element(_) => stack.extend(node.children().into_iter().rev()),
        }
    }
    out
}

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Tree construction itself is total, so only inputs refused up front fail:
/// documents longer than `Options::max_document_len` and documents holding
/// an interior NUL character.
pub fn parse(html: &str, options: &Options) -> Result<Document> {
    if html.len() > options.max_document_len {
        return Err(Error::ParseFailure(format!(
            "document is {} bytes, limit is {}",
            html.len(),
            options.max_document_len
        )));
    }
    if let Some(pos) = html.find('\0') {
        return Err(Error::ParseFailure(format!("NUL character at byte {pos}")));
    }
    Ok(Document::from(html))
}

/// Top-level element nodes of a document, in document order.
///
/// For a parsed page this is the `html` element.
#[must_use]
pub fn top_elements(doc: &Document) -> Vec<NodeRef<'_>> {
    doc.root()
        .children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}
