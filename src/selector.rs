//! Tree Locator
//!
//! Depth-first search helpers every pipeline uses to find its anchor and the
//! containers inside it. Rules are plain closures over a single node.
//!
//! The direct-children helpers come in two flavours on purpose: `first_child`
//! stops at the first match, `last_child` keeps scanning so the final
//! qualifying sibling wins. Pipelines pick one per container and the choice
//! is observable on pages with duplicated markup.

use dom_query::NodeRef;

use crate::dom::{self, ElementTag};

/// First element in a pre-order walk of `root`'s subtree (including `root`)
/// for which `rule` holds.
///
/// Once a match is found no further nodes are visited. The walk keeps its
/// own stack, so nesting depth is bounded by memory rather than the thread
/// stack.
#[must_use]
pub fn query<'a>(root: &NodeRef<'a>, rule: impl Fn(&NodeRef<'a>) -> bool) -> Option<NodeRef<'a>> {
    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        if !node.is_element() {
            continue;
        }
        if rule(&node) {
            return Some(node);
        }
        stack.extend(node.children().into_iter().rev());
    }
    None
}

/// `query` over several roots in order, e.g. the top-level nodes of a document.
#[must_use]
pub fn query_in<'a>(
    roots: &[NodeRef<'a>],
    rule: impl Fn(&NodeRef<'a>) -> bool,
) -> Option<NodeRef<'a>> {
    roots.iter().find_map(|root| query(root, &rule))
}

/// Direct element children of `parent`, in document order.
#[must_use]
pub fn child_elements<'a>(parent: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    parent
        .children()
        .into_iter()
        .filter(NodeRef::is_element)
        .collect()
}

/// First direct child element matching `rule`.
#[must_use]
pub fn first_child<'a>(
    parent: &NodeRef<'a>,
    rule: impl Fn(&NodeRef<'a>) -> bool,
) -> Option<NodeRef<'a>> {
    child_elements(parent).into_iter().find(|c| rule(c))
}

/// Last direct child element matching `rule`.
///
/// Every child is examined and each match overwrites the previous one.
#[must_use]
pub fn last_child<'a>(
    parent: &NodeRef<'a>,
    rule: impl Fn(&NodeRef<'a>) -> bool,
) -> Option<NodeRef<'a>> {
    let mut found = None;
    for child in child_elements(parent) {
        if rule(&child) {
            found = Some(child);
        }
    }
    found
}

/// Rule: `tag` element with exact `id`.
pub fn tag_with_id<'a>(tag: ElementTag, id: &'static str) -> impl Fn(&NodeRef<'a>) -> bool {
    move |node: &NodeRef<'a>| dom::is_tag(node, tag) && dom::has_id(node, id)
}

/// Rule: `tag` element with exact `class`.
pub fn tag_with_class<'a>(tag: ElementTag, class: &'static str) -> impl Fn(&NodeRef<'a>) -> bool {
    move |node: &NodeRef<'a>| dom::is_tag(node, tag) && dom::has_class(node, class)
}

/// `href` values of `parent`'s direct `a` children, in document order.
///
/// Anchors without an `href` are skipped.
#[must_use]
pub fn child_hrefs(parent: &NodeRef) -> Vec<String> {
    child_elements(parent)
        .iter()
        .filter(|c| dom::is_tag(c, ElementTag::A))
        .filter_map(|c| dom::get_attribute(c, "href"))
        .collect()
}
