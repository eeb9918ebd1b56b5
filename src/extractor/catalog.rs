//! Tag catalog extraction.
//!
//! Assumed structure:
//!
//! ```text
//! div#main
//! └── div.tag-list
//!     ├── a[href]  <span>12</span> Label
//!     └── ...
//! ```
//!
//! The label is the anchor's last direct text node, which skips a leading
//! count badge.

use dom_query::{Document, NodeRef};

use crate::dom::{self, ElementTag, NodeKind};
use crate::result::Tag;
use crate::selector;
use crate::{Error, Result};

/// Tags listed in the catalog.
///
/// Returns `Ok(None)` when `div#main` has no `div.tag-list`; that is a soft
/// miss, distinct from the missing `div#main` error. When several
/// `div.tag-list` children exist only the last one is read.
pub fn tag_catalog(doc: &Document) -> Result<Option<Vec<Tag>>> {
    let Some(main) = super::find_main_div(doc) else {
        tracing::debug!("no div#main");
        return Err(Error::StructureNotFound("div#main"));
    };

    let Some(tag_list) =
        selector::last_child(&main, selector::tag_with_class(ElementTag::Div, "tag-list"))
    else {
        tracing::debug!("div#main has no div.tag-list");
        return Ok(None);
    };

    let tags: Vec<Tag> = selector::child_elements(&tag_list)
        .iter()
        .filter(|node| dom::is_tag(node, ElementTag::A))
        .filter_map(catalog_entry)
        .collect();
    tracing::debug!(count = tags.len(), "tag catalog");
    Ok(Some(tags))
}

/// One catalog anchor as a `Tag`, if it has both an `href` and a label.
fn catalog_entry(anchor: &NodeRef) -> Option<Tag> {
    let url = dom::get_attribute(anchor, "href")?;
    let name = anchor
        .children()
        .iter()
        .filter_map(|child| match dom::kind(child) {
            NodeKind::Text(text) => Some(text),
            _ => None,
        })
        .last()?
        .to_string();
    Some(Tag { name, url })
}
