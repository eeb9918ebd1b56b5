//! Pagination extraction for listing pages.
//!
//! Assumed structure:
//!
//! ```text
//! div#container
//! └── div#main
//!     ├── div ...
//!     └── div.wp-pagenavi
//!         └── *.pages        "1 / 48"
//! ```
//!
//! Some listing pages nest `container`/`main` differently or carry no
//! pagination at all, so the anchor is the first `div#container` anywhere in
//! the document that has a `div#main` direct child.

use dom_query::{Document, NodeRef};

use crate::dom::{self, ElementTag};
use crate::patterns::{self, PageCount};
use crate::selector;
use crate::{Error, Result};

/// Class values accepted on the page counter element.
///
/// WP-PageNavi prints `pages`; some mirrors print `page`.
const COUNTER_CLASSES: [&str; 2] = ["pages", "page"];

/// Total page count of a listing page.
pub fn max_page(doc: &Document) -> Result<u32> {
    let Some(main) = find_main(doc) else {
        tracing::debug!("no div#container > div#main");
        return Err(Error::StructureNotFound("div#container > div#main"));
    };
    find_page_count(&main)
}

/// First `div#main` that is a direct child of a `div#container`.
fn find_main(doc: &Document) -> Option<NodeRef<'_>> {
    let is_main = selector::tag_with_id(ElementTag::Div, "main");
    let container = selector::query_in(&dom::top_elements(doc), |node| {
        dom::is_tag(node, ElementTag::Div)
            && dom::has_id(node, "container")
            && selector::first_child(node, &is_main).is_some()
    })?;
    selector::first_child(&container, &is_main)
}

/// Read the counter from the first `div.wp-pagenavi` that has one.
fn find_page_count(main: &NodeRef) -> Result<u32> {
    let is_navi = selector::tag_with_class(ElementTag::Div, "wp-pagenavi");
    for navi in selector::child_elements(main) {
        if !is_navi(&navi) {
            continue;
        }
        let counter = selector::first_child(&navi, |node| {
            COUNTER_CLASSES.iter().any(|class| dom::has_class(node, class))
        });
        let Some(counter) = counter else {
            continue;
        };

        let text = dom::collect_text(&counter);
        tracing::trace!(text = %text, "page counter");
        return match patterns::page_count(&text) {
            PageCount::Total(total) => Ok(total),
            PageCount::NoMatch => Err(Error::FormatMismatch(format!(
                "page counter {:?} is not `<n> / <total>`",
                text.trim()
            ))),
            PageCount::Overflow => Err(Error::InternalError(format!(
                "page total in {:?} does not fit u32",
                text.trim()
            ))),
        };
    }
    Err(Error::FormatMismatch(
        "div#main has no div.wp-pagenavi page counter".to_string(),
    ))
}
