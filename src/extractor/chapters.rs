//! Chapter/time-table extraction from a post's `div#chapter`.

use dom_query::NodeRef;

use crate::dom::{self, ElementTag, NodeKind};
use crate::result::TimeTableEntry;
use crate::selector;

/// Rows of the chapter table, one per direct `a` child that has both a title
/// and a time.
///
/// The title is the anchor's first direct text node; the time is the visible
/// text of the first `span` inside it. Indices count kept rows only.
#[must_use]
pub fn time_table(chapter: &NodeRef) -> Vec<TimeTableEntry> {
    let mut rows = Vec::new();
    let mut index: u32 = 0;

    for anchor in selector::child_elements(chapter) {
        if !dom::is_tag(&anchor, ElementTag::A) {
            continue;
        }

        let title = anchor
            .children()
            .iter()
            .find_map(|child| match dom::kind(child) {
                NodeKind::Text(text) => Some(text.to_string()),
                _ => None,
            })
            .unwrap_or_default();
        let time = selector::query(&anchor, |node| dom::is_tag(node, ElementTag::Span))
            .map(|span| dom::collect_text(&span))
            .unwrap_or_default();

        if title.is_empty() || time.is_empty() {
            continue;
        }
        rows.push(TimeTableEntry { index, title, time });
        index += 1;
    }
    rows
}
