//! Tag-category extraction from a post's `div#post-tag`.
//!
//! The container is a flat run of labels and links:
//!
//! ```text
//! <span>声優</span><a href="/1">A</a><a href="/2">B</a><span>ジャンル</span><a href="/3">C</a>
//! ```
//!
//! Each `span` sets the current label; each following `a` is filed under the
//! category that label names.

use dom_query::NodeRef;

use crate::dom::{self, ElementTag};
use crate::result::{Category, PostMeta, Tag};
use crate::selector;

/// File every categorized link under `post_tag` into `meta`.
///
/// Links seen before any label, links without an `href` and links under a
/// label that names no category are dropped. A link with no visible text is
/// kept with an empty name.
pub fn collect_categories(post_tag: &NodeRef, meta: &mut PostMeta) {
    let mut label = String::new();

    for child in selector::child_elements(post_tag) {
        match dom::element_tag(&child) {
            Some(ElementTag::Span) => label = dom::collect_text(&child),
            Some(ElementTag::A) if !label.is_empty() => {
                let Some(category) = Category::from_label(&label) else {
                    continue;
                };
                let Some(url) = dom::get_attribute(&child, "href") else {
                    continue;
                };
                let name = dom::collect_text(&child);
                meta.category_mut(category).push(Tag { name, url });
            }
            _ => {}
        }
    }
}
