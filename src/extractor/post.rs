//! Post-page metadata extraction.
//!
//! One depth-first walk over the whole document fills a `PostWalkState`.
//! Every element the walk reaches is recorded; descent below an element is
//! skipped once the state is complete. Siblings already queued on the way
//! down are still visited, which is what lets a later `div#post-tag` or
//! `div#chapter` replace an earlier one.

use dom_query::{Document, NodeRef};

use super::state::PostWalkState;
use super::{chapters, tags};
use crate::dom;
use crate::patterns;
use crate::result::PostMeta;
use crate::{Error, Options, Result};

/// Metadata of a post page.
///
/// Fails with `StructureNotFound` when the canonical URL, the title or the
/// post time is missing (or empty, or did not parse), and with
/// `FormatMismatch` when no `rj<digits>` id can be read from the URL.
pub fn post_meta(doc: &Document, options: &Options) -> Result<PostMeta> {
    let mut state = PostWalkState::new();
    walk(dom::top_elements(doc), &mut state, options);

    let url = state
        .url
        .filter(|url| !url.is_empty())
        .ok_or(Error::StructureNotFound("link[rel=canonical]"))?;
    let title = state
        .title
        .filter(|title| !title.is_empty())
        .ok_or(Error::StructureNotFound("title"))?;
    let timestamp = state
        .timestamp
        .filter(|&t| t != 0)
        .ok_or(Error::StructureNotFound("div#post-time"))?;

    let id = patterns::post_id(&url)
        .ok_or_else(|| Error::FormatMismatch(format!("no post id in {url:?}")))?;

    let mut meta = PostMeta {
        id,
        title,
        url,
        img: state.img,
        timestamp,
        ..PostMeta::default()
    };

    if let Some(post_tag) = state.post_tag {
        tags::collect_categories(&post_tag, &mut meta);
    }
    if let Some(chapter) = state.chapter {
        meta.time_table = chapters::time_table(&chapter);
    }

    tracing::debug!(
        id = %meta.id,
        tags = meta.tag_count(),
        chapters = meta.time_table.len(),
        "post meta"
    );
    Ok(meta)
}

/// Pre-order walk over `roots` driven by an explicit stack.
///
/// Children are pushed only while the state is incomplete; nodes already on
/// the stack are still visited.
fn walk<'a>(roots: Vec<NodeRef<'a>>, state: &mut PostWalkState<'a>, options: &Options) {
    let mut stack: Vec<NodeRef<'a>> = roots.into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        if !node.is_element() {
            continue;
        }
        state.visit(&node, options.utc_offset_seconds);
        if state.is_complete() {
            continue;
        }
        stack.extend(node.children().into_iter().rev());
    }
}
