//! Post walk state tracking.
//!
//! This module provides `PostWalkState`, the accumulator threaded by
//! reference through the single depth-first walk of a post page. It holds
//! one slot per fact the walk collects.
//!
//! Four slots are guarded: once filled (or, for the post time, once the
//! element has been seen) they are never overwritten. The `post-tag` and
//! `chapter` slots are not guarded and take every matching element the walk
//! visits, so their final value is the last match seen before the walk
//! stopped descending.

use dom_query::NodeRef;

use crate::dom::{self, ElementTag};
use crate::patterns;

/// Facts gathered from a post page by the depth-first walk.
#[derive(Debug, Default)]
pub struct PostWalkState<'a> {
    /// `href` of the first `link[rel=canonical]` that has one.
    pub url: Option<String>,

    /// Visible text of the first `title` element.
    pub title: Option<String>,

    /// `poster` of the first `video` that has one.
    pub img: Option<String>,

    /// Parsed time of the first `div#post-time`, if it parsed.
    pub timestamp: Option<i64>,

    /// Set once the first `div#post-time` has been visited, parsed or not.
    time_seen: bool,

    /// Most recently visited `div#post-tag`.
    pub post_tag: Option<NodeRef<'a>>,

    /// Most recently visited `div#chapter`.
    pub chapter: Option<NodeRef<'a>>,
}

impl<'a> PostWalkState<'a> {
    /// Create an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whatever `node` contributes.
    ///
    /// `utc_offset_seconds` anchors the post time to UTC.
    pub fn visit(&mut self, node: &NodeRef<'a>, utc_offset_seconds: i32) {
        match dom::element_tag(node) {
            Some(ElementTag::Link) if self.url.is_none() => {
                if dom::get_attribute(node, "rel").as_deref() == Some("canonical") {
                    if let Some(href) = dom::get_attribute(node, "href") {
                        tracing::trace!(url = %href, "canonical link");
                        self.url = Some(href);
                    }
                }
            }
            Some(ElementTag::Title) if self.title.is_none() => {
                self.title = Some(dom::collect_text(node));
            }
            Some(ElementTag::Video) if self.img.is_none() => {
                self.img = dom::get_attribute(node, "poster");
            }
            Some(ElementTag::Div) => {
                if !self.time_seen && dom::has_id(node, "post-time") {
                    let text = dom::collect_text(node);
                    self.timestamp = patterns::post_timestamp(&text, utc_offset_seconds);
                    if self.timestamp.is_none() {
                        tracing::debug!(text = %text.trim(), "post time did not parse");
                    }
                    self.time_seen = true;
                }
                if dom::has_id(node, "post-tag") {
                    self.post_tag = Some(*node);
                }
                if dom::has_id(node, "chapter") {
                    self.chapter = Some(*node);
                }
            }
            _ => {}
        }
    }

    /// True once every slot is filled and the walk may stop descending.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.img.is_some()
            && self.url.is_some()
            && self.time_seen
            && self.post_tag.is_some()
            && self.chapter.is_some()
    }
}
