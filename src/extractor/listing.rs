//! Detail-page URLs from a listing page.
//!
//! Assumed structure:
//!
//! ```text
//! div#main
//! ├── div.pop...
//! └── div.post-list
//!     ├── a[href]
//!     └── ...
//! ```

use dom_query::Document;

use crate::dom::ElementTag;
use crate::selector;
use crate::{Error, Result};

/// Detail-page URLs listed on a listing page, in document order.
///
/// A missing `div.post-list` yields an empty list. When `div#main` holds
/// several `div.post-list` children only the last one is read.
pub fn detail_urls(doc: &Document) -> Result<Vec<String>> {
    let Some(main) = super::find_main_div(doc) else {
        tracing::debug!("no div#main");
        return Err(Error::StructureNotFound("div#main"));
    };

    let Some(post_list) =
        selector::last_child(&main, selector::tag_with_class(ElementTag::Div, "post-list"))
    else {
        tracing::debug!("div#main has no div.post-list");
        return Ok(Vec::new());
    };

    let urls = selector::child_hrefs(&post_list);
    tracing::debug!(count = urls.len(), "detail urls");
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(body: &str) -> Result<Vec<String>> {
        detail_urls(&Document::from(format!("<html><body>{body}</body></html>")))
    }

    #[test]
    fn collects_hrefs_in_order() {
        let html = r#"<div id="main"><div class="post-list">
            <a href="/a"><img src="a.jpg"></a>
            <a href="/b"></a>
            <a href="/c"></a>
        </div></div>"#;
        assert_eq!(urls(html), Ok(vec!["/a".into(), "/b".into(), "/c".into()]));
    }

    #[test]
    fn missing_post_list_is_empty() {
        let html = r#"<div id="main"><div class="pop-list"><a href="/x"></a></div></div>"#;
        assert_eq!(urls(html), Ok(Vec::new()));
    }

    #[test]
    fn last_post_list_wins() {
        let html = r#"<div id="main">
            <div class="post-list"><a href="/old"></a></div>
            <div class="post-list"><a href="/new1"></a><a href="/new2"></a></div>
        </div>"#;
        assert_eq!(urls(html), Ok(vec!["/new1".into(), "/new2".into()]));
    }

    #[test]
    fn missing_main_is_not_found() {
        let html = r#"<div class="post-list"><a href="/a"></a></div>"#;
        assert_eq!(urls(html), Err(Error::StructureNotFound("div#main")));
    }

    #[test]
    fn nested_post_list_is_ignored() {
        let html = r#"<div id="main"><div><div class="post-list"><a href="/a"></a></div></div></div>"#;
        assert_eq!(urls(html), Ok(Vec::new()));
    }
}
