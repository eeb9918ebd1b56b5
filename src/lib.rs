//! # rs-postmeta
//!
//! Structured metadata extraction for one site's fixed-layout pages.
//!
//! Each operation is a pure function from one HTML document to a typed
//! value: the page count of a listing page, the detail URLs it lists, the
//! metadata of a single post, or the site's tag catalog.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_postmeta::post_meta;
//!
//! let html = r#"<html><head>
//!   <title>Sample</title>
//!   <link rel="canonical" href="https://example.com/rj01234">
//! </head><body>
//!   <div id="post-time">2023年05月01日10時</div>
//!   <div id="post-tag"><span>ジャンル</span><a href="/tag/asmr">ASMR</a></div>
//! </body></html>"#;
//!
//! let meta = post_meta(html)?;
//! assert_eq!(meta.id, "rj01234");
//! assert_eq!(meta.genre[0].name, "ASMR");
//! # Ok::<(), rs_postmeta::Error>(())
//! ```
//!
//! ## Status codes
//!
//! The `boundary` module wraps the same operations for callers that want a
//! numeric status and a JSON payload instead of a `Result`.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter: node classification, predicates, visible text.
pub mod dom;

/// Depth-first search helpers for locating anchors and containers.
pub mod selector;

/// Extraction pipelines and the post walk state.
pub mod extractor;

/// Numeric status codes and JSON payloads.
pub mod boundary;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_MAX_DOCUMENT_LEN};
pub use patterns::{page_count, post_id, post_timestamp, PageCount};
pub use result::{Category, PostMeta, Tag, TimeTableEntry};

/// Total page count of a listing page, using default options.
///
/// # Example
///
/// ```rust
/// use rs_postmeta::max_page;
///
/// let html = r#"<div id="container"><div id="main">
///   <div class="wp-pagenavi"><span class="pages">1 / 48</span></div>
/// </div></div>"#;
/// assert_eq!(max_page(html)?, 48);
/// # Ok::<(), rs_postmeta::Error>(())
/// ```
pub fn max_page(html: &str) -> Result<u32> {
    max_page_with_options(html, &Options::default())
}

/// Total page count of a listing page.
pub fn max_page_with_options(html: &str, options: &Options) -> Result<u32> {
    extractor::run(html, options, |doc, _| extractor::max_page(doc))
}

/// Detail-page URLs of a listing page, using default options.
///
/// A listing without a `div.post-list` yields an empty list.
pub fn detail_urls(html: &str) -> Result<Vec<String>> {
    detail_urls_with_options(html, &Options::default())
}

/// Detail-page URLs of a listing page.
pub fn detail_urls_with_options(html: &str, options: &Options) -> Result<Vec<String>> {
    extractor::run(html, options, |doc, _| extractor::detail_urls(doc))
}

/// Metadata of a post page, using default options.
pub fn post_meta(html: &str) -> Result<PostMeta> {
    post_meta_with_options(html, &Options::default())
}

/// Metadata of a post page.
pub fn post_meta_with_options(html: &str, options: &Options) -> Result<PostMeta> {
    extractor::run(html, options, extractor::post_meta)
}

/// The site's tag catalog, using default options.
///
/// `Ok(None)` means the page has `div#main` but no `div.tag-list`.
///
/// # Example
///
/// ```rust
/// use rs_postmeta::tag_catalog;
///
/// let html = r#"<div id="main"><div class="tag-list">
///   <a href="/tag/asmr"><span>120</span>ASMR</a>
/// </div></div>"#;
/// let tags = tag_catalog(html)?.unwrap_or_default();
/// assert_eq!(tags[0].name, "ASMR");
/// # Ok::<(), rs_postmeta::Error>(())
/// ```
pub fn tag_catalog(html: &str) -> Result<Option<Vec<Tag>>> {
    tag_catalog_with_options(html, &Options::default())
}

/// The site's tag catalog.
pub fn tag_catalog_with_options(html: &str, options: &Options) -> Result<Option<Vec<Tag>>> {
    extractor::run(html, options, |doc, _| extractor::tag_catalog(doc))
}
