//! Extraction pipelines.
//!
//! # Module Structure
//!
//! - `pagination`: total page count of a listing page
//! - `listing`: detail-page URLs of a listing page
//! - `post`: metadata of a post page, built from
//!   - `state`: the accumulator threaded through the post walk
//!   - `tags`: tag categories under `div#post-tag`
//!   - `chapters`: the chapter/time table under `div#chapter`
//! - `catalog`: the standalone tag catalog
//!
//! Each pipeline reads an already parsed `Document`. `run` is the boundary
//! every public entry point goes through: it parses the input, owns the
//! document for the duration of the pipeline, and turns a panic inside the
//! pipeline into `Error::InternalError`.

pub mod catalog;
pub mod chapters;
pub mod listing;
pub mod pagination;
pub mod post;
pub mod state;
pub mod tags;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use dom_query::{Document, NodeRef};

use crate::dom::{self, ElementTag};
use crate::selector;
use crate::{Error, Options, Result};

pub use catalog::tag_catalog;
pub use listing::detail_urls;
pub use pagination::max_page;
pub use post::post_meta;
pub use state::PostWalkState;

/// First `div#main` anywhere in the document.
pub(crate) fn find_main_div(doc: &Document) -> Option<NodeRef<'_>> {
    selector::query_in(
        &dom::top_elements(doc),
        selector::tag_with_id(ElementTag::Div, "main"),
    )
}

/// Parse `html` and run `pipeline` over the document.
///
/// The document is dropped before this returns on every path, including a
/// panic unwinding out of the pipeline.
pub fn run<T>(
    html: &str,
    options: &Options,
    pipeline: impl FnOnce(&Document, &Options) -> Result<T>,
) -> Result<T> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let doc = dom::parse(html, options)?;
        pipeline(&doc, options)
    }));

    outcome.unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        tracing::warn!(%message, "extraction panicked");
        Err(Error::InternalError(message))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
