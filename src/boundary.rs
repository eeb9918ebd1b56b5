//! Status-code boundary.
//!
//! Callers that cannot take a typed `Result` (a scheduler passing raw page
//! bodies around, the `extract_stdin` binary) use these functions instead.
//! Each takes one document and returns a `Report`: a numeric status plus an
//! optional JSON payload.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | ok |
//! | 1    | input could not be parsed |
//! | 2    | required anchor or field missing |
//! | 3    | content does not match its micro-format |
//! | 4    | internal error |
//! | 100  | tag list absent (tag catalog only) |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::{encoding, Error, Options, Result};

/// Outcome of one boundary call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    ParseFailed,
    NotFound,
    FormatMismatch,
    Internal,
    SoftNotFound,
}

impl Status {
    /// Numeric code handed to callers.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::ParseFailed => 1,
            Self::NotFound => 2,
            Self::FormatMismatch => 3,
            Self::Internal => 4,
            Self::SoftNotFound => 100,
        }
    }
}

impl From<&Error> for Status {
    fn from(err: &Error) -> Self {
        match err {
            Error::ParseFailure(_) => Self::ParseFailed,
            Error::StructureNotFound(_) => Self::NotFound,
            Error::FormatMismatch(_) => Self::FormatMismatch,
            Error::InternalError(_) => Self::Internal,
        }
    }
}

/// Status and optional payload of one boundary call.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: Status,
    pub payload: Option<Value>,
}

impl Report {
    fn ok<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(payload) => Self {
                status: Status::Ok,
                payload: Some(payload),
            },
            Err(err) => Self::failed(&Error::InternalError(err.to_string())),
        }
    }

    fn failed(err: &Error) -> Self {
        tracing::debug!(%err, "extraction failed");
        Self {
            status: Status::from(err),
            payload: None,
        }
    }

    fn from_result<T: Serialize>(result: &Result<T>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::failed(err),
        }
    }

    /// Numeric status code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.status.code()
    }

    /// Payload as compact JSON, `null` when absent.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.payload
            .as_ref()
            .map_or_else(|| "null".to_string(), Value::to_string)
    }
}

/// Total page count. The payload is always present and is `0` on failure.
#[must_use]
pub fn find_max_idx(html: &str, options: &Options) -> Report {
    let result = crate::max_page_with_options(html, options);
    let mut report = Report::from_result(&result);
    if report.payload.is_none() {
        report.payload = Some(Value::from(0));
    }
    report
}

/// Detail-page URLs of a listing page.
#[must_use]
pub fn find_detail(html: &str, options: &Options) -> Report {
    Report::from_result(&crate::detail_urls_with_options(html, options))
}

/// Metadata of a post page.
#[must_use]
pub fn find_meta(html: &str, options: &Options) -> Report {
    Report::from_result(&crate::post_meta_with_options(html, options))
}

/// Tag catalog. A missing tag list reports status 100 with an empty array.
#[must_use]
pub fn update_tag(html: &str, options: &Options) -> Report {
    match crate::tag_catalog_with_options(html, options) {
        Ok(Some(tags)) => Report::ok(&tags),
        Ok(None) => Report {
            status: Status::SoftNotFound,
            payload: Some(Value::Array(Vec::new())),
        },
        Err(err) => Report::failed(&err),
    }
}

/// The four boundary operations, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    MaxIdx,
    Detail,
    Meta,
    UpdateTag,
}

impl Operation {
    /// All operations.
    pub const ALL: [Operation; 4] = [
        Operation::MaxIdx,
        Operation::Detail,
        Operation::Meta,
        Operation::UpdateTag,
    ];

    /// Name accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MaxIdx => "max-idx",
            Self::Detail => "detail",
            Self::Meta => "meta",
            Self::UpdateTag => "update-tag",
        }
    }

    /// Run this operation on a document.
    #[must_use]
    pub fn run(self, html: &str, options: &Options) -> Report {
        match self {
            Self::MaxIdx => find_max_idx(html, options),
            Self::Detail => find_detail(html, options),
            Self::Meta => find_meta(html, options),
            Self::UpdateTag => update_tag(html, options),
        }
    }

    /// Run this operation on raw bytes, transcoding them to UTF-8 first.
    #[must_use]
    pub fn run_bytes(self, html: &[u8], options: &Options) -> Report {
        self.run(&encoding::transcode_to_utf8(html), options)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown operation name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation {0:?}, expected one of: max-idx, detail, meta, update-tag")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
