//! Configuration options for extraction.
//!
//! The `Options` struct controls how raw input is accepted and how the
//! post timestamp is anchored to UTC.

/// Default upper bound on input size, in bytes.
pub const DEFAULT_MAX_DOCUMENT_LEN: usize = 16 * 1024 * 1024;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_postmeta::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     utc_offset_seconds: 9 * 3600,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Largest document accepted, in bytes.
    ///
    /// Longer inputs are rejected as a parse failure before tree construction.
    ///
    /// Default: `16 MiB`
    pub max_document_len: usize,

    /// Offset of the site's wall clock from UTC, in seconds.
    ///
    /// The post time is printed without a zone (`2023年05月01日10時`). The
    /// wall-clock value minus this offset is the stored epoch timestamp.
    ///
    /// Default: `0` (wall clock taken as UTC)
    pub utc_offset_seconds: i32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_document_len: DEFAULT_MAX_DOCUMENT_LEN,
            utc_offset_seconds: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.max_document_len, 16 * 1024 * 1024);
        assert_eq!(opts.utc_offset_seconds, 0);
    }

    #[test]
    fn test_struct_update_overrides_selected_fields_only() {
        let opts = Options {
            utc_offset_seconds: 32_400,
            ..Options::default()
        };

        assert_eq!(opts.utc_offset_seconds, 32_400);
        assert_eq!(opts.max_document_len, DEFAULT_MAX_DOCUMENT_LEN);
    }
}
