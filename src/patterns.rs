//! Compiled regex patterns and micro-format parsers.
//!
//! All patterns are compiled once at first use using `LazyLock`. Each
//! micro-format the pipelines read (page counter, post id, post time) is a
//! pure function from text to an optional typed value so it can be tested
//! apart from tree traversal.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

// =============================================================================
// Listing Page Patterns
// =============================================================================

/// Matches the pagination counter, e.g. `3 / 48`. Group 1 is the total.
///
/// Digits are ASCII only; fullwidth numerals are not a counter.
pub static PAGE_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+ / ([0-9]+)").expect("PAGE_COUNTER regex")
});

// =============================================================================
// Post Page Patterns
// =============================================================================

/// Matches the post id embedded in a canonical URL, e.g. `rj01234567`.
pub static POST_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rj[0-9]+").expect("POST_ID regex")
});

/// Matches the post time, e.g. `2023年05月01日10時`.
///
/// Leading whitespace is tolerated; anything after the hour is ignored.
pub static POST_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})日([0-9]{1,2})時").expect("POST_TIME regex")
});

/// Outcome of reading the pagination counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    /// The counter matched and the total fits in `u32`.
    Total(u32),
    /// The counter matched but the total does not fit in `u32`.
    Overflow,
    /// The text does not contain a `<digits> / <digits>` counter.
    NoMatch,
}

/// Read the total page count from pagination text such as `Page 3 / 48`.
#[must_use]
pub fn page_count(text: &str) -> PageCount {
    let Some(total) = PAGE_COUNTER.captures(text).and_then(|c| c.get(1)) else {
        return PageCount::NoMatch;
    };
    total
        .as_str()
        .parse::<u32>()
        .map_or(PageCount::Overflow, PageCount::Total)
}

/// Derive the post id from its canonical URL.
///
/// Returns the first `rj<digits>` run in the URL.
#[must_use]
pub fn post_id(url: &str) -> Option<String> {
    POST_ID.find(url).map(|m| m.as_str().to_string())
}

/// Convert the post time text into seconds since the Unix epoch.
///
/// `utc_offset_seconds` is the offset of the printed wall clock from UTC.
/// Returns `None` when the text does not match or the fields do not form a
/// valid calendar date and hour.
#[must_use]
pub fn post_timestamp(text: &str, utc_offset_seconds: i32) -> Option<i64> {
    let caps = POST_TIME.captures(text)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = i32::try_from(field(1)?).ok()?;
    let wall_clock = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?
        .and_hms_opt(field(4)?, 0, 0)?
        .and_utc()
        .timestamp();

    Some(wall_clock - i64::from(utc_offset_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_reads_second_number() {
        assert_eq!(page_count("3 / 48"), PageCount::Total(48));
        assert_eq!(page_count("Page 1 / 7 "), PageCount::Total(7));
    }

    #[test]
    fn page_count_rejects_other_text() {
        assert_eq!(page_count("bogus"), PageCount::NoMatch);
        assert_eq!(page_count("3/48"), PageCount::NoMatch);
        assert_eq!(page_count(""), PageCount::NoMatch);
        assert_eq!(page_count("１ / ４８"), PageCount::NoMatch);
    }

    #[test]
    fn page_count_flags_overflow() {
        assert_eq!(page_count("1 / 99999999999"), PageCount::Overflow);
    }

    #[test]
    fn post_id_takes_first_run() {
        assert_eq!(post_id("https://x/rj12345"), Some("rj12345".to_string()));
        assert_eq!(
            post_id("https://x/rj01/rj02"),
            Some("rj01".to_string())
        );
    }

    #[test]
    fn post_id_requires_digits() {
        assert_eq!(post_id("https://x/rj"), None);
        assert_eq!(post_id("https://x/RJ12345"), None);
    }

    #[test]
    fn post_timestamp_parses_fixed_pattern() {
        // 2023-05-01T10:00:00Z
        assert_eq!(post_timestamp("2023年05月01日10時", 0), Some(1_682_935_200));
        assert_eq!(post_timestamp("\n  2023年5月1日10時\n", 0), Some(1_682_935_200));
    }

    #[test]
    fn post_timestamp_applies_offset() {
        assert_eq!(
            post_timestamp("2023年05月01日10時", 9 * 3600),
            Some(1_682_935_200 - 32_400)
        );
    }

    #[test]
    fn post_timestamp_rejects_invalid() {
        assert_eq!(post_timestamp("2023-05-01 10:00", 0), None);
        assert_eq!(post_timestamp("2023年13月01日10時", 0), None);
        assert_eq!(post_timestamp("2023年02月30日10時", 0), None);
        assert_eq!(post_timestamp("2023年05月01日25時", 0), None);
    }
}
