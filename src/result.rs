//! Result types for extraction output.
//!
//! These are plain value records built fresh for every call. Field names on
//! the wire follow the format downstream consumers already read
//! (`img_src`, `time`, `time_table`).

use serde::{Deserialize, Serialize};

/// A labelled link: a tag on a post page or an entry in the tag catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Link label.
    pub name: String,

    /// Link target, exactly as written in the `href` attribute.
    pub url: String,
}

/// One row of a post's chapter/time table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTableEntry {
    /// Zero-based position among the rows that were kept.
    pub index: u32,

    /// Chapter title.
    pub title: String,

    /// Chapter time marker, as printed.
    pub time: String,
}

/// The six tag categories a post page groups its tags under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 声優
    Cv,
    /// サークル
    Circle,
    /// シナリオ
    Scenario,
    /// イラスト
    Illust,
    /// ジャンル
    Genre,
    /// シリーズ
    Series,
}

impl Category {
    /// All categories, in wire order.
    pub const ALL: [Category; 6] = [
        Category::Cv,
        Category::Circle,
        Category::Scenario,
        Category::Illust,
        Category::Genre,
        Category::Series,
    ];

    /// Map a label to its category by exact string match.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "声優" => Some(Self::Cv),
            "サークル" => Some(Self::Circle),
            "シナリオ" => Some(Self::Scenario),
            "イラスト" => Some(Self::Illust),
            "ジャンル" => Some(Self::Genre),
            "シリーズ" => Some(Self::Series),
            _ => None,
        }
    }

    /// The label the site prints for this category.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Cv => "声優",
            Self::Circle => "サークル",
            Self::Scenario => "シナリオ",
            Self::Illust => "イラスト",
            Self::Genre => "ジャンル",
            Self::Series => "シリーズ",
        }
    }
}

/// Metadata of a single post page.
///
/// Only materialized when the canonical URL, title and timestamp were all
/// found and an id could be derived from the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Post id derived from the canonical URL (`rj<digits>`).
    pub id: String,

    /// Text of the document `<title>`.
    pub title: String,

    /// Canonical URL.
    pub url: String,

    /// Poster image of the first video carrying one.
    #[serde(rename = "img_src")]
    pub img: Option<String>,

    /// Publish time in seconds since the Unix epoch.
    #[serde(rename = "time")]
    pub timestamp: i64,

    pub cv: Vec<Tag>,
    pub circle: Vec<Tag>,
    pub scenario: Vec<Tag>,
    pub illust: Vec<Tag>,
    pub genre: Vec<Tag>,
    pub series: Vec<Tag>,

    /// Chapter/time table.
    pub time_table: Vec<TimeTableEntry>,
}

impl PostMeta {
    /// Tags filed under one category.
    #[must_use]
    pub fn category(&self, category: Category) -> &[Tag] {
        match category {
            Category::Cv => &self.cv,
            Category::Circle => &self.circle,
            Category::Scenario => &self.scenario,
            Category::Illust => &self.illust,
            Category::Genre => &self.genre,
            Category::Series => &self.series,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut Vec<Tag> {
        match category {
            Category::Cv => &mut self.cv,
            Category::Circle => &mut self.circle,
            Category::Scenario => &mut self.scenario,
            Category::Illust => &mut self.illust,
            Category::Genre => &mut self.genre,
            Category::Series => &mut self.series,
        }
    }

    /// Total number of tags across all categories.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        Category::ALL.iter().map(|&c| self.category(c).len()).sum()
    }
}
