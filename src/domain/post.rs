//! Post domain model.
//!
//! This module defines [`Post`], a published blog entry as delivered by the
//! post repository, together with its attached [`PostComment`]s. Posts are
//! immutable once loaded: a reload replaces the whole collection rather than
//! patching individual entries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Average reading speed used by [`reading_time_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Identifier of a post within the repository.
pub type PostId = u64;

/// A blog post as returned by the post repository.
///
/// # Fields
///
/// - `id`: Repository identifier, unique within one loaded collection
/// - `title`: Headline; the only field searched by the free-text filter
/// - `content_short`: Teaser shown in the listing
/// - `content_full`: Full body shown on the detail view
/// - `created_at`: Publication timestamp. RFC 3339, a naive date-time
///   (read as UTC) and a bare date (midnight UTC) are accepted; a missing
///   value reads as the Unix epoch
/// - `cover`: Cover image URL
/// - `tags`: Tag labels, matched with case-sensitive equality
/// - `comments`: Attached comments, absent in some payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub content_short: String,
    #[serde(default)]
    pub content_full: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<PostComment>,
}

impl Post {
    /// Creates a post with the given id and title and empty content.
    ///
    /// `created_at` is set to the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use blogview::Post;
    ///
    /// let post = Post::new(1, "Vue Best Practices").with_tags(["vue", "js"]);
    /// assert!(post.has_tag("vue"));
    /// assert!(!post.has_tag("Vue"));
    /// ```
    #[must_use]
    pub fn new(id: PostId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content_short: String::new(),
            content_full: String::new(),
            created_at: Utc::now(),
            cover: String::new(),
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Replaces the tag list.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if the post carries exactly this tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Estimated minutes needed to read the full body.
    #[must_use]
    pub fn reading_time_minutes(&self) -> usize {
        reading_time_minutes(&self.content_full)
    }
}

/// Estimated reading time of `content` in whole minutes, rounded up.
///
/// Words are runs of non-whitespace at [`WORDS_PER_MINUTE`]. Text without
/// any word takes zero minutes.
///
/// # Examples
///
/// ```
/// use blogview::domain::post::reading_time_minutes;
///
/// assert_eq!(reading_time_minutes("word"), 1);
/// assert_eq!(reading_time_minutes(&"word ".repeat(201)), 2);
/// assert_eq!(reading_time_minutes(""), 0);
/// ```
#[must_use]
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE
}

/// Parses a repository timestamp.
///
/// Tries RFC 3339 first, then a naive date-time taken as UTC, then a bare
/// `YYYY-MM-DD` date at midnight UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("unrecognized timestamp `{raw}`")))
}

/// A reader comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostComment {
    pub id: u64,
    #[serde(alias = "postId")]
    pub post_id: PostId,
    #[serde(default)]
    pub author: String,
    pub content: String,
}
