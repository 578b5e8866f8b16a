//! Post model and derived display fields

use chrono::{DateTime, FixedOffset};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::config::ImageConfig;

/// Reading rate used for `reading_time`
pub const WORDS_PER_MINUTE: usize = 200;

/// Characters left as-is in image seeds (RFC 3986 unreserved)
const SEED_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A normalized blog post
///
/// Built fresh on every fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identifier (the slug)
    pub id: String,

    /// URL-safe identifier used for lookup and routing
    pub slug: String,

    pub title: String,

    pub description: String,

    /// Raw markdown body, untrusted
    pub content: String,

    /// ISO-8601 publish instant as supplied upstream
    pub timestamp: String,

    pub author: String,

    /// e.g. "3 min read"
    pub reading_time: String,

    /// Deterministic illustrative image
    pub image_url: String,

    /// External attribution link
    pub source_url: Option<String>,
}

impl Post {
    /// Parsed publish instant, if the upstream timestamp is valid
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// Sort newest first; posts with unparseable timestamps go last
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
}

/// Minutes needed to read `content`, never below one
pub fn reading_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Display string for the reading time of `content`
pub fn reading_time(content: &str) -> String {
    format!("{} min read", reading_minutes(content))
}

/// Image URL seeded by the post identifier
pub fn image_url(image: &ImageConfig, seed: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        image.base_url.trim_end_matches('/'),
        utf8_percent_encode(seed, SEED_SET),
        image.width,
        image.height
    )
}
