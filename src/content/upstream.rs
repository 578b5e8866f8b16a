//! Upstream content API schema and normalization
//!
//! The API has answered with a single object or with an array of candidates,
//! and has carried title/description either flat or under a `metadata` key.
//! Everything funnels through [`Payload`] into one canonical [`Post`].

use serde::Deserialize;

use super::post::{image_url, reading_time, Post};
use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// Response body: one object, or candidates where the first wins
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Many(Vec<Candidate>),
    One(Box<Candidate>),
}

impl Payload {
    /// Parse a raw response body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The authoritative candidate, if any
    pub fn first(self) -> Option<Candidate> {
        match self {
            Payload::Many(items) => items.into_iter().next(),
            Payload::One(item) => Some(*item),
        }
    }

    pub fn into_candidates(self) -> Vec<Candidate> {
        match self {
            Payload::Many(items) => items,
            Payload::One(item) => vec![*item],
        }
    }
}

/// Title/description pair as nested by newer API versions
#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One upstream post object
#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "meta")]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, alias = "sourceUrl")]
    pub url: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Keep only absolute http(s) links; anything else never reaches an `href`
fn web_link(value: Option<String>) -> Option<String> {
    let raw = non_empty(value)?;
    match reqwest::Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(raw.trim().to_string()),
        _ => {
            tracing::debug!(url = %raw, "dropping source link with unsupported scheme");
            None
        }
    }
}

impl Candidate {
    /// Normalize into a [`Post`]
    ///
    /// `fallback_slug` stands in when the candidate carries no slug; without
    /// either the candidate is unusable and `NotFound` is returned.
    pub fn normalize(self, config: &SiteConfig, fallback_slug: Option<&str>) -> Result<Post> {
        let slug = non_empty(self.slug)
            .or_else(|| fallback_slug.filter(|s| !s.is_empty()).map(str::to_string))
            .ok_or(Error::NotFound)?;

        let (nested_title, nested_description) = match self.metadata {
            Some(meta) => (meta.title, meta.description),
            None => (None, None),
        };

        let title = non_empty(self.title)
            .or(non_empty(nested_title))
            .unwrap_or_else(|| slug.clone());
        let description = non_empty(self.description)
            .or(non_empty(nested_description))
            .unwrap_or_default();
        let content = self.content.unwrap_or_default();

        Ok(Post {
            id: slug.clone(),
            reading_time: reading_time(&content),
            image_url: image_url(&config.image, &slug),
            author: non_empty(self.author).unwrap_or_else(|| config.author.clone()),
            timestamp: self.timestamp.unwrap_or_default(),
            source_url: web_link(self.url),
            slug,
            title,
            description,
            content,
        })
    }
}
