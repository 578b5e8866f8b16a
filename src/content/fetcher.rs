//! Content fetcher - retrieves posts from the content API

use chrono::{Duration, SecondsFormat, Utc};
use std::sync::Arc;

use super::notify::{LogNotifier, Notification, Notifier};
use super::post::{sort_newest_first, Post};
use super::upstream::{Candidate, Payload};
use crate::config::SiteConfig;
use crate::error::{Error, Result};

/// Fetches posts and normalizes them into [`Post`] records
///
/// Failures never escape `fetch_post` / `fetch_recent_posts`: they are logged,
/// reported to the notifier when the reader should know, and collapse into
/// an absent result.
#[derive(Clone)]
pub struct ContentFetcher {
    client: reqwest::Client,
    config: Arc<SiteConfig>,
    notifier: Arc<dyn Notifier>,
}

impl ContentFetcher {
    /// Create a fetcher that reports failures to the log
    pub fn new(config: Arc<SiteConfig>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            client,
            config,
            notifier: Arc::new(LogNotifier),
        })
    }

    /// Same fetcher, different notification sink
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch one post by slug, or `None` when missing or unavailable
    pub async fn fetch_post(&self, slug: &str) -> Option<Post> {
        match self.try_fetch_post(slug).await {
            Ok(post) => Some(post),
            Err(e) => {
                self.absorb(&e, slug);
                None
            }
        }
    }

    /// Fetch one post, keeping the failure reason
    pub async fn try_fetch_post(&self, slug: &str) -> Result<Post> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(Error::NotFound);
        }

        tracing::debug!(slug, "fetching post");
        let request = self
            .client
            .get(&self.config.api.content_endpoint)
            .query(&[("slug", slug)]);

        self.send(request)
            .await?
            .first()
            .ok_or(Error::NotFound)?
            .normalize(&self.config, Some(slug))
    }

    /// Recent posts, newest first; empty when the feed is unavailable
    pub async fn fetch_recent_posts(&self) -> Vec<Post> {
        match self.try_fetch_recent_posts().await {
            Ok(posts) => posts,
            Err(e) => {
                self.absorb(&e, "recent");
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_recent_posts(&self) -> Result<Vec<Post>> {
        let candidates = match &self.config.api.recent_endpoint {
            Some(url) => {
                tracing::debug!(url = %url, "fetching recent posts");
                self.send(self.client.get(url)).await?.into_candidates()
            }
            None => self.static_feed(),
        };

        let mut posts: Vec<Post> = candidates
            .into_iter()
            .filter_map(|candidate| match candidate.normalize(&self.config, None) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping feed entry without slug");
                    None
                }
            })
            .collect();

        sort_newest_first(&mut posts);
        Ok(posts)
    }

    /// Configured feed entries, timestamped relative to now
    fn static_feed(&self) -> Vec<Candidate> {
        let now = Utc::now();
        self.config
            .recent_posts
            .iter()
            .map(|entry| Candidate {
                slug: Some(entry.slug.clone()),
                content: Some(entry.content.clone()),
                title: Some(entry.title.clone()),
                description: Some(entry.description.clone()),
                timestamp: Some(
                    (now - Duration::days(entry.age_days))
                        .to_rfc3339_opts(SecondsFormat::Millis, true),
                ),
                url: entry.url.clone(),
                ..Candidate::default()
            })
            .collect()
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Payload> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        Payload::from_slice(&body)
    }

    fn absorb(&self, error: &Error, identifier: &str) {
        if error.is_fetch_failure() {
            tracing::warn!(identifier, kind = error.kind(), error = %error, "fetch failed");
            self.notifier.notify(Notification::fetch_failed());
        } else {
            tracing::debug!(identifier, kind = error.kind(), "nothing to show");
        }
    }
}
