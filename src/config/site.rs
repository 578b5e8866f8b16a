//! Site configuration (_config.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Display author used when the upstream does not supply one
    pub author: String,
    pub about_url: String,

    /// Directory served under /static, relative to the base directory
    pub static_dir: Option<String>,

    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Feed used when `api.recent_endpoint` is not set
    pub recent_posts: Vec<FeedEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Digital Software Planet".to_string(),
            subtitle: "Insights and innovations from the digital software world".to_string(),
            description: "Digital Software Planet Blog".to_string(),
            author: "techrealm.pk".to_string(),
            about_url: "https://techrealm.pk".to_string(),
            static_dir: None,
            api: ApiConfig::default(),
            image: ImageConfig::default(),
            markdown: MarkdownConfig::default(),
            recent_posts: FeedEntry::placeholders(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Content API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Queried as `GET <content_endpoint>?slug=<identifier>`
    pub content_endpoint: String,
    /// Optional list endpoint for the recent posts feed
    pub recent_endpoint: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            content_endpoint: "https://microsoftdsp.techrealm.online/content".to_string(),
            recent_endpoint: None,
        }
    }
}

/// Illustrative image service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://picsum.photos/seed".to_string(),
            width: 800,
            height: 400,
        }
    }
}

/// Markdown rendering limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Content larger than this renders the fallback message
    pub max_bytes: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            max_bytes: 16 * 1024 * 1024,
        }
    }
}

/// A statically configured feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// Age relative to the time of the fetch
    #[serde(default)]
    pub age_days: i64,
    #[serde(default)]
    pub url: Option<String>,
}

impl FeedEntry {
    fn placeholders() -> Vec<Self> {
        vec![
            Self {
                slug: "your-product-slug".to_string(),
                title: "Digital Software Planet Blog".to_string(),
                description: "Explore the latest insights from the Digital Software Planet blog."
                    .to_string(),
                content: "...".to_string(),
                age_days: 0,
                url: None,
            },
            Self {
                slug: "getting-started".to_string(),
                title: "Getting Started with Digital Software Planet".to_string(),
                description: "Learn how to begin your journey with Digital Software Planet."
                    .to_string(),
                content: "...".to_string(),
                age_days: 1,
                url: None,
            },
            Self {
                slug: "best-practices".to_string(),
                title: "Best Practices for Software Development".to_string(),
                description:
                    "Discover the top recommended practices for modern software development."
                        .to_string(),
                content: "...".to_string(),
                age_days: 2,
                url: None,
            },
        ]
    }
}
