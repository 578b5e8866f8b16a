//! planet-blog: a server-rendered blog front-end over a remote content API
//!
//! Posts are fetched from a REST-style content API, normalized into a stable
//! [`content::Post`] record, and their untrusted markdown bodies are rendered
//! through a parse-then-sanitize pipeline before display.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod templates;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: Arc<config::SiteConfig>,
    /// Base directory
    pub base_dir: PathBuf,
    /// Post fetcher
    pub fetcher: content::ContentFetcher,
    /// Markdown renderer
    pub renderer: content::MarkdownRenderer,
}

impl Blog {
    /// Create a new blog instance from a directory
    ///
    /// Reads `_config.yml` when present and falls back to defaults otherwise.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::from_config(base_dir, config)
    }

    /// Create a blog instance from an already loaded configuration
    pub fn from_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let config = Arc::new(config);
        let fetcher = content::ContentFetcher::new(config.clone())?;
        let renderer = content::MarkdownRenderer::with_options(&config.markdown);

        Ok(Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
            fetcher,
            renderer,
        })
    }

    /// Directory served under /static, if configured
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.config
            .static_dir
            .as_ref()
            .map(|dir| self.base_dir.join(dir))
    }
}
