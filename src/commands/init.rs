//! Initialize a new blog directory

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Blog Configuration

# Site
title: Digital Software Planet
subtitle: Insights and innovations from the digital software world
description: Digital Software Planet Blog
# Shown when the content API does not name an author
author: techrealm.pk
about_url: https://techrealm.pk

# Directory served under /static (expects style.css)
# static_dir: static

# Content API
api:
  content_endpoint: https://microsoftdsp.techrealm.online/content
  # recent_endpoint: https://example.com/posts

# Illustrative images, seeded by post slug
image:
  base_url: https://picsum.photos/seed
  width: 800
  height: 400

# Markdown
# Post bodies larger than max_bytes are rejected and shown as
# "Error rendering content" instead of being rendered.
markdown:
  max_bytes: 16777216

# Feed used when api.recent_endpoint is not set
recent_posts:
  - slug: your-product-slug
    title: Digital Software Planet Blog
    description: Explore the latest insights from the Digital Software Planet blog.
    content: "..."
    age_days: 0
  - slug: getting-started
    title: Getting Started with Digital Software Planet
    description: Learn how to begin your journey with Digital Software Planet.
    content: "..."
    age_days: 1
  - slug: best-practices
    title: Best Practices for Software Development
    description: Discover the top recommended practices for modern software development.
    content: "..."
    age_days: 2
"#;

/// Write a default `_config.yml` into `target_dir`
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::info!("Created: {:?}", config_path);

    Ok(())
}
