//! Fetch and show a single post

use anyhow::Result;

use crate::content::ContentView;
use crate::helpers::format_date;
use crate::{Blog, Error};

/// Fetch `slug` and print it as JSON, or as rendered HTML with `html`
pub async fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    let post = match blog.fetcher.try_fetch_post(slug).await {
        Ok(post) => post,
        Err(Error::NotFound) => anyhow::bail!("No post found for slug: {:?}", slug),
        Err(e) => return Err(e.into()),
    };

    if html {
        let mut view = ContentView::new();
        view.update(&blog.renderer, &post.content);
        println!("{}", view.markup());
    } else {
        tracing::info!(
            "{} ({}, {})",
            post.title,
            format_date(&post.timestamp),
            post.reading_time
        );
        println!("{}", serde_json::to_string_pretty(&post)?);
    }

    Ok(())
}
