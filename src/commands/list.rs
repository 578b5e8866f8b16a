//! List recent posts

use anyhow::Result;

use crate::helpers::format_date;
use crate::Blog;

/// Print the recent posts feed, newest first
pub async fn run(blog: &Blog) -> Result<()> {
    let posts = blog.fetcher.try_fetch_recent_posts().await?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}] ({})",
            format_date(&post.timestamp),
            post.title,
            post.slug,
            post.reading_time
        );
    }

    Ok(())
}
