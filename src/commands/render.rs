//! Render a local markdown file

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::Blog;

/// Render `path` through the sanitizing pipeline and return the HTML
pub fn render_file(blog: &Blog, path: &Path) -> Result<String> {
    let markdown =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    Ok(blog.renderer.render(&markdown))
}

/// Print the rendered HTML for `path`
pub fn run(blog: &Blog, path: &Path) -> Result<()> {
    println!("{}", render_file(blog, path)?);
    Ok(())
}
