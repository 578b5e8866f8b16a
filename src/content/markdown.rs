//! Markdown rendering with mandatory sanitization

use lazy_static::lazy_static;
use pulldown_cmark::{html, Event, Options, Parser};
use regex::{Captures, Regex};
use std::panic::{self, AssertUnwindSafe};

use crate::config::MarkdownConfig;
use crate::error::{Error, Result};

/// Markup shown in place of content that failed to render
pub const FALLBACK_HTML: &str = "<p>Error rendering content</p>";

const TABLE_CLASS: &str = "w-full border-collapse border border-border my-6";
const TH_CLASS: &str = "border border-border px-4 py-2 text-left font-semibold bg-muted";
const TD_CLASS: &str = "border border-border px-4 py-2";

lazy_static! {
    static ref TABLE_TAG: Regex = Regex::new(r"<(table|th|td)(\s[^>]*)?>").unwrap();
}

/// Renders untrusted markdown to display-safe HTML
///
/// The pipeline is fixed: parse, sanitize, then decorate tables. There is no
/// way to obtain unsanitized parser output from this type.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    max_bytes: usize,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self::with_options(&MarkdownConfig::default())
    }

    /// Create with custom settings
    pub fn with_options(config: &MarkdownConfig) -> Self {
        Self {
            max_bytes: config.max_bytes,
        }
    }

    /// Render markdown to sanitized HTML, substituting [`FALLBACK_HTML`] on failure
    pub fn render(&self, markdown: &str) -> String {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.try_render(markdown)));
        match outcome {
            Ok(Ok(html)) => html,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Error rendering markdown");
                FALLBACK_HTML.to_string()
            }
            Err(_) => {
                tracing::error!("Markdown renderer panicked");
                FALLBACK_HTML.to_string()
            }
        }
    }

    /// Render markdown to sanitized HTML, reporting failures
    pub fn try_render(&self, markdown: &str) -> Result<String> {
        if markdown.len() > self.max_bytes {
            return Err(Error::Render(format!(
                "content is {} bytes, limit is {}",
                markdown.len(),
                self.max_bytes
            )));
        }

        let raw = parse(markdown);
        let clean = sanitize(&raw);
        Ok(decorate_tables(&clean))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// GitHub-flavored markdown where single newlines are line breaks
fn parse(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn sanitize(html: &str) -> String {
    ammonia::Builder::default().clean(html).to_string()
}

/// Attach layout classes to tables and cells
///
/// Runs on sanitized markup, which carries no class attributes of its own.
fn decorate_tables(html: &str) -> String {
    TABLE_TAG
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[1];
            let class = match tag {
                "table" => TABLE_CLASS,
                "th" => TH_CLASS,
                _ => TD_CLASS,
            };
            let rest = caps.get(2).map_or("", |m| m.as_str());
            format!(r#"<{} class="{}"{}>"#, tag, class, rest)
        })
        .into_owned()
}
