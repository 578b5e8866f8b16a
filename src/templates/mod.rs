//! Built-in page templates using the Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping stays on for every
//! `.html` template: post fields come from an untrusted API, and the only
//! markup inserted verbatim is the sanitized post body.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::SiteConfig;
use crate::content::{Notification, Post};
use crate::error::Result;
use crate::helpers::{self, HeadData};

/// Template renderer with the embedded blog theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("blog/layout.html")),
            ("index.html", include_str!("blog/index.html")),
            ("post.html", include_str!("blog/post.html")),
            ("not_found.html", include_str!("blog/not_found.html")),
            (
                "partials/card.html",
                include_str!("blog/partials/card.html"),
            ),
            (
                "partials/toasts.html",
                include_str!("blog/partials/toasts.html"),
            ),
        ])?;

        tera.register_filter("format_date", format_date_filter);
        tera.register_filter("truncate_text", truncate_text_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: ISO-8601 timestamp to "Jan 1, 2023"
fn format_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("format_date", "value", String, value);
    Ok(tera::Value::String(helpers::format_date(&s)))
}

/// Tera filter: truncate by character count
fn truncate_text_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_text", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_text", "length", usize, val),
        None => 160,
    };
    Ok(tera::Value::String(helpers::truncate_text(&s, length)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub subtitle: String,
    pub about_url: String,
    pub has_static: bool,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            about_url: config.about_url.clone(),
            has_static: config.static_dir.is_some(),
        }
    }
}

/// Common context shared by every page
pub fn base_context(site: &SiteData, head: &HeadData, toasts: &[Notification]) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("head", head);
    context.insert("toasts", toasts);
    context
}

/// Post fields plus its rendered body
#[derive(Debug, Clone, Serialize)]
pub struct PostPageData<'a> {
    #[serde(flatten)]
    pub post: &'a Post,
    pub html: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Notification;

    fn render_with(template: &str, extra: impl FnOnce(&mut Context)) -> String {
        let config = SiteConfig::default();
        let head = HeadData {
            title: "T".to_string(),
            description: "D".to_string(),
        };
        let mut context = base_context(&SiteData::new(&config), &head, &[]);
        extra(&mut context);
        TemplateRenderer::new()
            .unwrap()
            .render(template, &context)
            .unwrap()
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_not_found_page() {
        let html = render_with("not_found.html", |_| {});
        assert!(html.contains("Page not found"));
        assert!(html.contains("<title>T</title>"));
    }

    #[test]
    fn test_toasts_are_escaped() {
        let config = SiteConfig::default();
        let head = HeadData {
            title: "T".to_string(),
            description: "D".to_string(),
        };
        let toast = Notification {
            title: "<b>bold</b>".to_string(),
            ..Notification::fetch_failed()
        };
        let context = base_context(&SiteData::new(&config), &head, &[toast]);
        let html = TemplateRenderer::new()
            .unwrap()
            .render("not_found.html", &context)
            .unwrap();
        assert!(html.contains("&lt;b&gt;bold&lt;&#x2F;b&gt;"));
        assert!(html.contains("toast-destructive"));
    }

    #[test]
    fn test_empty_index() {
        let html = render_with("index.html", |ctx| {
            ctx.insert("featured", &Option::<Post>::None);
            ctx.insert("recent", &Vec::<Post>::new());
            ctx.insert("feed_failed", &false);
        });
        assert!(html.contains("No articles found"));
    }
}
