//! Page controllers - fetch, render and lay out each page

use axum::http::StatusCode;
use std::sync::Arc;

use crate::content::{ContentFetcher, ContentView, MarkdownRenderer, Toasts};
use crate::error::Result;
use crate::helpers::DocumentHead;
use crate::templates::{base_context, PostPageData, SiteData, TemplateRenderer};
use crate::Blog;

/// A fully rendered HTML page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub html: String,
}

impl RenderedPage {
    fn ok(html: String) -> Self {
        Self {
            status: StatusCode::OK,
            html,
        }
    }
}

/// Builds the index, post and not-found pages
pub struct Pages {
    fetcher: ContentFetcher,
    renderer: MarkdownRenderer,
    templates: TemplateRenderer,
    site: SiteData,
    head: DocumentHead,
}

impl Pages {
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            fetcher: blog.fetcher.clone(),
            renderer: blog.renderer.clone(),
            templates: TemplateRenderer::new()?,
            site: SiteData::new(&blog.config),
            head: DocumentHead::new(&blog.config),
        })
    }

    /// Hero, featured post (newest) and the remaining recent posts
    pub async fn index(&self) -> Result<RenderedPage> {
        let toasts = Arc::new(Toasts::new());
        let fetcher = self.fetcher.clone().with_notifier(toasts.clone());

        let mut posts = fetcher.fetch_recent_posts().await;
        let feed_failed = posts.is_empty() && !toasts.is_empty();
        let featured = if posts.is_empty() {
            None
        } else {
            Some(posts.remove(0))
        };

        let mut context = base_context(&self.site, self.head.data(), &toasts.drain());
        context.insert("featured", &featured);
        context.insert("recent", &posts);
        context.insert("feed_failed", &feed_failed);

        Ok(RenderedPage::ok(self.templates.render("index.html", &context)?))
    }

    /// A single post, or the not-found page when it is absent
    pub async fn post(&self, slug: &str) -> Result<RenderedPage> {
        let toasts = Arc::new(Toasts::new());
        let fetcher = self.fetcher.clone().with_notifier(toasts.clone());

        let Some(post) = fetcher.fetch_post(slug).await else {
            return self.render_not_found(&toasts);
        };

        let mut view = ContentView::new();
        view.update(&self.renderer, &post.content);

        let mut head = self.head.clone();
        let meta = head.scoped(&post);
        let mut context = base_context(&self.site, meta.data(), &toasts.drain());
        context.insert(
            "post",
            &PostPageData {
                post: &post,
                html: view.markup(),
            },
        );

        Ok(RenderedPage::ok(self.templates.render("post.html", &context)?))
    }

    /// 404 page for routes that match nothing
    pub fn not_found(&self, path: &str) -> Result<RenderedPage> {
        tracing::error!(
            "404 Error: User attempted to access non-existent route: {}",
            path
        );
        self.render_not_found(&Toasts::new())
    }

    fn render_not_found(&self, toasts: &Toasts) -> Result<RenderedPage> {
        let context = base_context(&self.site, self.head.data(), &toasts.drain());
        Ok(RenderedPage {
            status: StatusCode::NOT_FOUND,
            html: self.templates.render("not_found.html", &context)?,
        })
    }
}
