//! HTTP server rendering blog pages

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::Uri,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::pages::{Pages, RenderedPage};
use crate::Blog;

impl IntoResponse for RenderedPage {
    fn into_response(self) -> Response {
        (self.status, Html(self.html)).into_response()
    }
}

/// Build the application router
pub fn router(blog: &Blog) -> crate::Result<Router> {
    let pages = Arc::new(Pages::new(blog)?);

    let mut app = Router::new()
        .route("/", get(index_handler))
        .route("/:slug", get(post_handler))
        .fallback(fallback_handler)
        .with_state(pages);

    if let Some(dir) = blog.static_dir() {
        tracing::debug!("Serving static files from {:?}", dir);
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}

/// Start the server
pub async fn start(blog: &Blog, ip: &str, port: u16, open: bool) -> Result<()> {
    let app = router(blog)?;

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    println!("Content API: {}", blog.config.api.content_endpoint);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index_handler(State(pages): State<Arc<Pages>>) -> crate::Result<RenderedPage> {
    pages.index().await
}

async fn post_handler(
    State(pages): State<Arc<Pages>>,
    Path(slug): Path<String>,
) -> crate::Result<RenderedPage> {
    pages.post(&slug).await
}

async fn fallback_handler(State(pages): State<Arc<Pages>>, uri: Uri) -> crate::Result<RenderedPage> {
    pages.not_found(uri.path())
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
