mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::util::ServiceExt;

use common::{closed_endpoint, MockApi};
use planet_blog::config::SiteConfig;
use planet_blog::{server, Blog};

struct TestApp {
    router: Router,
}

impl TestApp {
    fn new(config: SiteConfig) -> Self {
        let blog = Blog::from_config(std::env::temp_dir(), config).expect("blog");
        let router = server::router(&blog).expect("router");
        Self { router }
    }

    async fn get(&self, path: &str) -> (StatusCode, String) {
        let req = Request::get(path).body(Body::empty()).expect("request");
        let resp = self.router.clone().oneshot(req).await.expect("oneshot");
        let status = resp.status();
        let data = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, String::from_utf8(data.to_vec()).expect("utf8 body"))
    }
}

const POST: &str = r#"[{
    "slug": "tables",
    "content": "Intro line\nnext line\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\n<script>alert('x')</script>",
    "title": "Tables",
    "description": "All about tables",
    "timestamp": "2024-02-03T04:05:06Z",
    "url": "https://source.example/tables"
}]"#;

#[tokio::test]
async fn test_index_page() {
    let app = TestApp::new(SiteConfig::default());
    let (status, html) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Digital Software Planet</title>"));
    assert!(html.contains("Featured Content"));
    assert!(html.contains("Recent Articles"));
    assert!(html.contains("Getting Started with Digital Software Planet"));
    assert!(html.contains("1 min read"));
}

#[tokio::test]
async fn test_post_page() {
    let api = MockApi::builder().post("tables", 200, POST).start().await;
    let app = TestApp::new(api.config());
    let (status, html) = app.get("/tables").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Tables | Digital Software Planet</title>"));
    assert!(html.contains(r#"<meta name="description" content="All about tables">"#));
    assert!(html.contains("Feb 3, 2024"));
    assert!(html.contains("By techrealm.pk"));
    assert!(html.contains("Intro line<br>"));
    assert!(html.contains(r#"<table class=""#));
    assert!(html.contains(r#"<td class=""#));
    assert!(!html.contains("alert("));
    assert!(html.contains("View original source"));
}

#[tokio::test]
async fn test_post_page_is_repeatable() {
    let api = MockApi::builder().post("tables", 200, POST).start().await;
    let app = TestApp::new(api.config());

    let (_, first) = app.get("/tables").await;
    let (_, second) = app.get("/tables").await;
    assert_eq!(first, second);

    // Head metadata does not leak into the next page
    let (_, index) = app.get("/").await;
    assert!(index.contains("<title>Digital Software Planet</title>"));
}

#[tokio::test]
async fn test_script_source_link_is_not_rendered() {
    let body = r#"{"slug":"x","content":"hello","url":"javascript:alert(document.cookie)"}"#;
    let api = MockApi::builder().post("x", 200, body).start().await;
    let app = TestApp::new(api.config());
    let (status, html) = app.get("/x").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p>hello</p>"));
    assert!(!html.to_lowercase().contains("javascript:"));
    assert!(!html.contains("View original source"));
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let api = MockApi::builder().start().await;
    let app = TestApp::new(api.config());
    let (status, html) = app.get("/missing-slug").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
    assert!(!html.contains("Error fetching content"));
}

#[tokio::test]
async fn test_unreachable_api_shows_toast() {
    let mut config = SiteConfig::default();
    config.api.content_endpoint = closed_endpoint().await;
    let app = TestApp::new(config);
    let (status, html) = app.get("/anything").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Error fetching content"));
    assert!(html.contains("toast-destructive"));
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new(SiteConfig::default());
    let (status, html) = app.get("/a/b").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Return to Home"));
}

#[tokio::test]
async fn test_remote_feed_failure_on_index() {
    let api = MockApi::builder().recent(500, "").start().await;
    let mut config = api.config();
    config.api.recent_endpoint = Some(api.recent_endpoint());
    let app = TestApp::new(config);
    let (status, html) = app.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Unable to load content"));
    assert!(html.contains("Error fetching content"));
}
