//! Mock content API for integration tests

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use planet_blog::config::SiteConfig;

#[derive(Default)]
struct MockState {
    /// slug -> (status, body)
    posts: HashMap<String, (StatusCode, String)>,
    recent: Option<(StatusCode, String)>,
    hits: AtomicUsize,
}

pub struct MockApi {
    addr: SocketAddr,
    state: Arc<MockState>,
}

pub struct MockApiBuilder {
    state: MockState,
}

impl MockApiBuilder {
    pub fn post(mut self, slug: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.state
            .posts
            .insert(slug.to_string(), (status, body.to_string()));
        self
    }

    pub fn recent(mut self, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status");
        self.state.recent = Some((status, body.to_string()));
        self
    }

    pub async fn start(self) -> MockApi {
        let state = Arc::new(self.state);
        let router = Router::new()
            .route("/content", get(content))
            .route("/recent", get(recent))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock api serve");
        });

        MockApi { addr, state }
    }
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder {
            state: MockState::default(),
        }
    }

    pub fn content_endpoint(&self) -> String {
        format!("http://{}/content", self.addr)
    }

    pub fn recent_endpoint(&self) -> String {
        format!("http://{}/recent", self.addr)
    }

    /// Requests received so far
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    /// Config pointing at this mock
    pub fn config(&self) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.api.content_endpoint = self.content_endpoint();
        config
    }
}

fn json(status: StatusCode, body: String) -> impl IntoResponse {
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn content(
    State(state): State<Arc<MockState>>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let slug = query.get("slug").cloned().unwrap_or_default();
    let (status, body) = state
        .posts
        .get(&slug)
        .cloned()
        .unwrap_or((StatusCode::OK, "[]".to_string()));
    json(status, body)
}

async fn recent(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = state
        .recent
        .clone()
        .unwrap_or((StatusCode::OK, "[]".to_string()));
    json(status, body)
}

/// An endpoint nothing listens on
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{}/content", addr)
}
