//! Error types shared across the crate

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing identifier, or the upstream returned no candidates
    #[error("post not found")]
    NotFound,

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short label used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound => "not_found",
            Error::Transport(_) => "transport",
            Error::Status(_) => "status",
            Error::Decode(_) => "decode",
            Error::Render(_) => "render",
            Error::Template(_) => "template",
            Error::Config(_) => "config",
            Error::Io(_) => "io",
        }
    }

    /// Whether the failure should be surfaced to the reader as a notification
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Error::Transport(_) | Error::Status(_) | Error::Decode(_)
        )
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Error::Transport(_) | Error::Status(_) | Error::Decode(_) => {
                (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
            }
            e => {
                tracing::error!(error = %e, kind = e.kind(), "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_classification() {
        assert!(!Error::NotFound.is_fetch_failure());
        assert!(Error::Status(reqwest::StatusCode::BAD_GATEWAY).is_fetch_failure());
        assert!(!Error::Render("boom".to_string()).is_fetch_failure());
    }

    #[test]
    fn test_not_found_response() {
        let resp = Error::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
