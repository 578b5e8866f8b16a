//! Content module - fetching, normalizing and rendering posts

mod fetcher;
mod markdown;
pub mod notify;
mod post;
pub mod upstream;
mod view;

pub use fetcher::ContentFetcher;
pub use markdown::{MarkdownRenderer, FALLBACK_HTML};
pub use notify::{LogNotifier, Notification, Notifier, Toasts};
pub use post::{image_url, reading_minutes, reading_time, sort_newest_first, Post, WORDS_PER_MINUTE};
pub use view::ContentView;
