//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::FeedEntry;
pub use site::ImageConfig;
pub use site::MarkdownConfig;
pub use site::SiteConfig;
