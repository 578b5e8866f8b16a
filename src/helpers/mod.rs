//! Helper functions for pages and templates

mod date;
mod head;
mod html;

pub use date::*;
pub use head::{DocumentHead, HeadData, PageMeta};
pub use html::*;
