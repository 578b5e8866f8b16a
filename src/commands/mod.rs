//! CLI command implementations

pub mod init;
pub mod list;
pub mod post;
pub mod render;
