//! Document head (title and meta description) for the displayed page

use serde::Serialize;
use std::ops::Deref;

use crate::config::SiteConfig;
use crate::content::Post;

/// Title and description rendered into `<head>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadData {
    pub title: String,
    pub description: String,
}

/// Page metadata with site-wide defaults
#[derive(Debug, Clone)]
pub struct DocumentHead {
    current: HeadData,
    defaults: HeadData,
}

impl DocumentHead {
    pub fn new(config: &SiteConfig) -> Self {
        let defaults = HeadData {
            title: config.title.clone(),
            description: config.description.clone(),
        };
        Self {
            current: defaults.clone(),
            defaults,
        }
    }

    pub fn title(&self) -> &str {
        &self.current.title
    }

    pub fn description(&self) -> &str {
        &self.current.description
    }

    pub fn data(&self) -> &HeadData {
        &self.current
    }

    /// Show `post` metadata until the returned guard is dropped
    pub fn scoped(&mut self, post: &Post) -> PageMeta<'_> {
        self.current = HeadData {
            title: format!("{} | {}", post.title, self.defaults.title),
            description: post.description.clone(),
        };
        PageMeta { head: self }
    }

    fn reset(&mut self) {
        self.current = self.defaults.clone();
    }
}

/// Post metadata held on a [`DocumentHead`]; defaults return on drop
#[derive(Debug)]
pub struct PageMeta<'a> {
    head: &'a mut DocumentHead,
}

impl Deref for PageMeta<'_> {
    type Target = DocumentHead;

    fn deref(&self) -> &DocumentHead {
        &*self.head
    }
}

impl Drop for PageMeta<'_> {
    fn drop(&mut self) {
        self.head.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post {
            id: "hello".to_string(),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            description: "A greeting".to_string(),
            content: String::new(),
            timestamp: String::new(),
            author: String::new(),
            reading_time: String::new(),
            image_url: String::new(),
            source_url: None,
        }
    }

    #[test]
    fn test_scoped_metadata_is_restored() {
        let config = SiteConfig::default();
        let mut head = DocumentHead::new(&config);
        assert_eq!(head.title(), "Digital Software Planet");

        {
            let meta = head.scoped(&post());
            assert_eq!(meta.title(), "Hello | Digital Software Planet");
            assert_eq!(meta.description(), "A greeting");
        }

        assert_eq!(head.title(), "Digital Software Planet");
        assert_eq!(head.description(), "Digital Software Planet Blog");
    }

    #[test]
    fn test_restored_on_early_return() {
        fn failing(head: &mut DocumentHead) -> Result<(), &'static str> {
            let _meta = head.scoped(&post());
            Err("render failed")
        }

        let config = SiteConfig::default();
        let mut head = DocumentHead::new(&config);
        assert!(failing(&mut head).is_err());
        assert_eq!(head.title(), "Digital Software Planet");
    }
}
