//! Display surface for rendered post content

use super::markdown::MarkdownRenderer;

/// Holds the markup currently mounted for a post body
///
/// Every update replaces the markup wholesale; nothing accumulates across
/// renders.
#[derive(Debug, Default, Clone)]
pub struct ContentView {
    source: Option<String>,
    markup: String,
}

impl ContentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-render when `markdown` differs from what is mounted
    ///
    /// Returns whether the markup was replaced.
    pub fn update(&mut self, renderer: &MarkdownRenderer, markdown: &str) -> bool {
        if self.source.as_deref() == Some(markdown) {
            return false;
        }
        self.mount(renderer.render(markdown));
        self.source = Some(markdown.to_string());
        true
    }

    /// Replace the mounted markup
    pub fn mount(&mut self, markup: String) {
        self.markup = markup;
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }
}
