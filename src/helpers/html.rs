//! Text helper functions

/// Truncate text to `length` characters, appending "..." when cut
///
/// # Examples
/// ```ignore
/// truncate_text("Hello World", 5) // -> "Hello..."
/// ```
pub fn truncate_text(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(length).collect();
        format!("{}...", truncated)
    }
}
