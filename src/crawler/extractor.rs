//! Anchor target extraction
//!
//! This is a textual pattern match, not an HTML parse. For each occurrence of
//! the literal marker `<a href=` the first `"` after it opens the target and
//! the next `"` closes it. Scanning resumes right after the closing quote.
//!
//! Targets are not validated: empty or otherwise degenerate substrings are
//! returned as they are.

/// Literal marker that starts an anchor target (case-sensitive)
pub const ANCHOR_MARKER: &str = "<a href=";

/// Returns the anchor targets of `content` in document order
///
/// The iterator is lazy and borrows from `content`. Calling this again
/// restarts the scan from the beginning.
///
/// # Example
///
/// ```
/// use seedrank::crawler::extract_links;
///
/// let page = r#"<a href="B">b</a> and <a href="C">c</a>"#;
/// let links: Vec<&str> = extract_links(page).collect();
/// assert_eq!(links, vec!["B", "C"]);
/// ```
pub fn extract_links(content: &str) -> Links<'_> {
    Links {
        content,
        position: 0,
    }
}

/// Lazy iterator over the anchor targets of a page
#[derive(Debug, Clone)]
pub struct Links<'a> {
    content: &'a str,
    /// Byte offset where the next marker search starts
    position: usize,
}

impl<'a> Iterator for Links<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.content.get(self.position..)?;

        let marker = rest.find(ANCHOR_MARKER)?;
        let after_marker = marker + ANCHOR_MARKER.len();

        // A marker without an opening or closing quote ends the sequence
        let open = after_marker + rest[after_marker..].find('"')?;
        let close = open + 1 + rest[open + 1..].find('"')?;

        self.position += close + 1;
        Some(&rest[open + 1..close])
    }
}
