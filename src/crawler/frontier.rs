//! Crawl frontier
//!
//! The frontier holds URLs that were discovered but not yet visited. It is a
//! LIFO stack: the most recently pushed URL is popped first, which gives a
//! depth-first visitation order. Visitation order decides the order of URLs
//! inside each posting list, so the frontier must not be swapped for a queue.

use std::collections::HashSet;

/// LIFO frontier with constant-time membership checks
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    /// Pending URLs, top of the stack last
    stack: Vec<String>,

    /// Mirror of `stack` for membership checks
    members: HashSet<String>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier containing only `seed`
    pub fn with_seed(seed: impl Into<String>) -> Self {
        let mut frontier = Self::new();
        frontier.push(seed);
        frontier
    }

    /// Pushes a URL on top of the stack
    ///
    /// Returns `false` without changing the frontier if the URL is already
    /// pending.
    pub fn push(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        if self.members.contains(&url) {
            return false;
        }
        self.members.insert(url.clone());
        self.stack.push(url);
        true
    }

    /// Removes and returns the most recently pushed URL
    pub fn pop(&mut self) -> Option<String> {
        let url = self.stack.pop()?;
        self.members.remove(&url);
        Some(url)
    }

    /// Returns whether `url` is pending
    pub fn contains(&self, url: &str) -> bool {
        self.members.contains(url)
    }

    /// Number of pending URLs
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Pending URLs from bottom to top of the stack
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stack.iter().map(String::as_str)
    }

    /// Consumes the frontier, returning pending URLs bottom to top
    pub fn into_vec(self) -> Vec<String> {
        self.stack
    }
}
