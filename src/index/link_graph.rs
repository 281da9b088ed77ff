//! Outlink graph of visited pages.
//!
//! Entries are kept in visit order. Rank computation walks pages in this
//! order, which is what makes its floating point sums reproducible.

use std::collections::HashMap;

/// Mapping from each visited page to its raw outlinks
///
/// Outlinks are stored exactly as extracted: duplicates, self-links and
/// links to pages that were never visited are all kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkGraph {
    /// (page, outlinks) in visit order
    entries: Vec<(String, Vec<String>)>,

    /// page -> position in `entries`
    positions: HashMap<String, usize>,
}

impl LinkGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outlinks of a visited page
    ///
    /// Entries are write-once: returns `false` and leaves the graph untouched
    /// if the page already has an entry.
    pub fn insert(&mut self, url: impl Into<String>, outlinks: Vec<String>) -> bool {
        let url = url.into();
        if self.positions.contains_key(&url) {
            return false;
        }
        self.positions.insert(url.clone(), self.entries.len());
        self.entries.push((url, outlinks));
        true
    }

    /// Returns the outlinks of a page, or `None` if it was not visited
    pub fn outlinks(&self, url: &str) -> Option<&[String]> {
        self.positions
            .get(url)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    /// Returns the visit-order position of a page
    pub fn position(&self, url: &str) -> Option<usize> {
        self.positions.get(url).copied()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.positions.contains_key(url)
    }

    /// Number of pages in the graph
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pages in visit order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(url, _)| url.as_str())
    }

    /// (page, outlinks) pairs in visit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(url, links)| (url.as_str(), links.as_slice()))
    }

    /// Total number of outlinks, duplicates included
    pub fn total_links(&self) -> usize {
        self.entries.iter().map(|(_, links)| links.len()).sum()
    }

    /// Pages without any outlinks (rank sinks)
    pub fn sinks(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(url, _)| url.as_str())
    }

    /// Copies the graph into a plain map
    pub fn to_map(&self) -> HashMap<String, Vec<String>> {
        self.entries.iter().cloned().collect()
    }
}
