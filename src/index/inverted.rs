//! Inverted index over crawled page content.
//!
//! Tokens are whitespace-delimited substrings used verbatim: no case folding,
//! no punctuation stripping. Posting lists keep crawl order and keep
//! duplicates, so a token appearing three times on a page lists that page
//! three times.

use std::collections::HashMap;

/// Splits page content into index tokens.
pub fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content.split_whitespace()
}

/// Mapping from token to the ordered URLs it was seen on
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<String>>,
}

impl InvertedIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` to the posting list of `token`
    pub fn add_token(&mut self, token: &str, url: &str) {
        match self.postings.get_mut(token) {
            Some(urls) => urls.push(url.to_string()),
            None => {
                self.postings
                    .insert(token.to_string(), vec![url.to_string()]);
            }
        }
    }

    /// Indexes every token of a page's content under its URL
    ///
    /// Returns the number of tokens indexed.
    pub fn add_page(&mut self, url: &str, content: &str) -> usize {
        let mut count = 0;
        for token in tokenize(content) {
            self.add_token(token, url);
            count += 1;
        }
        count
    }

    /// Returns the URLs indexed under `token`, or `None` if it was never seen
    pub fn lookup(&self, token: &str) -> Option<&[String]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Total number of (token, url) entries, duplicates included
    pub fn total_postings(&self) -> usize {
        self.postings.values().map(Vec::len).sum()
    }

    /// Iterates over (token, urls) pairs in arbitrary token order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.postings
            .iter()
            .map(|(token, urls)| (token.as_str(), urls.as_slice()))
    }

    /// Borrows the underlying token -> URLs mapping
    pub fn as_map(&self) -> &HashMap<String, Vec<String>> {
        &self.postings
    }
}
