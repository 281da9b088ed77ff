//! Content providers
//!
//! The crawler never talks to the network itself. It asks a
//! `ContentProvider` for the text behind a URL, and a provider that does not
//! know a URL answers with empty content instead of failing.

use crate::SearchError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Source of page content for the crawler
pub trait ContentProvider {
    /// Returns the content of `url`, or an empty string if it is unknown
    fn fetch(&self, url: &str) -> String;
}

impl<P: ContentProvider + ?Sized> ContentProvider for &P {
    fn fetch(&self, url: &str) -> String {
        (**self).fetch(url)
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for Box<P> {
    fn fetch(&self, url: &str) -> String {
        (**self).fetch(url)
    }
}

/// In-memory provider backed by a URL -> content map
#[derive(Debug, Clone, Default)]
pub struct PageCache {
    pages: HashMap<String, String>,
}

/// On-disk corpus layout:
///
/// ```toml
/// [pages]
/// "http://example.com/" = "<a href=\"http://example.com/about\">About</a>"
/// ```
#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    pages: HashMap<String, String>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the content of a page
    pub fn insert(&mut self, url: impl Into<String>, content: impl Into<String>) {
        self.pages.insert(url.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Loads a TOML corpus file
    ///
    /// # Returns
    ///
    /// * `Ok(PageCache)` - Cache holding every page of the corpus
    /// * `Err(SearchError)` - The file could not be read or parsed
    pub fn load(path: &Path) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses a corpus from TOML text
    pub fn from_toml(content: &str) -> Result<Self, SearchError> {
        let corpus: CorpusFile = toml::from_str(content)?;
        tracing::debug!("Loaded corpus with {} pages", corpus.pages.len());
        Ok(Self {
            pages: corpus.pages,
        })
    }
}

impl ContentProvider for PageCache {
    fn fetch(&self, url: &str) -> String {
        self.pages.get(url).cloned().unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for PageCache
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pages: iter
                .into_iter()
                .map(|(url, content)| (url.into(), content.into()))
                .collect(),
        }
    }
}
