//! Seedrank: a small search engine kernel
//!
//! This crate crawls every page reachable from a seed URL through an abstract
//! content provider, builds an inverted index and a link graph while doing so,
//! ranks the crawled pages with a damped random-surfer model and answers
//! keyword queries against the result.

pub mod config;
pub mod crawler;
pub mod engine;
pub mod index;
pub mod output;
pub mod rank;

use thiserror::Error;

/// Main error type for Seedrank operations
///
/// Only the ambient layers (configuration and corpus loading) can fail.
/// Crawling, ranking and querying never return errors.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse corpus TOML: {0}")]
    CorpusParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Seedrank operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlerConfig, RankConfig};
pub use crawler::{ContentProvider, CrawlOutput, Crawler, PageCache, StopReason};
pub use engine::SearchEngine;
pub use index::{InvertedIndex, LinkGraph};
pub use rank::{compute_ranks, RankComputer, RankTable};
