//! Configuration module for Seedrank
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use seedrank::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("seedrank.toml")).unwrap();
//! println!("Crawl budget: {} pages", config.crawler.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CorpusConfig, CrawlerConfig, RankConfig, DEFAULT_DAMPING_FACTOR, DEFAULT_ITERATIONS,
    DEFAULT_MAX_PAGES,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
