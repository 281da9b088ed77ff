//! Integration tests for crawling, ranking and searching
//!
//! These tests drive the public API end to end over in-memory and on-disk
//! page corpora.

mod crawl_tests;
mod search_tests;
