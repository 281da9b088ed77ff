//! Statistics for a built search engine
//!
//! This module provides functionality for summarizing a crawl and its rank
//! table and printing the summary.

use crate::crawler::StopReason;
use crate::engine::SearchEngine;

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlStatistics {
    /// Number of pages visited
    pub pages_visited: usize,

    /// Number of discovered pages left unvisited
    pub frontier_remaining: usize,

    /// Why the crawl stopped
    pub stop_reason: StopReason,

    /// Number of distinct index tokens
    pub distinct_tokens: usize,

    /// Number of (token, url) postings, duplicates included
    pub total_postings: usize,

    /// Number of raw outlinks across all visited pages
    pub total_links: usize,

    /// Visited pages without outlinks
    pub sink_pages: Vec<String>,

    /// Sum of all page ranks
    pub rank_total: f64,

    /// Highest ranked pages, best first
    pub top_pages: Vec<(String, f64)>,
}

/// Number of pages listed in `top_pages`
const TOP_PAGES: usize = 10;

impl CrawlStatistics {
    /// Collects statistics from a search engine
    pub fn from_engine(engine: &SearchEngine) -> Self {
        let graph = engine.link_graph();
        let index = engine.index();
        let ranks = engine.ranks();

        // Visit order first so equal ranks list in crawl order
        let mut top_pages: Vec<(String, f64)> = engine
            .crawled_pages()
            .iter()
            .map(|url| (url.clone(), ranks.get(url).unwrap_or(0.0)))
            .collect();
        top_pages.sort_by(|a, b| b.1.total_cmp(&a.1));
        top_pages.truncate(TOP_PAGES);

        Self {
            pages_visited: engine.crawled_pages().len(),
            frontier_remaining: engine.unvisited_pages().len(),
            stop_reason: engine.stop_reason(),
            distinct_tokens: index.len(),
            total_postings: index.total_postings(),
            total_links: graph.total_links(),
            sink_pages: graph.sinks().map(str::to_string).collect(),
            rank_total: ranks.total(),
            top_pages,
        }
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Overview:");
    println!("  Pages visited: {}", stats.pages_visited);
    println!("  Left in frontier: {}", stats.frontier_remaining);
    println!("  Stop reason: {}", stats.stop_reason);
    if stats.stop_reason.is_truncated() {
        println!("  (crawl was truncated; index and graph cover visited pages only)");
    }
    println!();

    println!("Index:");
    println!("  Distinct tokens: {}", stats.distinct_tokens);
    println!("  Total postings: {}", stats.total_postings);
    println!();

    println!("Link Graph:");
    println!("  Total outlinks: {}", stats.total_links);
    if !stats.sink_pages.is_empty() {
        println!("  Sink pages ({}):", stats.sink_pages.len());
        for url in &stats.sink_pages {
            println!("    - {}", url);
        }
    }
    println!();

    println!("Ranks (total mass {:.6}):", stats.rank_total);
    for (url, rank) in &stats.top_pages {
        println!("  {:.6}  {}", rank, url);
    }
}
