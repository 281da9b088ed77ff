//! Output module for reporting crawl results
//!
//! This module handles:
//! - Collecting and printing crawl statistics
//! - Running keyword queries and printing their results

pub mod stats;

pub use stats::{print_statistics, CrawlStatistics};

use crate::engine::SearchEngine;

/// Results of one keyword query
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    pub keyword: String,

    /// Best ranked URL, if the keyword was found
    pub lucky: Option<String>,

    /// All matching URLs with their ranks, best first
    pub ranked: Vec<(String, f64)>,
}

impl QueryReport {
    /// Runs `keyword` against the engine
    pub fn run(engine: &SearchEngine, keyword: &str) -> Self {
        let lucky = engine.lucky_search(keyword).map(str::to_string);
        let ranked = engine
            .ordered_search(keyword)
            .unwrap_or_default()
            .into_iter()
            .map(|url| (url.to_string(), engine.ranks().get(url).unwrap_or(0.0)))
            .collect();

        Self {
            keyword: keyword.to_string(),
            lucky,
            ranked,
        }
    }

    /// Returns true if the keyword matched at least one page
    pub fn found(&self) -> bool {
        self.lucky.is_some()
    }
}

/// Prints a query report to stdout
pub fn print_query_report(report: &QueryReport) {
    println!("Query: {}", report.keyword);

    match &report.lucky {
        Some(url) => println!("  Lucky: {}", url),
        None => {
            println!("  Not found");
            return;
        }
    }

    println!("  Ranked ({}):", report.ranked.len());
    for (position, (url, rank)) in report.ranked.iter().enumerate() {
        println!("    {}. {} ({:.6})", position + 1, url, rank);
    }
}
