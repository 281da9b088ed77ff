//! Search engine facade
//!
//! Ties a finished crawl to its rank table and answers keyword queries.
//! Keywords match index tokens exactly: case-sensitive, no stemming.
//! A keyword that never appeared in crawled content yields `None`.

use crate::config::{CrawlerConfig, RankConfig};
use crate::crawler::{ContentProvider, CrawlOutput, Crawler, StopReason};
use crate::index::{InvertedIndex, LinkGraph};
use crate::rank::{RankComputer, RankTable};
use std::collections::HashMap;

/// Query surface over a crawled and ranked page set
#[derive(Debug, Clone)]
pub struct SearchEngine {
    crawl: CrawlOutput,
    ranks: RankTable,
}

impl SearchEngine {
    /// Crawls from `seed` with the default budget and ranks the result with
    /// the default parameters
    pub fn new<P: ContentProvider>(seed: impl Into<String>, provider: P) -> Self {
        Self::with_config(provider, &CrawlerConfig::new(seed), &RankConfig::default())
    }

    /// Crawls and ranks with explicit parameters
    pub fn with_config<P: ContentProvider>(
        provider: P,
        crawler_config: &CrawlerConfig,
        rank_config: &RankConfig,
    ) -> Self {
        tracing::info!("Building search engine from seed {}", crawler_config.seed);

        let mut crawler = Crawler::new(provider, crawler_config);
        crawler.run();
        let crawl = crawler.finish();
        let ranks = RankComputer::new(*rank_config).compute(&crawl.graph);

        Self::from_parts(crawl, ranks)
    }

    /// Assembles an engine from an existing crawl and rank table
    pub fn from_parts(crawl: CrawlOutput, ranks: RankTable) -> Self {
        Self { crawl, ranks }
    }

    /// Returns the URLs indexed under `keyword`, in crawl order
    pub fn lookup(&self, keyword: &str) -> Option<&[String]> {
        self.crawl.index.lookup(keyword).filter(|urls| !urls.is_empty())
    }

    /// Returns the best ranked URL for `keyword`
    ///
    /// Ties go to the URL that comes first in the index.
    pub fn lucky_search(&self, keyword: &str) -> Option<&str> {
        let urls = self.lookup(keyword)?;

        let mut best = urls.first()?;
        let mut best_rank = self.rank_of(best);
        for url in &urls[1..] {
            let rank = self.rank_of(url);
            if rank > best_rank {
                best = url;
                best_rank = rank;
            }
        }

        Some(best.as_str())
    }

    /// Returns every URL for `keyword`, best ranked first
    ///
    /// The sort is stable, so equally ranked URLs keep their index order.
    pub fn ordered_search(&self, keyword: &str) -> Option<Vec<&str>> {
        let urls = self.lookup(keyword)?;

        let mut ranked: Vec<(&str, f64)> = urls
            .iter()
            .map(|url| (url.as_str(), self.rank_of(url)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        Some(ranked.into_iter().map(|(url, _)| url).collect())
    }

    /// Token -> URLs mapping built during the crawl
    pub fn get_created_search_index(&self) -> &HashMap<String, Vec<String>> {
        self.crawl.index.as_map()
    }

    /// Same as `get_created_search_index`
    pub fn get_content_index(&self) -> &HashMap<String, Vec<String>> {
        self.get_created_search_index()
    }

    /// URL -> rank mapping for every crawled page
    pub fn get_url_ranks(&self) -> &HashMap<String, f64> {
        self.ranks.as_map()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.crawl.index
    }

    pub fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    pub fn link_graph(&self) -> &LinkGraph {
        &self.crawl.graph
    }

    /// Crawled URLs in visitation order
    pub fn crawled_pages(&self) -> &[String] {
        &self.crawl.visited
    }

    /// URLs that were discovered but never visited
    pub fn unvisited_pages(&self) -> &[String] {
        &self.crawl.frontier_remaining
    }

    pub fn stop_reason(&self) -> StopReason {
        self.crawl.stop_reason
    }

    fn rank_of(&self, url: &str) -> f64 {
        self.ranks.get(url).unwrap_or(0.0)
    }
}
