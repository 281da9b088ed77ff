//! Crawler - frontier expansion and index building
//!
//! The crawler owns the frontier, the visited set, the inverted index and
//! the link graph for a single run. Each call to `step` fully processes at
//! most one page:
//! - Pops the most recently discovered URL
//! - Fetches its content from the content provider
//! - Indexes every token and records the raw outlinks
//! - Pushes newly discovered outlinks onto the frontier
//!
//! All derived data for a page is computed before any structure is touched,
//! so a crawl abandoned between steps is partial but never torn.

use crate::config::CrawlerConfig;
use crate::crawler::extractor::extract_links;
use crate::crawler::frontier::Frontier;
use crate::crawler::provider::ContentProvider;
use crate::index::{InvertedIndex, LinkGraph};
use std::collections::HashSet;
use std::fmt;

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// Every discovered URL was visited
    FrontierExhausted,

    /// More pages than the budget were visited while URLs were still pending
    BudgetReached,

    /// The crawl was finished early by its caller
    Interrupted,
}

impl StopReason {
    /// Returns true if pages reachable from the seed may be missing
    pub fn is_truncated(&self) -> bool {
        !matches!(self, Self::FrontierExhausted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FrontierExhausted => "frontier_exhausted",
            Self::BudgetReached => "budget_reached",
            Self::Interrupted => "interrupted",
        }
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of a single crawl step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlStep {
    /// A page was fetched, indexed and added to the link graph
    Visited {
        url: String,
        /// Number of raw outlinks found on the page
        outlinks: usize,
        /// Number of outlinks newly pushed onto the frontier
        discovered: usize,
    },

    /// A popped URL had already been visited and was discarded
    AlreadyVisited(String),

    /// The crawl is over; further steps return the same reason
    Finished(StopReason),
}

/// Everything a finished crawl produced
#[derive(Debug, Clone)]
pub struct CrawlOutput {
    /// Token -> URLs in visitation order
    pub index: InvertedIndex,

    /// Visited page -> raw outlinks
    pub graph: LinkGraph,

    /// Visited URLs in visitation order
    pub visited: Vec<String>,

    /// URLs still pending when the crawl stopped (bottom to top of the stack)
    pub frontier_remaining: Vec<String>,

    pub stop_reason: StopReason,
}

/// Single-run crawler over a content provider
pub struct Crawler<P> {
    provider: P,
    max_pages: usize,
    frontier: Frontier,
    visited: HashSet<String>,
    visit_order: Vec<String>,
    index: InvertedIndex,
    graph: LinkGraph,
    stop_reason: Option<StopReason>,
}

impl<P: ContentProvider> Crawler<P> {
    /// Creates a crawler whose frontier holds only the configured seed
    ///
    /// # Arguments
    ///
    /// * `provider` - Source of page content
    /// * `config` - Seed URL and crawl budget
    pub fn new(provider: P, config: &CrawlerConfig) -> Self {
        Self {
            provider,
            max_pages: config.max_pages,
            frontier: Frontier::with_seed(config.seed.as_str()),
            visited: HashSet::new(),
            visit_order: Vec::new(),
            index: InvertedIndex::new(),
            graph: LinkGraph::new(),
            stop_reason: None,
        }
    }

    /// Processes at most one frontier entry
    pub fn step(&mut self) -> CrawlStep {
        if let Some(reason) = self.stop_reason {
            return CrawlStep::Finished(reason);
        }

        if self.frontier.is_empty() {
            return self.stop(StopReason::FrontierExhausted);
        }

        // Checked before popping so pending URLs stay in the frontier
        if self.visit_order.len() > self.max_pages {
            return self.stop(StopReason::BudgetReached);
        }

        let Some(url) = self.frontier.pop() else {
            return self.stop(StopReason::FrontierExhausted);
        };

        if self.visited.contains(&url) {
            tracing::trace!("Skipping already visited URL: {}", url);
            return CrawlStep::AlreadyVisited(url);
        }

        self.visit(url)
    }

    /// Runs the crawl until the frontier empties or the budget is used up
    pub fn run(&mut self) -> StopReason {
        tracing::info!(
            "Starting crawl with budget of {} pages ({} pending)",
            self.max_pages,
            self.frontier.len()
        );

        loop {
            match self.step() {
                CrawlStep::Finished(reason) => {
                    tracing::info!(
                        "Crawl finished ({}): {} pages visited, {} tokens indexed, {} still in frontier",
                        reason,
                        self.visit_order.len(),
                        self.index.len(),
                        self.frontier.len()
                    );
                    return reason;
                }
                CrawlStep::Visited { .. } => {
                    let pages = self.visit_order.len();
                    if pages % 10 == 0 {
                        tracing::info!(
                            "Progress: {} pages crawled, {} in frontier",
                            pages,
                            self.frontier.len()
                        );
                    }
                }
                CrawlStep::AlreadyVisited(_) => {}
            }
        }
    }

    /// Consumes the crawler and returns what it built
    ///
    /// Finishing before the crawl is over yields the pages processed so far
    /// with `StopReason::Interrupted`.
    pub fn finish(self) -> CrawlOutput {
        let stop_reason = self.stop_reason.unwrap_or_else(|| {
            tracing::info!(
                "Crawl interrupted after {} pages",
                self.visit_order.len()
            );
            StopReason::Interrupted
        });

        CrawlOutput {
            index: self.index,
            graph: self.graph,
            visited: self.visit_order,
            frontier_remaining: self.frontier.into_vec(),
            stop_reason,
        }
    }

    /// Visited URLs in visitation order
    pub fn visited(&self) -> &[String] {
        &self.visit_order
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns whether `url` is discovered but not yet visited
    pub fn is_pending(&self, url: &str) -> bool {
        self.frontier.contains(url)
    }

    /// Number of discovered but unvisited URLs
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    /// Returns the stop reason once the crawl is over
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    fn stop(&mut self, reason: StopReason) -> CrawlStep {
        self.stop_reason = Some(reason);
        CrawlStep::Finished(reason)
    }

    /// Fetches, indexes and links a single unvisited page
    fn visit(&mut self, url: String) -> CrawlStep {
        let content = self.provider.fetch(&url);
        let outlinks: Vec<String> = extract_links(&content).map(str::to_string).collect();

        for link in outlinks.iter().filter(|link| link.trim().is_empty()) {
            tracing::debug!("Degenerate link {:?} found on {}", link, url);
        }

        let tokens = self.index.add_page(&url, &content);

        // Marked visited before its outlinks are pushed so a self-link never
        // lands in the frontier
        self.visited.insert(url.clone());
        self.visit_order.push(url.clone());

        let mut discovered = 0;
        for link in &outlinks {
            if !self.visited.contains(link) && self.frontier.push(link.as_str()) {
                tracing::trace!("Discovered {}", link);
                discovered += 1;
            }
        }

        let outlink_count = outlinks.len();
        tracing::debug!(
            "Visited {} ({} tokens, {} outlinks, {} new)",
            url,
            tokens,
            outlink_count,
            discovered
        );
        self.graph.insert(url.clone(), outlinks);

        CrawlStep::Visited {
            url,
            outlinks: outlink_count,
            discovered,
        }
    }
}
