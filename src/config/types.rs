use serde::Deserialize;

/// Default crawl budget (the crawl stops once more pages than this are visited)
pub const DEFAULT_MAX_PAGES: usize = 100;

/// Default share of rank mass that follows outlinks
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.8;

/// Default number of synchronous rank iterations
pub const DEFAULT_ITERATIONS: u32 = 10;

/// Main configuration structure for Seedrank
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub rank: RankConfig,
    #[serde(default)]
    pub corpus: Option<CorpusConfig>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// URL the crawl starts from
    pub seed: String,

    /// Crawl budget: the crawl is truncated once more pages than this are visited
    #[serde(rename = "max-pages", default = "default_max_pages")]
    pub max_pages: usize,
}

impl CrawlerConfig {
    /// Creates a crawler configuration with the default budget
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Overrides the crawl budget
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Rank computation parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RankConfig {
    /// Probability that the random surfer follows a link instead of
    /// jumping to a uniformly chosen page
    #[serde(rename = "damping-factor", default = "default_damping_factor")]
    pub damping_factor: f64,

    /// Number of synchronous iterations (no convergence check)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Location of the page corpus served by the file-backed content provider
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Path to a TOML corpus file
    pub path: String,
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_damping_factor() -> f64 {
    DEFAULT_DAMPING_FACTOR
}

fn default_iterations() -> u32 {
    DEFAULT_ITERATIONS
}
