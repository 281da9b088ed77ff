//! Seedrank main entry point
//!
//! This is the command-line interface for the Seedrank search engine kernel.

use anyhow::{bail, Context};
use clap::Parser;
use seedrank::config::{load_config_with_hash, validate, Config};
use seedrank::crawler::PageCache;
use seedrank::output::{print_query_report, print_statistics, CrawlStatistics, QueryReport};
use seedrank::SearchEngine;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Seedrank: crawl, index and rank a page corpus
///
/// Seedrank crawls every page reachable from a seed URL in a page corpus,
/// builds an inverted index and link graph, ranks the pages and answers
/// keyword queries.
#[derive(Parser, Debug)]
#[command(name = "seedrank")]
#[command(version = "1.0.0")]
#[command(about = "A small crawl, index and rank search engine", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Keywords to look up after the crawl
    #[arg(value_name = "QUERY")]
    queries: Vec<String>,

    /// Corpus file to crawl (overrides [corpus] in the config)
    #[arg(long, value_name = "PATH")]
    corpus: Option<PathBuf>,

    /// Seed URL (overrides [crawler] seed in the config)
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print crawl statistics after the crawl
    #[arg(long)]
    stats: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    apply_overrides(&cli, &mut config)?;

    let corpus_path = resolve_corpus_path(&cli, &config)?;

    if cli.dry_run {
        handle_dry_run(&config, &corpus_path);
        return Ok(());
    }

    let pages = PageCache::load(&corpus_path)
        .with_context(|| format!("failed to load corpus {}", corpus_path.display()))?;
    tracing::info!(
        "Loaded {} pages from {}",
        pages.len(),
        corpus_path.display()
    );

    let engine = SearchEngine::with_config(&pages, &config.crawler, &config.rank);

    if cli.stats {
        print_statistics(&CrawlStatistics::from_engine(&engine));
        println!();
    }

    for keyword in &cli.queries {
        print_query_report(&QueryReport::run(&engine, keyword));
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seedrank=info,warn"),
            1 => EnvFilter::new("seedrank=debug,info"),
            2 => EnvFilter::new("seedrank=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies command-line overrides to the loaded config and validates it again
fn apply_overrides(cli: &Cli, config: &mut Config) -> anyhow::Result<()> {
    if let Some(seed) = &cli.seed {
        config.crawler.seed = seed.clone();
        validate(config).context("invalid --seed override")?;
    }
    Ok(())
}

/// Picks the corpus from the command line, falling back to the config
///
/// A relative path from the config file is resolved against the config
/// file's directory.
fn resolve_corpus_path(cli: &Cli, config: &Config) -> anyhow::Result<PathBuf> {
    if let Some(path) = &cli.corpus {
        return Ok(path.clone());
    }

    let Some(corpus) = &config.corpus else {
        bail!("no corpus given: pass --corpus or add a [corpus] section to the config");
    };

    let path = Path::new(&corpus.path);
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let base = cli.config.parent().unwrap_or_else(|| Path::new("."));
    Ok(base.join(path))
}

/// Handles the --dry-run mode: shows the validated configuration
fn handle_dry_run(config: &Config, corpus_path: &Path) {
    println!("=== Seedrank Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed: {}", config.crawler.seed);
    println!("  Max pages: {}", config.crawler.max_pages);

    println!("\nRank Configuration:");
    println!("  Damping factor: {}", config.rank.damping_factor);
    println!("  Iterations: {}", config.rank.iterations);

    println!("\nCorpus: {}", corpus_path.display());

    println!("\n✓ Configuration is valid");
}
