//! Query surface over a crawled and ranked corpus

use crate::common::{cooking_site, short, url, BASE};
use seedrank::config::{load_config, CrawlerConfig, RankConfig};
use seedrank::crawler::{PageCache, StopReason};
use seedrank::output::{CrawlStatistics, QueryReport};
use seedrank::SearchEngine;
use std::io::Write;
use tempfile::TempDir;

fn engine() -> SearchEngine {
    SearchEngine::new(url("index.html"), cooking_site())
}

#[test]
fn test_lookup_keeps_crawl_order() {
    let engine = engine();

    assert_eq!(
        short(engine.lookup("Hummus").unwrap()),
        vec!["index.html", "nickel.html", "kathleen.html", "arsenic.html"]
    );
    assert_eq!(short(engine.lookup("hummus").unwrap()), vec!["arsenic.html"]);
}

#[test]
fn test_lookup_not_found() {
    let engine = engine();

    assert!(engine.lookup("babaganoush").is_none());
    assert!(engine.lucky_search("babaganoush").is_none());
    assert!(engine.ordered_search("babaganoush").is_none());
    // Anchor text glued to markup is its own token
    assert!(engine.lookup("Chef").is_none());
}

#[test]
fn test_lucky_search() {
    let engine = engine();

    assert_eq!(engine.lucky_search("Hummus"), Some(url("kathleen.html").as_str()));
    assert_eq!(engine.lucky_search("the"), Some(url("nickel.html").as_str()));
    assert_eq!(engine.lucky_search("hummus"), Some(url("arsenic.html").as_str()));
}

#[test]
fn test_lucky_search_tie_goes_to_first_indexed() {
    let engine = engine();
    let ranks = engine.ranks();

    // zinc and hummus have bit-identical ranks; zinc is crawled first
    assert_eq!(
        ranks.get(&url("zinc.html")).unwrap().to_bits(),
        ranks.get(&url("hummus.html")).unwrap().to_bits()
    );
    assert_eq!(
        engine.lucky_search("<html>"),
        Some(url("kathleen.html").as_str())
    );
    assert_eq!(
        short(&engine.ordered_search("<html>").unwrap()),
        vec![
            "kathleen.html",
            "nickel.html",
            "arsenic.html",
            "zinc.html",
            "hummus.html",
            "index.html"
        ]
    );
}

#[test]
fn test_ordered_search() {
    let engine = engine();

    assert_eq!(
        short(&engine.ordered_search("Hummus").unwrap()),
        vec!["kathleen.html", "nickel.html", "arsenic.html", "index.html"]
    );
    assert_eq!(
        short(&engine.ordered_search("the").unwrap()),
        vec!["nickel.html", "arsenic.html", "hummus.html", "index.html"]
    );
}

#[test]
fn test_index_and_rank_maps() {
    let engine = engine();

    let index = engine.get_created_search_index();
    assert!(index.contains_key("garbanzo"));
    assert_eq!(index, engine.get_content_index());

    let ranks = engine.get_url_ranks();
    assert_eq!(ranks.len(), 6);
    assert!(ranks.keys().all(|page| page.starts_with(BASE)));
    assert!(ranks.values().all(|rank| *rank > 0.0));
}

#[test]
fn test_truncated_engine_still_answers() {
    let engine = SearchEngine::with_config(
        cooking_site(),
        &CrawlerConfig::new(url("index.html")).with_max_pages(2),
        &RankConfig::default(),
    );

    assert_eq!(engine.stop_reason(), StopReason::BudgetReached);
    assert_eq!(
        short(engine.crawled_pages()),
        vec!["index.html", "zinc.html", "nickel.html"]
    );
    assert!(engine.lookup("garbanzo").is_none());
    assert!(engine.lucky_search("Hummus").is_some());

    let stats = CrawlStatistics::from_engine(&engine);
    assert_eq!(stats.pages_visited, 3);
    assert_eq!(stats.frontier_remaining, 3);
}

#[test]
fn test_engine_from_files() {
    let dir = TempDir::new().unwrap();

    let corpus_path = dir.path().join("corpus.toml");
    let mut corpus = std::fs::File::create(&corpus_path).unwrap();
    corpus
        .write_all(
            br#"
[pages]
"http://a/" = 'falafel <a href="http://b/">b</a> <a href="http://c/">c</a>'
"http://b/" = 'falafel <a href="http://a/">a</a>'
"http://c/" = 'falafel <a href="http://b/">b</a>'
"#,
        )
        .unwrap();

    let config_path = dir.path().join("seedrank.toml");
    let mut config_file = std::fs::File::create(&config_path).unwrap();
    config_file
        .write_all(
            b"[crawler]\nseed = \"http://a/\"\nmax-pages = 10\n\n[rank]\niterations = 25\n\n[corpus]\npath = \"corpus.toml\"\n",
        )
        .unwrap();

    let config = load_config(&config_path).unwrap();
    let pages = PageCache::load(&dir.path().join(config.corpus.unwrap().path)).unwrap();
    assert_eq!(pages.len(), 3);

    let engine = SearchEngine::with_config(&pages, &config.crawler, &config.rank);
    assert_eq!(engine.crawled_pages(), ["http://a/", "http://c/", "http://b/"]);

    let report = QueryReport::run(&engine, "falafel");
    assert!(report.found());
    assert_eq!(report.ranked.len(), 3);
    assert_eq!(report.lucky.as_deref(), Some(report.ranked[0].0.as_str()));
    assert!((engine.ranks().total() - 1.0).abs() < 1e-9);
}
