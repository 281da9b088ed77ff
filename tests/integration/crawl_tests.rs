//! Crawl and rank behaviour over whole corpora

use crate::common::{cooking_site, short, url};
use seedrank::config::{CrawlerConfig, RankConfig};
use seedrank::crawler::{crawl, ContentProvider, CrawlStep, Crawler, PageCache, StopReason};
use seedrank::rank::compute_ranks;
use std::collections::HashSet;

#[test]
fn test_two_page_cycle() {
    let pages: PageCache = [("A", r#"<a href="B">"#), ("B", r#"<a href="A">"#)]
        .into_iter()
        .collect();

    let output = crawl(&pages, &CrawlerConfig::new("A"));
    assert_eq!(output.visited, vec!["A", "B"]);
    assert_eq!(output.graph.outlinks("A").unwrap(), ["B"]);
    assert_eq!(output.graph.outlinks("B").unwrap(), ["A"]);
    assert_eq!(output.stop_reason, StopReason::FrontierExhausted);

    let ranks = compute_ranks(&output.graph, &RankConfig::default());
    assert!((ranks.get("A").unwrap() - 0.5).abs() < 1e-9);
    assert!((ranks.get("B").unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn test_cooking_site_visit_order_is_depth_first() {
    let output = crawl(cooking_site(), &CrawlerConfig::new(url("index.html")));

    assert_eq!(
        short(&output.visited),
        vec![
            "index.html",
            "zinc.html",
            "nickel.html",
            "kathleen.html",
            "arsenic.html",
            "hummus.html"
        ]
    );
    assert!(output.frontier_remaining.is_empty());
}

#[test]
fn test_visited_matches_graph_and_frontier_is_disjoint() {
    let config = CrawlerConfig::new(url("index.html")).with_max_pages(3);
    let mut crawler = Crawler::new(cooking_site(), &config);

    loop {
        for page in crawler.visited() {
            assert!(!crawler.is_pending(page));
        }
        if let CrawlStep::Finished(_) = crawler.step() {
            break;
        }
    }

    let output = crawler.finish();
    let visited: HashSet<&str> = output.visited.iter().map(String::as_str).collect();
    let keys: HashSet<&str> = output.graph.pages().collect();
    assert_eq!(visited, keys);
    for pending in &output.frontier_remaining {
        assert!(!visited.contains(pending.as_str()));
    }
}

#[test]
fn test_budget_truncation() {
    let config = CrawlerConfig::new(url("index.html")).with_max_pages(3);
    let output = crawl(cooking_site(), &config);

    assert_eq!(output.stop_reason, StopReason::BudgetReached);
    assert_eq!(
        short(&output.visited),
        vec!["index.html", "zinc.html", "nickel.html", "kathleen.html"]
    );
    assert_eq!(
        short(&output.frontier_remaining),
        vec!["hummus.html", "arsenic.html"]
    );
    // Only visited pages are indexed
    assert!(output.index.lookup("garbanzo").is_some());
    assert!(output.index.lookup("container").is_none());

    let ranks = compute_ranks(&output.graph, &RankConfig::default());
    assert_eq!(ranks.len(), 4);
}

#[test]
fn test_default_budget_on_long_chain() {
    // p0 -> p1 -> ... -> p150
    let pages: PageCache = (0..=150)
        .map(|i| (format!("p{}", i), format!(r#"<a href="p{}">next</a>"#, i + 1)))
        .collect();

    let output = crawl(&pages, &CrawlerConfig::new("p0"));
    assert_eq!(output.stop_reason, StopReason::BudgetReached);
    assert_eq!(output.visited.len(), 101);
    assert_eq!(output.frontier_remaining, vec!["p101".to_string()]);
    assert_eq!(output.graph.len(), 101);
}

#[test]
fn test_index_counts_match_token_occurrences() {
    let pages = cooking_site();
    let output = crawl(&pages, &CrawlerConfig::new(url("index.html")));

    for page in &output.visited {
        let content = pages.fetch(page);
        for token in content.split_whitespace() {
            let postings = output.index.lookup(token).unwrap();
            let indexed = postings.iter().filter(|u| *u == page).count();
            let occurrences = content.split_whitespace().filter(|t| *t == token).count();
            assert_eq!(indexed, occurrences, "{} on {}", token, page);
        }
    }
}

#[test]
fn test_zero_outlink_pages_are_in_graph() {
    let output = crawl(cooking_site(), &CrawlerConfig::new(url("index.html")));

    let mut sinks: Vec<&str> = output.graph.sinks().collect();
    sinks.sort();
    assert_eq!(sinks, vec![url("hummus.html"), url("kathleen.html")]);
    assert_eq!(output.graph.outlinks(&url("hummus.html")).unwrap().len(), 0);
}

#[test]
fn test_cooking_site_ranks() {
    let output = crawl(cooking_site(), &CrawlerConfig::new(url("index.html")));
    let ranks = compute_ranks(&output.graph, &RankConfig::default());

    let expected = [
        ("index.html", 0.033333333333333326),
        ("zinc.html", 0.038666666666666655),
        ("nickel.html", 0.09743999999999997),
        ("kathleen.html", 0.11661866666666663),
        ("arsenic.html", 0.05413333333333332),
        ("hummus.html", 0.038666666666666655),
    ];
    for (page, rank) in expected {
        let actual = ranks.get(&url(page)).unwrap();
        assert!((actual - rank).abs() < 1e-12, "{}: {} != {}", page, actual, rank);
    }

    // Two sinks leak most of the mass
    assert!((ranks.total() - 0.37885866666666657).abs() < 1e-12);
}

#[test]
fn test_ranks_are_deterministic() {
    let first = {
        let output = crawl(cooking_site(), &CrawlerConfig::new(url("index.html")));
        compute_ranks(&output.graph, &RankConfig::default())
    };
    let second = {
        let output = crawl(cooking_site(), &CrawlerConfig::new(url("index.html")));
        compute_ranks(&output.graph, &RankConfig::default())
    };

    for (page, rank) in first.iter() {
        assert_eq!(second.get(page).unwrap().to_bits(), rank.to_bits());
    }
}

#[test]
fn test_mass_conserved_when_every_page_links_out() {
    let pages: PageCache = [
        ("A", r#"<a href="B"> <a href="C">"#),
        ("B", r#"<a href="C">"#),
        ("C", r#"<a href="A"> <a href="D">"#),
        ("D", r#"<a href="A"> <a href="B"> <a href="C">"#),
    ]
    .into_iter()
    .collect();
    let output = crawl(&pages, &CrawlerConfig::new("A"));

    for iterations in [1, 5, 10, 40] {
        let config = RankConfig {
            damping_factor: 0.8,
            iterations,
        };
        let ranks = compute_ranks(&output.graph, &config);
        assert!((ranks.total() - 1.0).abs() < 1e-9);
    }
}
