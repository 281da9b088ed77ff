//! Index structures built during a crawl
//!
//! - `InvertedIndex`: token -> URLs in crawl order
//! - `LinkGraph`: visited page -> raw outlinks, in visit order
//!
//! Both are filled one page at a time by the crawler and are read-only
//! once the crawl finishes.

mod inverted;
mod link_graph;

pub use inverted::{tokenize, InvertedIndex};
pub use link_graph::LinkGraph;
