//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{build_index, parse_content, RawContent, SearchIndex};

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_blog, make_project, make_tech, sample_content};

/// The single-project portfolio used by the end-to-end scoring checks.
pub const PORTFOLIO_JSON: &str = r#"{
    "projects": [
        {
            "id": "p1",
            "name": "Portfolio Site",
            "description": "A personal portfolio",
            "techStack": ["React", "TypeScript"]
        }
    ]
}"#;

pub fn portfolio_index() -> SearchIndex {
    build_index(&raw(PORTFOLIO_JSON))
}

pub fn sample_index() -> SearchIndex {
    build_index(&sample_content())
}

pub fn raw(json: &str) -> RawContent {
    parse_content(json).expect("fixture JSON should parse")
}

/// Ids of `results`, in rank order.
pub fn ids(results: &[folio::SearchResult<'_>]) -> Vec<String> {
    results.iter().map(|r| r.item.id.clone()).collect()
}
