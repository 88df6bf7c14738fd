// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: tokenize, score every item, keep the positives, rank, truncate.
//!
//! Linear in `items × tokens`. Portfolios hold tens of items, not millions,
//! so there is no inverted index here; every item is scored on every query.
//!
//! Results borrow from the index. Because the index cannot be mutated while
//! those borrows live, concurrent readers need no locking.

use crate::scoring::{ranking::sort_results, score_item};
use crate::types::{SearchIndex, SearchResult, SearchableItem};
use crate::utils::tokenize;

/// Result cap when the caller has no preference.
pub const DEFAULT_LIMIT: usize = 10;

/// Search the whole index, best match first, at most `limit` results.
///
/// An empty or punctuation-only query (no tokens longer than two characters)
/// returns nothing rather than everything. A `limit` of 0 returns nothing.
///
/// ```
/// use folio::{build_index, search, RawContent, DEFAULT_LIMIT};
///
/// let content: RawContent = serde_json::from_str(
///     r#"{"projects": [{"id": "p1", "name": "Portfolio Site", "techStack": ["React"]}]}"#,
/// ).unwrap();
/// let index = build_index(&content);
///
/// let results = search(&index, "portfolio react", DEFAULT_LIMIT);
/// assert_eq!(results[0].item.id, "p1");
/// assert!(search(&index, "?!", DEFAULT_LIMIT).is_empty());
/// ```
pub fn search<'a>(index: &'a SearchIndex, query: &str, limit: usize) -> Vec<SearchResult<'a>> {
    search_items(index.items(), query, limit)
}

/// Search an arbitrary sequence of items. Ties keep the sequence's order.
pub fn search_items<'a, I>(items: I, query: &str, limit: usize) -> Vec<SearchResult<'a>>
where
    I: IntoIterator<Item = &'a SearchableItem>,
{
    let tokens = tokenize(query);
    if tokens.is_empty() || limit == 0 {
        tracing::trace!(tokens = tokens.len(), limit, "nothing to search for");
        return Vec::new();
    }

    let mut results: Vec<SearchResult<'a>> = items
        .into_iter()
        .filter_map(|item| {
            let score = score_item(&tokens, item);
            let total = score.total();
            (total > 0).then(|| SearchResult {
                item,
                score: total,
                matched_keywords: score.matched_keywords,
            })
        })
        .collect();

    let hits = results.len();
    sort_results(&mut results);
    results.truncate(limit);

    tracing::debug!(tokens = tokens.len(), hits, returned = results.len(), "search");

    results
}
