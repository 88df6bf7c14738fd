// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Ties keep their original relative order, which is the
//! index order (projects, then blogs, then technologies, each in source
//! order). `slice::sort_by` is stable, so that falls out for free as long as
//! nobody swaps it for `sort_unstable_by`.

use crate::types::SearchResult;
use std::cmp::Ordering;

/// Compare two search results for ranking: descending score, nothing else.
///
/// Returning `Equal` on ties is what lets the stable sort preserve index order.
pub fn compare_results(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Sort results in place, best first, ties in original order.
pub fn sort_results(results: &mut [SearchResult<'_>]) {
    results.sort_by(compare_results);
}
