// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary bytes as the query against a fixed sample portfolio. Search must
//! never panic and must keep its ranking invariants for any input.

#![no_main]

use folio::{build_index, classify_intent, search, testing::sample_content, tokenize, truncate_chars};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<folio::SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| build_index(&sample_content()));

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query = truncate_chars(&query, 200);

    let limit = 10;
    let results = search(index, query, limit);

    // INVARIANT 1: bounded by limit
    assert!(results.len() <= limit);

    // INVARIANT 2: only positive scores, best first
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert!(results.iter().all(|r| r.score > 0));

    // INVARIANT 3: matched keywords are query tokens
    let tokens = tokenize(query);
    for result in &results {
        assert!(result.matched_keywords.iter().all(|k| tokens.contains(k)));
    }

    // INVARIANT 4: the classifier sees the same tokens
    assert_eq!(classify_intent(query).keywords, tokens);
});
