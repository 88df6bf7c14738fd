// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for content parsing and indexing.
//!
//! Any text that parses as content must index without panicking, the same
//! way every time, with no empty keywords.

#![no_main]

use folio::{build_index, parse_content};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(content) = parse_content(text) else {
        return;
    };

    let index = build_index(&content);
    assert_eq!(index, build_index(&content));

    for item in index.items() {
        for keyword in &item.keywords {
            assert!(!keyword.is_empty());
        }
    }
});
