// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for response rendering and suggestions.
//!
//! Builds items with arbitrary names, descriptions, tech stacks, and years,
//! then renders them through every template. Multi-byte text must never be
//! split mid-character by the description snippet.

#![no_main]

use arbitrary::Arbitrary;
use folio::{
    respond, suggest_with_rng, ConversationMessage, Intent, IntentType, ItemKind, ItemMetadata,
    SearchResult, SearchableItem,
};
use libfuzzer_sys::fuzz_target;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Arbitrary, Debug)]
struct FuzzItem {
    kind: u8,
    name: String,
    description: String,
    tech_stack: Vec<String>,
    year: Option<u32>,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    query: String,
    intent: u8,
    items: Vec<FuzzItem>,
    history: Vec<(bool, String)>,
    seed: u64,
}

fn kind_of(n: u8) -> ItemKind {
    match n % 3 {
        0 => ItemKind::Project,
        1 => ItemKind::Blog,
        _ => ItemKind::Tech,
    }
}

fn intent_of(n: u8) -> IntentType {
    match n % 5 {
        0 => IntentType::Project,
        1 => IntentType::Blog,
        2 => IntentType::Tech,
        3 => IntentType::Experience,
        _ => IntentType::General,
    }
}

fuzz_target!(|input: FuzzInput| {
    let items: Vec<SearchableItem> = input
        .items
        .into_iter()
        .take(32)
        .enumerate()
        .map(|(i, item)| SearchableItem {
            kind: kind_of(item.kind),
            id: i.to_string(),
            name: item.name,
            description: item.description,
            keywords: vec![],
            content: String::new(),
            metadata: ItemMetadata {
                tech_stack: item.tech_stack,
                year: item.year,
                ..ItemMetadata::default()
            },
        })
        .collect();

    let results: Vec<SearchResult<'_>> = items
        .iter()
        .map(|item| SearchResult {
            item,
            score: 1,
            matched_keywords: vec![],
        })
        .collect();

    let intent = Intent::new(intent_of(input.intent), vec![]);

    // INVARIANT 1: rendering never panics and never yields an empty answer
    let text = respond(&input.query, &results, &intent);
    assert!(!text.is_empty());

    // INVARIANT 2: an empty result set always echoes the query
    if results.is_empty() {
        assert!(text.contains(input.query.as_str()));
    }

    // INVARIANT 3: suggestions stay within bounds
    let history: Vec<ConversationMessage> = input
        .history
        .into_iter()
        .map(|(is_user, content)| {
            if is_user {
                ConversationMessage::user(content)
            } else {
                ConversationMessage::assistant(content)
            }
        })
        .collect();
    let picked = suggest_with_rng(&history, &intent, &mut StdRng::seed_from_u64(input.seed));
    assert!(picked.len() <= folio::MAX_SUGGESTIONS);
    assert_eq!(history.is_empty(), picked.is_empty());
});
