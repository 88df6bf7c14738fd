// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Four weighted substring checks per query token:
//!
//! | Field         | Weight | Listed in `matched_keywords` |
//! |---------------|--------|------------------------------|
//! | `name`        | 10     | yes                          |
//! | `keywords`    | 5      | yes, once                    |
//! | `description` | 2      | yes, once                    |
//! | `content`     | 1      | no                           |
//!
//! Checks are independent, so a single token can earn all four weights, and
//! repeated tokens earn them again. Name, description, and content are
//! compared case-insensitively; keywords are already lowercase.

use crate::types::SearchableItem;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Token is a substring of the item name.
pub const NAME_SCORE: u32 = 10;

/// Token is a substring of at least one keyword.
pub const KEYWORD_SCORE: u32 = 5;

/// Token is a substring of the description.
pub const DESCRIPTION_SCORE: u32 = 2;

/// Token is a substring of the free-text content.
pub const CONTENT_SCORE: u32 = 1;

/// Points earned per field, summed over all query tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub name: u32,
    pub keywords: u32,
    pub description: u32,
    pub content: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.name + self.keywords + self.description + self.content
    }
}

/// Score of one item against one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemScore {
    pub breakdown: ScoreBreakdown,
    /// Tokens that hit name, keywords, or description, first-seen order, no repeats.
    pub matched_keywords: Vec<String>,
}

impl ItemScore {
    pub fn total(&self) -> u32 {
        self.breakdown.total()
    }
}

/// Score `item` against already-tokenized query terms.
pub fn score_item(tokens: &[String], item: &SearchableItem) -> ItemScore {
    let name = item.name.to_lowercase();
    let description = item.description.to_lowercase();
    let content = item.content.to_lowercase();

    let mut score = ItemScore::default();

    for token in tokens {
        let token = token.as_str();

        if name.contains(token) {
            score.breakdown.name += NAME_SCORE;
            score.record(token);
        }

        if item.keywords.iter().any(|k| k.contains(token)) {
            score.breakdown.keywords += KEYWORD_SCORE;
            score.record(token);
        }

        if description.contains(token) {
            score.breakdown.description += DESCRIPTION_SCORE;
            score.record(token);
        }

        if content.contains(token) {
            score.breakdown.content += CONTENT_SCORE;
        }
    }

    score
}

impl ItemScore {
    fn record(&mut self, token: &str) {
        if !self.matched_keywords.iter().any(|k| k == token) {
            self.matched_keywords.push(token.to_string());
        }
    }
}
