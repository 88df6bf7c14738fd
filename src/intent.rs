// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intent classification: an ordered decision list over substrings.
//!
//! Rules are tried top to bottom against the lowercased query and the first
//! one with any trigger present wins. The rules overlap ("blog app" hits both
//! the project and blog rules) and the earlier rule always takes it. Triggers
//! are plain substrings, so "use" also fires inside "user" or "because".

use crate::types::{Intent, IntentType};
use crate::utils::tokenize;

/// One entry of the decision list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub kind: IntentType,
    pub triggers: &'static [&'static str],
}

impl IntentRule {
    /// Does any trigger occur in `query`? `query` must already be lowercase.
    pub fn matches(&self, query: &str) -> bool {
        self.triggers.iter().any(|t| query.contains(t))
    }
}

/// The decision list, in evaluation order. Anything unmatched is `General`.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        kind: IntentType::Project,
        triggers: &["project", "app", "build", "built"],
    },
    IntentRule {
        kind: IntentType::Blog,
        triggers: &["blog", "article", "post", "write", "wrote"],
    },
    IntentRule {
        kind: IntentType::Tech,
        triggers: &["technology", "tech stack", "use", "tool"],
    },
    IntentRule {
        kind: IntentType::Experience,
        triggers: &["experience", "year", "background", "skill"],
    },
];

/// Classify a raw query. `keywords` is always `tokenize(query)`.
///
/// ```
/// use folio::{classify_intent, IntentType};
///
/// assert_eq!(classify_intent("Tell me about your projects").kind, IntentType::Project);
/// assert_eq!(classify_intent("What's your tech stack?").kind, IntentType::Tech);
/// assert_eq!(classify_intent("hello").kind, IntentType::General);
/// ```
pub fn classify_intent(query: &str) -> Intent {
    let lowered = query.to_lowercase();
    let kind = INTENT_RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map_or(IntentType::General, |rule| rule.kind);

    Intent::new(kind, tokenize(query))
}
