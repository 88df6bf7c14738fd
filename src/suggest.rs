// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Follow-up question suggestions.
//!
//! Candidates come from two places: keyword triggers in the latest user
//! message, and a canned list picked by the last intent. They are merged
//! (contextual first), deduplicated, shuffled, and cut to five.
//!
//! The shuffle is the only randomness in the crate. `suggest` uses the thread
//! RNG; `suggest_with_rng` takes any `rand::Rng`, so a seeded `StdRng` makes
//! the output reproducible.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{ConversationMessage, Intent, IntentType, Role};
use crate::utils::contains_ci;

/// Most suggestions ever returned.
pub const MAX_SUGGESTIONS: usize = 5;

/// Which canned list backs the suggestions for an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSet {
    ProjectSearch,
    TechStack,
    BlogSearch,
    General,
}

impl SuggestionSet {
    pub fn for_intent(kind: IntentType) -> Self {
        match kind {
            IntentType::Project => SuggestionSet::ProjectSearch,
            IntentType::Tech => SuggestionSet::TechStack,
            IntentType::Blog => SuggestionSet::BlogSearch,
            IntentType::Experience | IntentType::General => SuggestionSet::General,
        }
    }

    pub fn questions(self) -> &'static [&'static str; 4] {
        match self {
            SuggestionSet::ProjectSearch => &[
                "What technologies were used in these projects?",
                "Show me more React projects",
                "Tell me about the architecture",
                "What challenges did you face?",
            ],
            SuggestionSet::TechStack => &[
                "What is your experience level with these?",
                "Show me projects using this tech",
                "What other technologies do you use?",
                "Tell me about your learning journey",
            ],
            SuggestionSet::BlogSearch => &[
                "Show me more articles on this topic",
                "What did you learn from this?",
                "Any related blog posts?",
                "Tell me more about the implementation",
            ],
            SuggestionSet::General => &[
                "What projects are you most proud of?",
                "Tell me about your tech stack",
                "Show me your latest work",
                "What technologies do you specialize in?",
            ],
        }
    }
}

/// A keyword trigger and the pair of questions it contributes.
struct ContextTrigger {
    needles: &'static [&'static str],
    questions: [&'static str; 2],
}

/// Checked independently; every trigger that fires contributes its pair.
const CONTEXT_TRIGGERS: &[ContextTrigger] = &[
    ContextTrigger {
        needles: &["react"],
        questions: [
            "What React patterns do you use?",
            "Show me your React components library",
        ],
    },
    ContextTrigger {
        needles: &["typescript"],
        questions: [
            "How do you structure TypeScript projects?",
            "Show me TypeScript best practices you follow",
        ],
    },
    ContextTrigger {
        needles: &["nx", "monorepo"],
        questions: [
            "How is your monorepo structured?",
            "What benefits does Nx provide?",
        ],
    },
    ContextTrigger {
        needles: &["architecture"],
        questions: [
            "Tell me about your design patterns",
            "How do you handle state management?",
        ],
    },
    ContextTrigger {
        needles: &["blog", "article"],
        questions: [
            "Show me your latest blog posts",
            "What topics do you write about?",
        ],
    },
];

/// Suggest up to five follow-up questions, shuffled with the thread RNG.
pub fn suggest(history: &[ConversationMessage], last_intent: &Intent) -> Vec<String> {
    suggest_with_rng(history, last_intent, &mut rand::thread_rng())
}

/// Suggest up to five follow-up questions using `rng` for the shuffle.
///
/// Empty history yields no suggestions.
pub fn suggest_with_rng<R>(
    history: &[ConversationMessage],
    last_intent: &Intent,
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut candidates = candidate_suggestions(history, last_intent);
    candidates.shuffle(rng);
    candidates.truncate(MAX_SUGGESTIONS);
    candidates.into_iter().map(str::to_string).collect()
}

/// Every suggestion that could be returned, before shuffling: contextual
/// questions first, then the intent's canned list, duplicates removed.
pub fn candidate_suggestions(
    history: &[ConversationMessage],
    last_intent: &Intent,
) -> Vec<&'static str> {
    if history.is_empty() {
        return Vec::new();
    }

    let last_user_message = history
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .map_or("", |m| m.content.as_str());

    let contextual = CONTEXT_TRIGGERS
        .iter()
        .filter(|t| t.needles.iter().any(|n| contains_ci(last_user_message, n)))
        .flat_map(|t| t.questions);
    let canned = SuggestionSet::for_intent(last_intent.kind).questions().iter().copied();

    let mut unique: Vec<&'static str> = Vec::new();
    for question in contextual.chain(canned) {
        if !unique.contains(&question) {
            unique.push(question);
        }
    }
    unique
}
