//! Keyword search and canned chat answers over a developer portfolio.
//!
//! Portfolio content (projects, blog posts, technologies) is flattened into a
//! single searchable shape, queries are matched with weighted substring
//! checks, and the ranked hits are rendered into a chat reply chosen by a
//! simple intent classifier. Follow-up questions are suggested from the
//! conversation so far.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ index/raw.rs │────▶│  index/      │────▶│  search/     │
//! │ (RawContent) │     │ (build_index)│     │  (search)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!        ┌──────────────┐                          ▼
//!        │  intent.rs   │─────────────────▶┌──────────────┐
//!        │(classify_    │                  │  respond/    │
//!        │  intent)     │──────┐           │  (respond)   │
//!        └──────────────┘      │           └──────────────┘
//!                              ▼
//!                       ┌──────────────┐
//!                       │  suggest.rs  │
//!                       │  (suggest)   │
//!                       └──────────────┘
//! ```
//!
//! `utils` (tokenizer) and `scoring` (field weights, ranking) sit under
//! `search`; `types` is shared by everything.
//!
//! # Usage
//!
//! ```
//! use folio::{build_index, classify_intent, respond, search, RawContent, DEFAULT_LIMIT};
//!
//! let content: RawContent = serde_json::from_str(r#"{
//!     "projects": [{"id": "p1", "name": "Portfolio Site",
//!                   "description": "A personal portfolio",
//!                   "techStack": ["React", "TypeScript"]}]
//! }"#).unwrap();
//! let index = build_index(&content);
//!
//! let query = "Which projects use React?";
//! let intent = classify_intent(query);
//! let results = search(&index, query, DEFAULT_LIMIT);
//! let answer = respond(query, &results, &intent);
//!
//! assert!(answer.starts_with("I found 1 project"));
//! ```

pub mod content;
pub mod error;
pub mod index;
pub mod intent;
pub mod respond;
pub mod scoring;
pub mod search;
pub mod suggest;
pub mod testing;
mod types;
mod utils;

pub use content::{load_content, parse_content};
pub use error::{FolioError, Result};
pub use index::{build_index, RawBlog, RawContent, RawProject, RawTech};
pub use intent::{classify_intent, IntentRule, INTENT_RULES};
pub use respond::{respond, NO_RESULT_SUGGESTIONS};
pub use scoring::{
    ranking::{compare_results, sort_results},
    score_item, ItemScore, ScoreBreakdown, CONTENT_SCORE, DESCRIPTION_SCORE, KEYWORD_SCORE,
    NAME_SCORE,
};
pub use search::{search, search_items, DEFAULT_LIMIT};
pub use suggest::{candidate_suggestions, suggest, suggest_with_rng, SuggestionSet, MAX_SUGGESTIONS};
pub use types::{
    ConversationMessage, Intent, IntentType, ItemKind, ItemMetadata, Role, SearchIndex,
    SearchResult, SearchableItem,
};
pub use utils::{contains_ci, tokenize, truncate_chars};
