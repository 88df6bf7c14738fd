// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a portfolio search.
//!
//! Raw content of three different shapes (projects, blog posts, technologies)
//! gets flattened into one `SearchableItem` shape so the matcher and the
//! templates never have to care where an item came from.
//!
//! | Type                  | Lifetime                  | Purpose                              |
//! |-----------------------|---------------------------|--------------------------------------|
//! | `SearchableItem`      | lives in the index        | One unit of indexable content        |
//! | `SearchIndex`         | built once per snapshot   | Items grouped by kind, read-only     |
//! | `SearchResult`        | per query                 | Borrowed item + score + matched terms |
//! | `Intent`              | per query                 | Coarse category + query tokens       |
//! | `ConversationMessage` | owned by the caller       | Chat history for follow-ups          |
//!
//! # Invariants
//!
//! - **SearchableItem**: every entry of `keywords` is lowercase and non-empty,
//!   and no entry appears twice.
//! - **SearchResult**: `score > 0` and `matched_keywords` holds no duplicates.
//! - **SearchIndex**: never mutated after `build_index` returns. Results borrow
//!   from it, so the borrow checker enforces this while queries are in flight.

use serde::{Deserialize, Serialize};

// =============================================================================
// INDEXED CONTENT
// =============================================================================

/// Which collection an item was indexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Blog,
    Tech,
}

impl ItemKind {
    /// Lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Project => "project",
            ItemKind::Blog => "blog",
            ItemKind::Tech => "tech",
        }
    }

    /// Capitalized name used for group headers ("Project", "Blog", "Tech").
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Project => "Project",
            ItemKind::Blog => "Blog",
            ItemKind::Tech => "Tech",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional extras carried alongside an item for rendering.
///
/// Absent source fields stay empty (`Vec::new()` / `None`) rather than
/// being invented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One normalized record: a project, a blog post, or a technology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub id: String,
    pub name: String,
    pub description: String,
    /// Lowercase, deduplicated, first-seen order.
    pub keywords: Vec<String>,
    /// Free text that only earns the lowest match weight.
    pub content: String,
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl SearchableItem {
    /// Tech stack entries, empty when the source had none.
    pub fn tech_stack(&self) -> &[String] {
        &self.metadata.tech_stack
    }
}

/// Everything searchable, grouped by where it came from.
///
/// Rebuilding from identical raw content yields an identical value, so
/// `PartialEq` doubles as the determinism check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub projects: Vec<SearchableItem>,
    pub blogs: Vec<SearchableItem>,
    pub tech: Vec<SearchableItem>,
}

impl SearchIndex {
    /// All items in match order: projects, then blogs, then technologies.
    pub fn items(&self) -> impl Iterator<Item = &SearchableItem> {
        self.projects
            .iter()
            .chain(self.blogs.iter())
            .chain(self.tech.iter())
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.blogs.len() + self.tech.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A ranked hit. Borrows its item from the index it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub item: &'a SearchableItem,
    pub score: u32,
    /// Query tokens that hit the name, keywords, or description.
    /// Content-only hits add score but are not listed here.
    pub matched_keywords: Vec<String>,
}

// =============================================================================
// QUERY INTENT
// =============================================================================

/// What kind of answer a query is after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Project,
    Blog,
    Tech,
    Experience,
    #[default]
    General,
}

impl IntentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentType::Project => "project",
            IntentType::Blog => "blog",
            IntentType::Tech => "tech",
            IntentType::Experience => "experience",
            IntentType::General => "general",
        }
    }
}

impl std::fmt::Display for IntentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified query. `keywords` is the tokenized query regardless of `kind`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    #[serde(rename = "type")]
    pub kind: IntentType,
    pub keywords: Vec<String>,
}

impl Intent {
    pub fn new(kind: IntentType, keywords: Vec<String>) -> Self {
        Self { kind, keywords }
    }
}

// =============================================================================
// CONVERSATION
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of chat history, read-only input to the suggestion generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
