//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Items built here have the same shape the indexer produces, so tests can
//! skip the raw-content step when they only care about matching or rendering.

#![doc(hidden)]

use crate::index::{RawBlog, RawContent, RawProject, RawTech};
use crate::types::{ItemKind, ItemMetadata, SearchableItem};

/// A project with description `"About {name}"` and no tech stack.
pub fn make_project(id: &str, name: &str) -> SearchableItem {
    let description = format!("About {}", name);
    SearchableItem {
        kind: ItemKind::Project,
        id: id.to_string(),
        name: name.to_string(),
        keywords: dedup_lower(&[name, id]),
        content: description.clone(),
        description,
        metadata: ItemMetadata {
            url: Some(format!("/projects/{}", id)),
            ..ItemMetadata::default()
        },
    }
}

/// A blog post with description `"Notes on {title}"`.
pub fn make_blog(id: &str, title: &str, year: u32) -> SearchableItem {
    let description = format!("Notes on {}", title);
    let year_text = year.to_string();
    SearchableItem {
        kind: ItemKind::Blog,
        id: id.to_string(),
        name: title.to_string(),
        keywords: dedup_lower(&[title, id, &year_text]),
        content: format!("{} {}", title, description),
        description,
        metadata: ItemMetadata {
            year: Some(year),
            url: Some(format!("/blogs/{}", id)),
            ..ItemMetadata::default()
        },
    }
}

/// A technology entry, shaped the way the indexer shapes one.
pub fn make_tech(name: &str, category: &str) -> SearchableItem {
    SearchableItem {
        kind: ItemKind::Tech,
        id: name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"),
        name: name.to_string(),
        description: format!("Technology: {}", name),
        keywords: dedup_lower(&[name, category]),
        content: format!("{} {}", name, category),
        metadata: ItemMetadata {
            category: Some(category.to_string()),
            ..ItemMetadata::default()
        },
    }
}

fn dedup_lower(parts: &[&str]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in parts.iter().filter(|p| !p.is_empty()) {
        let lowered = part.to_lowercase();
        if !out.contains(&lowered) {
            out.push(lowered);
        }
    }
    out
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// A small but realistic portfolio: three projects, three posts, five technologies.
pub fn sample_content() -> RawContent {
    RawContent {
        projects: Some(vec![
            RawProject {
                id: Some("p1".to_string()),
                name: Some("Portfolio Site".to_string()),
                description: Some("A personal portfolio".to_string()),
                tech_stack: strings(&["React", "TypeScript"]),
                ..RawProject::default()
            },
            RawProject {
                id: Some("nx-workspace".to_string()),
                name: Some("Nx Workspace".to_string()),
                description: Some("Monorepo tooling for shared libraries".to_string()),
                purpose: Some("Keep builds fast as the codebase grows".to_string()),
                tech_stack: strings(&["Nx", "TypeScript", "Jest", "ESLint"]),
                features: strings(&["Affected builds", "Module boundaries"]),
                category: Some("Tooling".to_string()),
                ..RawProject::default()
            },
            RawProject {
                id: Some("chat".to_string()),
                name: Some("Portfolio Chat".to_string()),
                short_desc: Some("Ask questions about my work".to_string()),
                tech_stack: strings(&["React", "Node.js"]),
                highlights: strings(&["Intent detection"]),
                category: Some("Web".to_string()),
                ..RawProject::default()
            },
        ]),
        blogs: Some(vec![
            RawBlog {
                slug: Some("scaling-nx".to_string()),
                title: Some("Scaling Nx Monorepos".to_string()),
                excerpt: Some("Lessons from a large workspace".to_string()),
                tech_stack: strings(&["Nx"]),
                tags: strings(&["monorepo", "architecture"]),
                year: Some(2024),
                ..RawBlog::default()
            },
            RawBlog {
                id: Some("b2".to_string()),
                slug: Some("react-patterns".to_string()),
                title: Some("React Patterns I Keep Using".to_string()),
                excerpt: Some("Composition over configuration".to_string()),
                tech_stack: strings(&["React"]),
                tags: strings(&["frontend"]),
                year: Some(2023),
            },
            RawBlog {
                slug: Some("typed-apis".to_string()),
                title: Some("Typed APIs End to End".to_string()),
                excerpt: Some("Sharing TypeScript types between client and server".to_string()),
                tech_stack: strings(&["TypeScript"]),
                ..RawBlog::default()
            },
        ]),
        tech_stack: Some(vec![
            RawTech {
                name: Some("React".to_string()),
                category: Some("Frontend".to_string()),
                tags: strings(&["ui"]),
            },
            RawTech {
                name: Some("TypeScript".to_string()),
                category: Some("Language".to_string()),
                ..RawTech::default()
            },
            RawTech {
                name: Some("Nx".to_string()),
                category: Some("Tooling".to_string()),
                ..RawTech::default()
            },
            RawTech {
                name: Some("Node.js".to_string()),
                category: Some("Backend".to_string()),
                ..RawTech::default()
            },
            RawTech {
                name: Some("Jest".to_string()),
                category: Some("Testing".to_string()),
                ..RawTech::default()
            },
        ]),
    }
}
