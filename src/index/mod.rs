// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: raw portfolio content in, `SearchIndex` out.
//!
//! Each collection gets its own normalizer because projects, blog posts, and
//! technologies carry different fields, but they all land in the same
//! `SearchableItem` shape. Building is a pure function of the input: no I/O,
//! no randomness, and the same content always produces the same index.

pub mod raw;

pub use raw::{RawBlog, RawContent, RawProject, RawTech};

use crate::types::{ItemKind, ItemMetadata, SearchIndex, SearchableItem};

/// Build a search index from raw content.
///
/// A missing collection yields an empty list for that kind. Missing fields
/// inside a record become empty strings or lists; this never fails.
pub fn build_index(content: &RawContent) -> SearchIndex {
    let index = SearchIndex {
        projects: content
            .projects
            .iter()
            .flatten()
            .map(index_project)
            .collect(),
        blogs: content.blogs.iter().flatten().map(index_blog).collect(),
        tech: content.tech_stack.iter().flatten().map(index_tech).collect(),
    };

    tracing::debug!(
        projects = index.projects.len(),
        blogs = index.blogs.len(),
        tech = index.tech.len(),
        "built search index"
    );

    index
}

fn index_project(project: &RawProject) -> SearchableItem {
    let id = non_empty(&project.id).unwrap_or_default().to_string();
    let name = non_empty(&project.name).unwrap_or(id.as_str()).to_string();
    let description = non_empty(&project.description)
        .or_else(|| non_empty(&project.short_desc))
        .unwrap_or_default()
        .to_string();

    let mut keywords = KeywordSet::default();
    keywords.push(non_empty(&project.name));
    keywords.push(Some(id.as_str()));
    keywords.extend(&project.tech_stack);
    keywords.extend(&project.features);
    keywords.extend(&project.highlights);
    keywords.push(non_empty(&project.category));

    let content = join_present(
        [
            non_empty(&project.description),
            non_empty(&project.short_desc),
            non_empty(&project.purpose),
        ]
        .into_iter()
        .chain(project.features.iter().map(|f| Some(f.as_str())))
        .chain(project.highlights.iter().map(|h| Some(h.as_str()))),
    );

    let url = format!("/projects/{}", id);

    SearchableItem {
        kind: ItemKind::Project,
        id,
        name,
        description,
        keywords: keywords.into_vec(),
        content,
        metadata: ItemMetadata {
            tech_stack: project.tech_stack.clone(),
            category: non_empty(&project.category).map(str::to_string),
            year: None,
            url: Some(url),
        },
    }
}

fn index_blog(blog: &RawBlog) -> SearchableItem {
    let slug = non_empty(&blog.slug);
    let id = non_empty(&blog.id).or(slug).unwrap_or_default().to_string();
    let name = non_empty(&blog.title).unwrap_or_default().to_string();
    let description = non_empty(&blog.excerpt).unwrap_or_default().to_string();
    let year = blog.year.map(|y| y.to_string());

    let mut keywords = KeywordSet::default();
    keywords.push(Some(name.as_str()));
    keywords.push(slug);
    keywords.extend(&blog.tech_stack);
    keywords.extend(&blog.tags);
    keywords.push(year.as_deref());

    let content = join_present(
        [Some(name.as_str()), Some(description.as_str())]
            .into_iter()
            .chain(blog.tags.iter().map(|t| Some(t.as_str()))),
    );

    let url = format!("/blogs/{}", slug.unwrap_or(id.as_str()));

    SearchableItem {
        kind: ItemKind::Blog,
        id,
        name,
        description,
        keywords: keywords.into_vec(),
        content,
        metadata: ItemMetadata {
            tech_stack: blog.tech_stack.clone(),
            category: None,
            year: blog.year,
            url: Some(url),
        },
    }
}

fn index_tech(tech: &RawTech) -> SearchableItem {
    let name = non_empty(&tech.name).unwrap_or_default().to_string();
    let category = non_empty(&tech.category);

    let mut keywords = KeywordSet::default();
    keywords.push(Some(name.as_str()));
    keywords.push(category);
    keywords.extend(&tech.tags);

    SearchableItem {
        kind: ItemKind::Tech,
        id: slugify(&name),
        description: format!("Technology: {}", name),
        keywords: keywords.into_vec(),
        content: format!("{} {}", name, category.unwrap_or_default()),
        metadata: ItemMetadata {
            category: category.map(str::to_string),
            ..ItemMetadata::default()
        },
        name,
    }
}

/// Lowercase, with each whitespace run collapsed into a single `-`.
///
/// Leading and trailing runs are kept as dashes: `" React Native"` becomes
/// `"-react-native"`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

/// Treat `None` and `""` the same way.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Space-join the present, non-empty parts.
fn join_present<'a>(parts: impl Iterator<Item = Option<&'a str>>) -> String {
    parts
        .flatten()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ordered set of lowercase keywords. Empty and repeated entries are dropped.
#[derive(Default)]
struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    fn push(&mut self, keyword: Option<&str>) {
        let Some(keyword) = keyword.filter(|k| !k.is_empty()) else {
            return;
        };
        let lowered = keyword.to_lowercase();
        if !self.keywords.contains(&lowered) {
            self.keywords.push(lowered);
        }
    }

    fn extend(&mut self, keywords: &[String]) {
        for keyword in keywords {
            self.push(Some(keyword.as_str()));
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.keywords
    }
}
