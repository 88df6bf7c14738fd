// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Response templates: turn ranked results into a chat answer.
//!
//! One template per intent. Each builds a list of paragraphs and joins them
//! with blank lines, so nothing ends in stray whitespace. The results are
//! rendered in the order given; templates filter and truncate, they never
//! re-rank.

mod format;

use crate::types::{Intent, IntentType, ItemKind, SearchResult};
use format::{
    bullet, bullet_section, count_noun, more_note, name_list, numbered, snippet,
    tech_stack_preview,
};

/// Results rendered in full by the project, blog, and general templates.
pub const MAX_LISTED_RESULTS: usize = 5;

/// Distinct technologies listed by the tech template.
pub const MAX_LISTED_TECHS: usize = 10;

const MAX_EXPERIENCE_PROJECTS: usize = 3;
const MAX_EXPERIENCE_BLOGS: usize = 2;

/// Offered when nothing matched.
pub const NO_RESULT_SUGGESTIONS: [&str; 4] = [
    "Try asking about specific projects (e.g., 'What projects use React?')",
    "Ask about my tech stack (e.g., 'What technologies do you use?')",
    "Explore my blog posts (e.g., 'Show me your latest blog posts')",
    "Learn about my experience (e.g., 'What experience do you have with Nx?')",
];

/// Render the answer for `query`.
///
/// Empty `results` always produce the apology, whatever the intent.
pub fn respond(query: &str, results: &[SearchResult<'_>], intent: &Intent) -> String {
    let paragraphs = if results.is_empty() {
        no_results(query)
    } else {
        match intent.kind {
            IntentType::Project => projects(results),
            IntentType::Blog => blogs(results),
            IntentType::Tech => technologies(results),
            IntentType::Experience => experience(results),
            IntentType::General => general(results),
        }
    };
    paragraphs.join("\n\n")
}

fn no_results(query: &str) -> Vec<String> {
    vec![
        format!(
            "I couldn't find anything specifically matching \"{}\".",
            query
        ),
        format!("Here are some suggestions:\n{}", numbered(&NO_RESULT_SUGGESTIONS[..])),
        "Feel free to ask me anything about my work!".to_string(),
    ]
}

fn projects(results: &[SearchResult<'_>]) -> Vec<String> {
    let mut out = vec![format!(
        "I found {} related to your query:",
        count_noun(results.len(), "project")
    )];

    out.extend(
        results
            .iter()
            .take(MAX_LISTED_RESULTS)
            .enumerate()
            .map(|(i, r)| {
                format!(
                    "{}. {}\n{}\nTech Stack: {}",
                    i + 1,
                    r.item.name,
                    r.item.description,
                    tech_stack_preview(r.item.tech_stack())
                )
            }),
    );

    out.extend(more_note(
        results.len(),
        MAX_LISTED_RESULTS,
        "projects",
        ". You can view all projects in the Projects page!",
    ));
    out
}

fn blogs(results: &[SearchResult<'_>]) -> Vec<String> {
    let mut out = vec![format!(
        "I found {} that might interest you:",
        count_noun(results.len(), "blog post")
    )];

    out.extend(
        results
            .iter()
            .take(MAX_LISTED_RESULTS)
            .enumerate()
            .map(|(i, r)| {
                let year = r
                    .item
                    .metadata
                    .year
                    .map_or_else(|| "Unknown".to_string(), |y| y.to_string());
                format!("{}. {} ({})\n{}", i + 1, r.item.name, year, r.item.description)
            }),
    );

    out.extend(more_note(
        results.len(),
        MAX_LISTED_RESULTS,
        "blog posts",
        ". Check out the Blogs page to read them all!",
    ));
    out
}

fn technologies(results: &[SearchResult<'_>]) -> Vec<String> {
    // Each technology with the names of the results that list it, first-seen order
    let mut usage: Vec<(&str, Vec<&str>)> = Vec::new();
    for r in results {
        for tech in r.item.tech_stack() {
            match usage.iter_mut().find(|(name, _)| *name == tech.as_str()) {
                Some((_, users)) => users.push(r.item.name.as_str()),
                None => usage.push((tech.as_str(), vec![r.item.name.as_str()])),
            }
        }
    }

    let mut out = vec!["Here are the technologies I use:".to_string()];
    out.extend(
        usage
            .iter()
            .take(MAX_LISTED_TECHS)
            .map(|(tech, users)| format!("{}\nUsed in: {}", tech, name_list(users))),
    );
    out.extend(more_note(usage.len(), MAX_LISTED_TECHS, "technologies", "!"));
    out
}

fn experience(results: &[SearchResult<'_>]) -> Vec<String> {
    let projects: Vec<_> = of_kind(results, ItemKind::Project)
        .take(MAX_EXPERIENCE_PROJECTS)
        .collect();
    let blogs: Vec<_> = of_kind(results, ItemKind::Blog)
        .take(MAX_EXPERIENCE_BLOGS)
        .collect();

    let mut out = vec!["Based on my portfolio:".to_string()];

    if !projects.is_empty() {
        let lines = projects
            .iter()
            .map(|r| bullet(&format!("{}: {}", r.item.name, snippet(&r.item.description))));
        out.push(
            std::iter::once("Relevant Projects:".to_string())
                .chain(lines)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if !blogs.is_empty() {
        let lines = blogs.iter().map(|r| {
            let year = r.item.metadata.year.map(|y| y.to_string()).unwrap_or_default();
            bullet(&format!("{} ({})", r.item.name, year))
        });
        out.push(
            std::iter::once("Related Blog Posts:".to_string())
                .chain(lines)
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    out.push("Feel free to ask me more specific questions about any of these!".to_string());
    out
}

fn general(results: &[SearchResult<'_>]) -> Vec<String> {
    // Group the top results by kind, groups in order of first appearance
    let mut groups: Vec<(ItemKind, Vec<&str>)> = Vec::new();
    for r in results.iter().take(MAX_LISTED_RESULTS) {
        match groups.iter_mut().find(|(kind, _)| *kind == r.item.kind) {
            Some((_, names)) => names.push(r.item.name.as_str()),
            None => groups.push((r.item.kind, vec![r.item.name.as_str()])),
        }
    }

    let mut out = vec!["Here's what I found:".to_string()];
    out.extend(groups.into_iter().map(|(kind, names)| {
        bullet_section(&format!("{}s:", kind.label()), names)
    }));
    out
}

fn of_kind<'r, 'a>(
    results: &'r [SearchResult<'a>],
    kind: ItemKind,
) -> impl Iterator<Item = &'r SearchResult<'a>> {
    results.iter().filter(move |r| r.item.kind == kind)
}
