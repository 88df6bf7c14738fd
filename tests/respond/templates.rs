//! Rendering real search results through each template.

use super::common::{make_blog, make_project, portfolio_index, sample_index};
use folio::{
    classify_intent, respond, search, Intent, IntentType, SearchResult, DEFAULT_LIMIT,
    NO_RESULT_SUGGESTIONS,
};

fn answer(query: &str) -> String {
    let index = sample_index();
    let intent = classify_intent(query);
    let results = search(&index, query, DEFAULT_LIMIT);
    respond(query, &results, &intent)
}

#[test]
fn test_no_results_mentions_query_and_suggestions() {
    let text = answer("quantum knitting");

    assert!(text.contains("quantum knitting"));
    let numbered = text
        .lines()
        .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
        .count();
    assert!(numbered >= 3);
    assert_eq!(numbered, NO_RESULT_SUGGESTIONS.len());
}

#[test]
fn test_project_answer_for_single_hit() {
    let index = portfolio_index();
    let query = "show me the portfolio project";
    let results = search(&index, query, DEFAULT_LIMIT);
    let text = respond(query, &results, &classify_intent(query));

    assert_eq!(
        text,
        "I found 1 project related to your query:\n\n\
         1. Portfolio Site\nA personal portfolio\nTech Stack: React, TypeScript"
    );
}

#[test]
fn test_blog_answer_lists_years() {
    let text = answer("any blog posts on react or monorepos?");

    assert!(text.starts_with("I found "));
    assert!(text.contains("React Patterns I Keep Using (2023)"));
    assert!(text.contains("Scaling Nx Monorepos (2024)"));
}

#[test]
fn test_tech_answer_groups_by_technology() {
    let text = answer("what tools do you use for typescript");

    assert!(text.starts_with("Here are the technologies I use:"));
    assert!(text.contains("TypeScript\nUsed in:"));
}

#[test]
fn test_experience_answer_sections() {
    let text = answer("experience with monorepo architecture");

    assert!(text.starts_with("Based on my portfolio:"));
    assert!(text.contains("Relevant Projects:\n• Nx Workspace: Monorepo tooling"));
    assert!(text.contains("Related Blog Posts:\n• Scaling Nx Monorepos (2024)"));
    assert!(text.ends_with("Feel free to ask me more specific questions about any of these!"));
}

#[test]
fn test_general_answer_groups_kinds() {
    let text = answer("react");

    assert!(text.starts_with("Here's what I found:"));
    assert!(text.contains("Projects:\n• "));
    assert!(text.contains("Techs:\n• React"));
}

#[test]
fn test_no_trailing_whitespace() {
    for query in [
        "quantum knitting",
        "portfolio projects",
        "blog posts",
        "what do you use",
        "experience",
        "react",
    ] {
        let text = answer(query);
        assert_eq!(text, text.trim_end(), "{}", query);
        assert!(!text.is_empty());
    }
}

#[test]
fn test_template_follows_intent_not_results() {
    // A project intent over blog results still uses the project template
    let items = vec![make_blog("b1", "Post", 2024), make_project("p1", "App")];
    let results: Vec<SearchResult<'_>> = items
        .iter()
        .map(|item| SearchResult {
            item,
            score: 1,
            matched_keywords: vec![],
        })
        .collect();
    let text = respond("q", &results, &Intent::new(IntentType::Project, vec![]));

    assert!(text.starts_with("I found 2 projects related to your query:"));
    assert!(text.contains("1. Post\nNotes on Post\nTech Stack: N/A"));
}
