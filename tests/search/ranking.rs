//! Ranking: field weights, stable ties, truncation.

use super::common::{ids, raw, sample_index};
use folio::{build_index, search, search_items, DEFAULT_LIMIT};

#[test]
fn test_name_hit_outranks_keyword_hit() {
    let index = build_index(&raw(
        r#"{"projects": [
            {"id": "b", "name": "Other", "techStack": ["Rust"]},
            {"id": "a", "name": "Rust Tools"}
        ]}"#,
    ));
    let results = search(&index, "rust", DEFAULT_LIMIT);

    assert_eq!(ids(&results), vec!["a", "b"]);
    // name 10 + keyword "rust tools" 5
    assert_eq!(results[0].score, 15);
    assert_eq!(results[1].score, 5);
}

#[test]
fn test_ties_keep_project_blog_tech_order() {
    let index = build_index(&raw(
        r#"{
            "techStack": [{"name": "Ferris", "tags": ["rust"]}],
            "blogs": [{"slug": "y", "techStack": ["Rust"]}],
            "projects": [{"id": "x", "techStack": ["Rust"]}]
        }"#,
    ));
    let results = search(&index, "rust", DEFAULT_LIMIT);

    assert!(results.iter().all(|r| r.score == 5));
    assert_eq!(ids(&results), vec!["x", "y", "ferris"]);
}

#[test]
fn test_ties_keep_input_order_within_kind() {
    let index = build_index(&raw(
        r#"{"projects": [
            {"id": "third", "techStack": ["Go"]},
            {"id": "first", "techStack": ["Go"]},
            {"id": "second", "techStack": ["Go"]}
        ]}"#,
    ));
    let results = search_items(&index.projects, "third first second", DEFAULT_LIMIT);
    // Each project matches only its own id
    assert!(results.iter().all(|r| r.score == results[0].score));
    assert_eq!(ids(&results), vec!["third", "first", "second"]);
}

#[test]
fn test_repeated_tokens_score_again() {
    let index = build_index(&raw(r#"{"projects": [{"id": "a", "name": "Rust Tools"}]}"#));
    let once = search(&index, "rust", DEFAULT_LIMIT)[0].score;
    let twice = search(&index, "rust rust", DEFAULT_LIMIT)[0].score;

    assert_eq!(twice, 2 * once);
    assert_eq!(
        search(&index, "rust rust", DEFAULT_LIMIT)[0].matched_keywords,
        vec!["rust"]
    );
}

#[test]
fn test_content_only_hit_counts_but_is_not_listed() {
    let index = build_index(&raw(
        r#"{"projects": [{"id": "c", "name": "Cli", "purpose": "written in golang"}]}"#,
    ));
    let results = search(&index, "golang", DEFAULT_LIMIT);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 1);
    assert!(results[0].matched_keywords.is_empty());
}

#[test]
fn test_substring_not_word_match() {
    let index = build_index(&raw(r#"{"projects": [{"id": "p", "name": "Reactive Streams"}]}"#));
    // "act" sits inside "reactive"
    assert_eq!(search(&index, "act", DEFAULT_LIMIT).len(), 1);
}

#[test]
fn test_limit_applies_after_ranking() {
    let index = sample_index();
    let all = search(&index, "react", DEFAULT_LIMIT);
    let top2 = search(&index, "react", 2);

    assert!(all.len() > 2);
    assert_eq!(top2.len(), 2);
    assert_eq!(ids(&top2), ids(&all[..2]));
}

#[test]
fn test_scores_descend() {
    let index = sample_index();
    for query in ["react", "typescript monorepo", "portfolio chat", "architecture"] {
        let results = search(&index, query, DEFAULT_LIMIT);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{} not sorted", query);
        }
    }
}
