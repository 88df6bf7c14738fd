//! Index construction from raw JSON.

use super::common::{raw, sample_content};
use folio::{build_index, ItemKind};

#[test]
fn test_tolerant_parsing() {
    let content = raw(
        r#"{
            "projects": [{"id": "p1", "name": null, "techStack": null, "extra": 42}],
            "blogs": [{"slug": "s", "title": "T", "year": "2021", "tags": ["a", null, "b"]}],
            "tech": [{"name": "Rust"}],
            "unknownCollection": []
        }"#,
    );
    let index = build_index(&content);

    assert_eq!(index.projects[0].name, "p1");
    assert!(index.projects[0].tech_stack().is_empty());
    assert_eq!(index.blogs[0].metadata.year, Some(2021));
    assert_eq!(index.blogs[0].keywords, vec!["t", "s", "a", "b", "2021"]);
    assert_eq!(index.tech[0].id, "rust");
}

#[test]
fn test_unparseable_year_is_dropped() {
    let index = build_index(&raw(r#"{"blogs": [{"title": "Old", "year": "long ago"}]}"#));
    assert_eq!(index.blogs[0].metadata.year, None);
    assert_eq!(index.blogs[0].keywords, vec!["old"]);
}

#[test]
fn test_items_land_in_their_collection() {
    let index = build_index(&sample_content());

    assert!(index.projects.iter().all(|i| i.kind == ItemKind::Project));
    assert!(index.blogs.iter().all(|i| i.kind == ItemKind::Blog));
    assert!(index.tech.iter().all(|i| i.kind == ItemKind::Tech));
    assert_eq!(index.items().count(), index.len());
}

#[test]
fn test_keywords_are_lowercase_and_unique() {
    let index = build_index(&sample_content());
    for item in index.items() {
        for (i, keyword) in item.keywords.iter().enumerate() {
            assert!(!keyword.is_empty());
            assert_eq!(keyword, &keyword.to_lowercase());
            assert!(!item.keywords[..i].contains(keyword), "{} repeated", keyword);
        }
    }
}

#[test]
fn test_rebuild_is_identical() {
    let content = sample_content();
    let first = build_index(&content);
    let second = build_index(&content);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_serialized_item_shape() {
    let index = build_index(&raw(
        r#"{"projects": [{"id": "p1", "name": "Site", "techStack": ["React"]}]}"#,
    ));
    let json = serde_json::to_value(&index.projects[0]).unwrap();

    assert_eq!(json["type"], "project");
    assert_eq!(json["metadata"]["techStack"][0], "React");
    assert_eq!(json["metadata"]["url"], "/projects/p1");
    assert!(json["metadata"].get("year").is_none());
}

#[test]
fn test_numeric_id_becomes_text() {
    let index = build_index(&raw(
        r#"{"blogs": [{"id": 7, "slug": "seventh", "title": "Seventh Post"}]}"#,
    ));
    assert_eq!(index.blogs[0].id, "7");
    assert_eq!(index.blogs[0].metadata.url.as_deref(), Some("/blogs/seventh"));
}

#[test]
fn test_non_string_list_entries_are_skipped() {
    let index = build_index(&raw(
        r#"{
            "projects": [{"id": "p1", "techStack": ["React", 5, {"name": "Vue"}], "features": [true]}],
            "blogs": [{"title": "T", "tags": ["rust", 2024]}]
        }"#,
    ));
    assert_eq!(index.projects[0].tech_stack().to_vec(), vec!["React".to_string()]);
    assert_eq!(index.blogs[0].keywords, vec!["t", "rust"]);
}

#[test]
fn test_year_accepts_whole_numbers_only() {
    let index = build_index(&raw(
        r#"{"blogs": [
            {"title": "A", "year": 2024.0},
            {"title": "B", "year": -1},
            {"title": "C", "year": 2024.5},
            {"title": "D", "year": true}
        ]}"#,
    ));
    let years: Vec<_> = index.blogs.iter().map(|b| b.metadata.year).collect();
    assert_eq!(years, vec![Some(2024), None, None, None]);
}

#[test]
fn test_mistyped_text_field_is_missing() {
    let index = build_index(&raw(
        r#"{"projects": [{"id": "p1", "name": {"en": "Site"}, "description": false}]}"#,
    ));
    assert_eq!(index.projects[0].name, "p1");
    assert_eq!(index.projects[0].description, "");
}

#[test]
fn test_both_tech_keys_prefer_tech_stack() {
    let index = build_index(&raw(
        r#"{"techStack": [{"name": "Rust"}], "tech": [{"name": "Go"}]}"#,
    ));
    let names: Vec<_> = index.tech.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Rust"]);
}

#[test]
fn test_one_bad_field_keeps_the_rest() {
    let index = build_index(&raw(
        r#"{
            "projects": [{"id": "p1", "name": "Site"}, {"id": 2, "name": "Other"}],
            "blogs": [{"title": "Good", "year": 2020}, {"title": "Odd", "year": "n/a", "tags": "rust"}],
            "techStack": [{"name": "Rust", "tags": [1, 2]}]
        }"#,
    ));
    assert_eq!(index.projects.len(), 2);
    assert_eq!(index.projects[1].id, "2");
    assert_eq!(index.blogs.len(), 2);
    assert_eq!(index.blogs[0].metadata.year, Some(2020));
    assert_eq!(index.tech.len(), 1);
}
