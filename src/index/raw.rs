// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw content records as they arrive from the site's data files.
//!
//! Nothing here is trusted to be complete or well typed. Every field is
//! optional, `null` is the same as missing, and unknown fields are ignored.
//! A mistyped field degrades to "absent" instead of failing the whole file:
//!
//! | Field kind   | Accepted                           | Anything else     |
//! |--------------|------------------------------------|-------------------|
//! | text         | string, number (`7` becomes `"7"`) | `None`            |
//! | list of text | array; non-string entries skipped  | empty list        |
//! | `year`       | whole non-negative number, numeric string | `None`     |
//!
//! The tech collection may be keyed `techStack` or `tech`; when both are
//! present `techStack` wins.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// The three collections the indexer understands. Any of them may be absent.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", from = "ContentFields")]
pub struct RawContent {
    pub projects: Option<Vec<RawProject>>,
    pub blogs: Option<Vec<RawBlog>>,
    pub tech_stack: Option<Vec<RawTech>>,
}

/// Wire shape of `RawContent`, with both spellings of the tech collection.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ContentFields {
    projects: Option<Vec<RawProject>>,
    blogs: Option<Vec<RawBlog>>,
    tech_stack: Option<Vec<RawTech>>,
    tech: Option<Vec<RawTech>>,
}

impl From<ContentFields> for RawContent {
    fn from(fields: ContentFields) -> Self {
        Self {
            projects: fields.projects,
            blogs: fields.blogs,
            tech_stack: fields.tech_stack.or(fields.tech),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProject {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub short_desc: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub purpose: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub tech_stack: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub features: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBlog {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub tech_stack: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_year")]
    pub year: Option<u32>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTech {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub tags: Vec<String>,
}

/// Any JSON value, sorted into the shapes the loaders care about.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> Option<String> {
        match self {
            Scalar::Text(text) => Some(text),
            Scalar::Signed(n) => Some(n.to_string()),
            Scalar::Unsigned(n) => Some(n.to_string()),
            Scalar::Float(n) => Some(n.to_string()),
            Scalar::Other(_) => None,
        }
    }

    fn into_year(self) -> Option<u32> {
        match self {
            Scalar::Text(text) => text.trim().parse().ok(),
            Scalar::Signed(n) => u32::try_from(n).ok(),
            Scalar::Unsigned(n) => u32::try_from(n).ok(),
            Scalar::Float(n) if n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n) => {
                Some(n as u32)
            }
            Scalar::Float(_) | Scalar::Other(_) => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListValue {
    List(Vec<Scalar>),
    Other(IgnoredAny),
}

/// A string or a number, as text. Booleans, objects, and arrays become `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::into_text))
}

/// An array of strings. Non-string entries are skipped; a non-array is empty.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<ListValue> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(ListValue::List(entries)) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                Scalar::Text(text) => Some(text),
                _ => None,
            })
            .collect(),
        Some(ListValue::Other(_)) | None => Vec::new(),
    })
}

/// `2024`, `2024.0`, or `"2024"`. Negative, fractional, or non-numeric years
/// become `None`.
fn lenient_year<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value.and_then(Scalar::into_year))
}
