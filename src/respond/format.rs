// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small string builders shared by the response templates.

use crate::utils::truncate_chars;

/// Tech stack entries shown per project before eliding.
pub const TECH_STACK_PREVIEW: usize = 3;

/// Project names listed per technology before `(+K more)`.
pub const MAX_TECH_USERS: usize = 3;

/// Description characters kept in experience bullets.
pub const SNIPPET_CHARS: usize = 100;

/// `"1 project"`, `"3 projects"`. Zero is never rendered, so it isn't special-cased.
pub fn count_noun(count: usize, singular: &str) -> String {
    if count > 1 {
        format!("{} {}s", count, singular)
    } else {
        format!("{} {}", count, singular)
    }
}

/// Overflow line, `None` when everything was shown.
pub fn more_note(total: usize, shown: usize, noun: &str, tail: &str) -> Option<String> {
    (total > shown).then(|| format!("...and {} more {}{}", total - shown, noun, tail))
}

/// `"React, TypeScript, Node, ..."`, or `"N/A"` for an empty stack.
pub fn tech_stack_preview(stack: &[String]) -> String {
    if stack.is_empty() {
        return "N/A".to_string();
    }
    let shown = stack
        .iter()
        .take(TECH_STACK_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if stack.len() > TECH_STACK_PREVIEW {
        format!("{}, ...", shown)
    } else {
        shown
    }
}

/// Up to `MAX_TECH_USERS` names, then `(+K more)` for the rest.
pub fn name_list(names: &[&str]) -> String {
    let shown = names
        .iter()
        .take(MAX_TECH_USERS)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() > MAX_TECH_USERS {
        format!("{} (+{} more)", shown, names.len() - MAX_TECH_USERS)
    } else {
        shown
    }
}

/// First 100 characters followed by `...`, always.
pub fn snippet(text: &str) -> String {
    format!("{}...", truncate_chars(text, SNIPPET_CHARS))
}

pub fn bullet(text: &str) -> String {
    format!("• {}", text)
}

/// `"1. first\n2. second"`.
pub fn numbered<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Header line followed by one bullet per entry.
pub fn bullet_section<'a>(header: &str, entries: impl IntoIterator<Item = &'a str>) -> String {
    std::iter::once(header.to_string())
        .chain(entries.into_iter().map(bullet))
        .collect::<Vec<_>>()
        .join("\n")
}
