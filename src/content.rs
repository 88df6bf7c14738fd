// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading raw content JSON.
//!
//! The input is the site's combined data file: an object with optional
//! `projects`, `blogs`, and `techStack` arrays. A path of `-` reads stdin.

use std::io::Read;
use std::path::Path;

use crate::error::{FolioError, Result};
use crate::index::RawContent;

/// Load content from `path`, or from stdin when `path` is `-`.
pub fn load_content(path: &Path) -> Result<RawContent> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| FolioError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| FolioError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(path = %path.display(), bytes = text.len(), "read content");
    parse_content(&text)
}

/// Parse content JSON. Blank input is an error rather than an empty index.
pub fn parse_content(text: &str) -> Result<RawContent> {
    if text.trim().is_empty() {
        return Err(FolioError::EmptyContent);
    }
    Ok(serde_json::from_str(text)?)
}
