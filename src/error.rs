// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading portfolio content.
//!
//! Indexing, searching, and rendering never fail; only reading content off
//! disk or stdin does.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content input is empty")]
    EmptyContent,
}

pub type Result<T> = std::result::Result<T, FolioError>;
