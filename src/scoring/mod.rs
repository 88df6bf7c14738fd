// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Each query token is checked against four fields of an item with fixed
//! weights, and the weights simply add up. Ranking is a stable sort on the
//! total, so equal scores keep the order the index listed them in.

mod core;
pub mod ranking;

pub use self::core::*;
