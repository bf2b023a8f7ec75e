// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how lines get their numbers and their order.
//!
//! A line's score is the sum over query terms of raw TF times plain IDF. The
//! order is descending score, with earlier lines winning ties.

mod core;
pub mod ranking;

pub use core::*;
