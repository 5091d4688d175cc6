// ABOUTME: Pure schedule algorithms for the Stride training engine
// ABOUTME: Occurrence generation, window matching, streaks, skip rules, and merge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Schedule Algorithms
//!
//! The algorithmic core of the engine. Every function here is pure and
//! synchronous: `now`, schedules, logs, and skips are parameters, so the
//! whole module is unit-testable without a live database.
//!
//! Two time strategies coexist and must not leak into each other:
//!
//! - occurrence generation, matching, and streaks use **UTC calendar days**,
//!   consistent with how skip records store their date
//! - [`occurrences::next_occurrence_on_or_after`] answers "what's the very
//!   next session" in the **caller's wall clock** for display only

/// Window predicates matching logs and skips against occurrences
pub mod matching;

/// Order-preserving merge of a group template into a member schedule
pub mod merge;

/// Concrete occurrence generation from recurring weekly slots
pub mod occurrences;

/// Today-skip eligibility and redundant-skip pruning
pub mod skips;

/// Consecutive-training-day streak computation
pub mod streak;

pub use matching::{log_satisfies, skip_satisfies};
pub use merge::merge_template;
pub use occurrences::{next_occurrence_on_or_after, next_session, occurrences_within, Occurrence};
pub use skips::{superseded_skip_keys, today_skip_status};
pub use streak::compute_streak;
