// ABOUTME: Window predicates deciding whether logs and skips satisfy occurrences
// ABOUTME: A log counts inside a 24-hour window; a skip matches by UTC calendar day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Match Window
//!
//! The two predicates every higher-level decision is built on. A log
//! satisfies an occurrence only inside the 24-hour window starting at the
//! occurrence: logging ahead of schedule never counts, and neither does
//! logging more than a day late. A skip matches on the occurrence's UTC
//! calendar date plus the slot identity it recorded.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::constants::schedule::MATCH_WINDOW_HOURS;
use crate::models::SkipRecord;

/// Whether a logged activity satisfies the given occurrence
#[must_use]
pub fn log_satisfies(log_instant: DateTime<Utc>, occurrence_instant: DateTime<Utc>) -> bool {
    log_instant >= occurrence_instant
        && log_instant <= occurrence_instant + Duration::hours(MATCH_WINDOW_HOURS)
}

/// Whether a stored skip record satisfies an occurrence of the given slot
#[must_use]
pub fn skip_satisfies(
    skip: &SkipRecord,
    occurrence_date: NaiveDate,
    day_of_week: u8,
    scheduled_time: &str,
) -> bool {
    skip.date == occurrence_date
        && skip.day_of_week == day_of_week
        && skip.scheduled_time == scheduled_time
}
