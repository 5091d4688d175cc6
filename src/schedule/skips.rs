// ABOUTME: Today-skip eligibility rules and redundant-skip pruning
// ABOUTME: Ordered eligibility checks plus the 2-week supersession window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Skip Rules
//!
//! Two decisions about skip records. Eligibility runs its checks in a fixed
//! order: no training today, already skipped (regardless of any log),
//! already logged, else eligible. Pruning finds skip records that a newly
//! created log supersedes, looking only at occurrences inside the trailing
//! prune window of the log's timestamp.

use chrono::{DateTime, Datelike, Utc};

use crate::models::{SkipBlocker, SkipEligibility, SkipKey, SkipRecord, TrainingLog, TrainingSlot};
use crate::schedule::matching::log_satisfies;
use crate::schedule::occurrences::occurrences_within;

/// Decide whether the user may record a skip for today
///
/// The check order is significant: an existing skip blocks before any log
/// is considered, regardless of which was created first.
#[must_use]
pub fn today_skip_status(
    slots: &[TrainingSlot],
    skips: &[SkipRecord],
    logs: &[TrainingLog],
    now: DateTime<Utc>,
) -> SkipEligibility {
    let today = now.date_naive();
    let weekday = today.weekday().num_days_from_sunday() as u8;

    let todays_slots: Vec<&TrainingSlot> = slots
        .iter()
        .filter(|slot| slot.day_of_week == weekday)
        .collect();
    if todays_slots.is_empty() {
        return SkipEligibility::blocked(SkipBlocker::NoTraining);
    }

    // Any scheduled time counts: one skip per day is the product rule.
    if skips
        .iter()
        .any(|skip| skip.date == today && skip.day_of_week == weekday)
    {
        return SkipEligibility::blocked(SkipBlocker::AlreadySkipped);
    }

    for slot in todays_slots {
        let occurrence = today.and_time(slot.wall_time()).and_utc();
        if occurrence > now {
            continue;
        }
        if logs
            .iter()
            .any(|log| log_satisfies(log.timestamp, occurrence))
        {
            return SkipEligibility::blocked(SkipBlocker::AlreadyLogged);
        }
    }

    SkipEligibility::eligible()
}

/// Skip keys superseded by a newly created log
///
/// A skip is superseded only when the new log actually falls in the skipped
/// occurrence's 24-hour window; a later unrelated log leaves it in place.
/// Deletion itself is the storage layer's job.
#[must_use]
pub fn superseded_skip_keys(
    log_instant: DateTime<Utc>,
    slots: &[TrainingSlot],
    lookback_weeks: u32,
) -> Vec<SkipKey> {
    let mut keys: Vec<SkipKey> = Vec::new();
    for occurrence in occurrences_within(slots, log_instant, lookback_weeks) {
        if log_satisfies(log_instant, occurrence.instant) {
            let key = SkipKey {
                date: occurrence.instant.date_naive(),
                day_of_week: occurrence.day_of_week,
                scheduled_time: occurrence.time,
            };
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys
}
