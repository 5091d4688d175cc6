// ABOUTME: Consecutive-training-day streak computation over logs and skips
// ABOUTME: Walks backward from now with day-level OR semantics across slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Streak Counter
//!
//! Counts consecutive training **days**, not slots: a day with several slots
//! qualifies as soon as any one of them is satisfied by a log or a skip.
//! Weekdays with no scheduled slot neither break nor extend the streak.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};

use crate::constants::schedule::STREAK_LOOKBACK_DAYS;
use crate::models::{SkipRecord, StreakSummary, TrainingLog, TrainingSlot};
use crate::schedule::matching::{log_satisfies, skip_satisfies};

/// Compute the consecutive-training-day streak ending at `now`
///
/// Walks backward one UTC calendar day at a time, up to a year. Each
/// training day is a hit when any of its slots with a non-future occurrence
/// is satisfied by some log or some skip; the first miss stops the walk.
/// The current day is walked past without breaking while all of its
/// occurrences are still ahead of `now`.
#[must_use]
pub fn compute_streak(
    slots: &[TrainingSlot],
    logs: &[TrainingLog],
    skips: &[SkipRecord],
    now: DateTime<Utc>,
) -> StreakSummary {
    let total_logs = logs.len() as u64;
    if slots.is_empty() {
        return StreakSummary {
            streak: 0,
            total_logs,
        };
    }

    let training_days: HashSet<u8> = slots.iter().map(|slot| slot.day_of_week).collect();

    let mut streak = 0;
    let mut day = now.date_naive();

    for _ in 0..STREAK_LOOKBACK_DAYS {
        let weekday = day.weekday().num_days_from_sunday() as u8;
        if training_days.contains(&weekday) {
            let mut evaluable = false;
            let mut hit = false;

            for slot in slots.iter().filter(|slot| slot.day_of_week == weekday) {
                let occurrence = day.and_time(slot.wall_time()).and_utc();
                if occurrence > now {
                    continue;
                }
                evaluable = true;
                if logs
                    .iter()
                    .any(|log| log_satisfies(log.timestamp, occurrence))
                    || skips
                        .iter()
                        .any(|skip| skip_satisfies(skip, day, slot.day_of_week, &slot.time))
                {
                    hit = true;
                    break;
                }
            }

            if hit {
                streak += 1;
            } else if evaluable {
                break;
            }
            // A training day whose every occurrence is still ahead of `now`
            // (only possible today) is not yet evaluable and is walked past.
        }

        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }

    StreakSummary { streak, total_logs }
}
