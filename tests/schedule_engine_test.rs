// ABOUTME: End-to-end tests for the pure schedule engine
// ABOUTME: Exercises normalization, occurrence matching, and streak semantics together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

//! Cross-module tests for the schedule engine: client input flows through
//! the normalizer into occurrence generation, window matching, streaks, and
//! skip pruning without any storage in the loop.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use stride_engine::constants::schedule::DEFAULT_PRUNE_WEEKS;
use stride_engine::models::{SkipRecord, SlotInput, TrainingLog, TrainingSlot};
use stride_engine::schedule::{
    compute_streak, log_satisfies, occurrences_within, superseded_skip_keys, today_skip_status,
};

fn slot(day_of_week: u8, time: &str) -> TrainingSlot {
    TrainingSlot {
        day_of_week,
        time: time.into(),
        source_group_id: None,
    }
}

fn log_at(timestamp: DateTime<Utc>) -> TrainingLog {
    TrainingLog {
        user_id: Uuid::nil(),
        timestamp,
    }
}

// ============================================================================
// Normalization Feeding the Engine
// ============================================================================

#[test]
fn test_malformed_client_slot_still_generates_occurrences() {
    // Out-of-range day clamps to Saturday; bad time defaults to 09:00.
    let normalized = TrainingSlot::normalized(&SlotInput {
        day_of_week: Some(9.0),
        time: Some("9:5".into()),
        source_group_id: None,
    });
    assert_eq!(normalized.day_of_week, 6);
    assert_eq!(normalized.time, "09:00");

    // Saturday 2025-03-08; reference the following Wednesday.
    let reference = Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap();
    let occurrences = occurrences_within(&[normalized], reference, 1);
    assert_eq!(
        occurrences[0].instant,
        Utc.with_ymd_and_hms(2025, 3, 8, 9, 0, 0).unwrap()
    );
}

// ============================================================================
// Match Window Properties
// ============================================================================

#[test]
fn test_match_window_boundaries_for_monday_slot() {
    let occurrence = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    assert!(log_satisfies(occurrence, occurrence));
    assert!(log_satisfies(
        occurrence + Duration::hours(23) + Duration::minutes(59),
        occurrence
    ));
    assert!(!log_satisfies(
        occurrence + Duration::hours(24) + Duration::minutes(1),
        occurrence
    ));
    assert!(!log_satisfies(occurrence - Duration::minutes(1), occurrence));
}

// ============================================================================
// Streak Semantics
// ============================================================================

#[test]
fn test_weekly_streak_of_five_with_gap_on_sixth() {
    // Monday slot; logs cover the 5 most recent Mondays, the 6th is bare.
    let slots = vec![slot(1, "09:00")];
    let now = Utc.with_ymd_and_hms(2025, 3, 31, 20, 0, 0).unwrap(); // Monday
    let mondays = [31, 24, 17, 10, 3];
    let logs: Vec<TrainingLog> = mondays
        .iter()
        .map(|&day| log_at(Utc.with_ymd_and_hms(2025, 3, day, 9, 5, 0).unwrap()))
        .collect();

    let summary = compute_streak(&slots, &logs, &[], now);
    assert_eq!(summary.streak, 5);
    assert_eq!(summary.total_logs, 5);
}

#[test]
fn test_streak_zero_without_slots_still_counts_logs() {
    let now = Utc.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap();
    let logs: Vec<TrainingLog> = (1..=7)
        .map(|day| log_at(Utc.with_ymd_and_hms(2025, 3, day, 8, 0, 0).unwrap()))
        .collect();

    let summary = compute_streak(&[], &logs, &[], now);
    assert_eq!(summary.streak, 0);
    assert_eq!(summary.total_logs, 7);
}

#[test]
fn test_mixed_logs_and_skips_form_one_streak() {
    // Mon/Wed/Fri schedule: Friday logged, Wednesday skipped, Monday logged.
    let slots = vec![slot(1, "06:30"), slot(3, "06:30"), slot(5, "06:30")];
    let now = Utc.with_ymd_and_hms(2025, 3, 14, 22, 0, 0).unwrap(); // Friday
    let logs = vec![
        log_at(Utc.with_ymd_and_hms(2025, 3, 14, 7, 0, 0).unwrap()),
        log_at(Utc.with_ymd_and_hms(2025, 3, 10, 6, 45, 0).unwrap()),
    ];
    let skips = vec![SkipRecord {
        user_id: Uuid::nil(),
        date: NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(),
        day_of_week: 3,
        scheduled_time: "06:30".into(),
        reason: "sore".into(),
    }];

    let summary = compute_streak(&slots, &logs, &skips, now);
    assert_eq!(summary.streak, 3);
}

// ============================================================================
// Pruning Interplay
// ============================================================================

#[test]
fn test_pruned_skip_is_replaced_by_the_log_in_the_streak() {
    // A skip covers Monday; then a real log lands inside Monday's window.
    let slots = vec![slot(1, "09:00")];
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
    let log_instant = Utc.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();

    let keys = superseded_skip_keys(log_instant, &slots, DEFAULT_PRUNE_WEEKS);
    assert_eq!(keys.len(), 1);

    // After pruning, the log alone keeps the day satisfied.
    let summary = compute_streak(&slots, &[log_at(log_instant)], &[], now);
    assert_eq!(summary.streak, 1);
}

#[test]
fn test_unrelated_log_supersedes_nothing() {
    // Wednesday log cannot supersede Monday's skip.
    let slots = vec![slot(1, "09:00"), slot(3, "18:00")];
    let log_instant = Utc.with_ymd_and_hms(2025, 3, 12, 18, 30, 0).unwrap();

    let keys = superseded_skip_keys(log_instant, &slots, DEFAULT_PRUNE_WEEKS);
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].day_of_week, 3);
}

// ============================================================================
// Eligibility Ordering
// ============================================================================

#[test]
fn test_skip_check_precedes_log_check() {
    let slots = vec![slot(1, "09:00")];
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
    let skips = vec![SkipRecord {
        user_id: Uuid::nil(),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        day_of_week: 1,
        scheduled_time: "09:00".into(),
        reason: "travel".into(),
    }];
    let logs = vec![log_at(Utc.with_ymd_and_hms(2025, 3, 10, 9, 30, 0).unwrap())];

    let status = today_skip_status(&slots, &skips, &logs, now);
    assert_eq!(
        status.reason.map(|blocker| blocker.as_str()),
        Some("already_skipped")
    );
}
