// ABOUTME: Core data models for the Stride training schedule and streak engine
// ABOUTME: Defines TrainingSlot, SkipRecord, streak summaries, and the slot normalizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Data Models
//!
//! Core data structures shared by the schedule algorithms, the storage seam,
//! and the service layer.
//!
//! ## Design Principles
//!
//! - **Permissive by policy**: client-submitted schedules never hard-fail
//!   validation; malformed slots are coerced to documented defaults
//! - **Serializable**: all models support JSON serialization
//! - **Calendar semantics**: skip records and occurrence matching operate on
//!   UTC calendar days

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::schedule::DEFAULT_SLOT_TIME;
use crate::errors::AppError;

/// Accepted "H:mm" / "HH:mm" shape; anything else normalizes to the default
#[allow(clippy::expect_used)] // Safe: literal pattern, covered by tests
static TIME_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})$").expect("time pattern compiles")
});

// ============================================================================
// Training Slots
// ============================================================================

/// Raw client-submitted slot fields, before normalization
///
/// Absent or non-numeric weekdays and malformed times are coerced rather
/// than rejected, so this shape deserializes from any client payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotInput {
    /// Proposed weekday (0 = Sunday); `None` or NaN defaults to 0
    pub day_of_week: Option<f64>,
    /// Proposed wall-clock time, expected as "HH:mm"
    pub time: Option<String>,
    /// Group that owns this slot, when template-sourced
    pub source_group_id: Option<Uuid>,
}

/// A recurring weekly training commitment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSlot {
    /// Weekday of the commitment, 0 = Sunday through 6 = Saturday
    pub day_of_week: u8,
    /// Wall-clock time stored zero-padded as "HH:mm"
    pub time: String,
    /// Group that placed this slot via template application, if any
    pub source_group_id: Option<Uuid>,
}

impl TrainingSlot {
    /// Normalize raw client input into a canonical slot
    ///
    /// The weekday defaults to 0 when absent or NaN and is clamped into
    /// `[0, 6]`. The time is trimmed and must match `H:mm` or `HH:mm`; the
    /// hour is zero-padded and the minute kept verbatim. Any other shape
    /// yields the fixed default time. Never fails.
    #[must_use]
    pub fn normalized(input: &SlotInput) -> Self {
        let day = input.day_of_week.filter(|d| !d.is_nan()).unwrap_or(0.0);
        Self {
            day_of_week: day.clamp(0.0, 6.0) as u8,
            time: normalize_time(input.time.as_deref().unwrap_or_default()),
            source_group_id: input.source_group_id,
        }
    }

    /// Whether this slot was placed by a group template
    #[must_use]
    pub const fn is_group_sourced(&self) -> bool {
        self.source_group_id.is_some()
    }

    /// The slot's wall-clock time, falling back to the default when the
    /// stored string does not parse as a valid time of day
    #[must_use]
    pub fn wall_time(&self) -> NaiveTime {
        parse_wall_time(&self.time).unwrap_or_else(default_wall_time)
    }
}

/// Normalize a raw time string to zero-padded "HH:mm"
fn normalize_time(raw: &str) -> String {
    let trimmed = raw.trim();
    TIME_FORMAT
        .captures(trimmed)
        .and_then(|caps| {
            let hour = caps.get(1)?.as_str();
            let minute = caps.get(2)?.as_str();
            Some(format!("{hour:0>2}:{minute}"))
        })
        .unwrap_or_else(|| DEFAULT_SLOT_TIME.to_owned())
}

/// Parse "HH:mm" into a wall-clock time, rejecting out-of-range fields
fn parse_wall_time(value: &str) -> Option<NaiveTime> {
    let (hour, minute) = value.split_once(':')?;
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, 0)
}

/// The wall-clock form of [`DEFAULT_SLOT_TIME`]
fn default_wall_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)
}

// ============================================================================
// Training Logs
// ============================================================================

/// A logged training activity, consumed for its timestamp only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingLog {
    /// Owner of the log entry
    pub user_id: Uuid,
    /// Instant the activity was logged
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Skip Records
// ============================================================================

/// An explicit record that a scheduled occurrence was intentionally missed
///
/// Unique per `(user_id, date, day_of_week, scheduled_time)`: the same
/// occurrence cannot be skipped twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRecord {
    /// Owner of the skip
    pub user_id: Uuid,
    /// UTC calendar day of the skipped occurrence
    pub date: NaiveDate,
    /// Weekday of the skipped slot, 0 = Sunday
    pub day_of_week: u8,
    /// Scheduled "HH:mm" time of the skipped slot
    pub scheduled_time: String,
    /// User-supplied reason
    pub reason: String,
}

impl SkipRecord {
    /// The occurrence identity of this skip
    #[must_use]
    pub fn key(&self) -> SkipKey {
        SkipKey {
            date: self.date,
            day_of_week: self.day_of_week,
            scheduled_time: self.scheduled_time.clone(),
        }
    }
}

/// Occurrence identity used as deletion criteria for skip records
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkipKey {
    /// UTC calendar day of the occurrence
    pub date: NaiveDate,
    /// Weekday of the slot, 0 = Sunday
    pub day_of_week: u8,
    /// Scheduled "HH:mm" time of the slot
    pub scheduled_time: String,
}

impl SkipKey {
    /// Whether a stored skip record matches this occurrence identity
    #[must_use]
    pub fn matches(&self, skip: &SkipRecord) -> bool {
        self.date == skip.date
            && self.day_of_week == skip.day_of_week
            && self.scheduled_time == skip.scheduled_time
    }
}

// ============================================================================
// Streaks & Skip Eligibility
// ============================================================================

/// Result of a streak computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive qualifying training days ending at the present day
    pub streak: u32,
    /// Total logs on record for the user, unconditional on the schedule
    pub total_logs: u64,
}

/// Why a skip cannot be recorded today
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipBlocker {
    /// No slot falls on today's weekday
    NoTraining,
    /// A skip already exists for today
    AlreadySkipped,
    /// A log already satisfies one of today's occurrences
    AlreadyLogged,
}

impl Display for SkipBlocker {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkipBlocker {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "no_training" => Ok(Self::NoTraining),
            "already_skipped" => Ok(Self::AlreadySkipped),
            "already_logged" => Ok(Self::AlreadyLogged),
            _ => Err(AppError::invalid_input(format!(
                "Invalid skip blocker: {s}"
            ))),
        }
    }
}

impl SkipBlocker {
    /// Wire string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoTraining => "no_training",
            Self::AlreadySkipped => "already_skipped",
            Self::AlreadyLogged => "already_logged",
        }
    }
}

/// Whether the user may record a skip today, and why not if not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipEligibility {
    /// True when a skip may be recorded right now
    pub can_skip_today: bool,
    /// Populated with the blocking condition when ineligible
    pub reason: Option<SkipBlocker>,
}

impl SkipEligibility {
    /// An eligible result
    #[must_use]
    pub const fn eligible() -> Self {
        Self {
            can_skip_today: true,
            reason: None,
        }
    }

    /// A blocked result with the given reason
    #[must_use]
    pub const fn blocked(reason: SkipBlocker) -> Self {
        Self {
            can_skip_today: false,
            reason: Some(reason),
        }
    }
}
