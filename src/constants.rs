// ABOUTME: Engine-wide constants and default values for the Stride training engine
// ABOUTME: Match window, lookback horizons, and the default slot time live here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Constants Module
//!
//! Hardcoded engine limits and defaults. Values that admit deployment-time
//! tuning have environment-variable counterparts in [`crate::config`].

/// Service identifiers used in structured logging
pub mod service_names {
    /// Canonical service name for log records
    pub const STRIDE_ENGINE: &str = "stride-engine";
}

/// Schedule and streak engine limits
pub mod schedule {
    /// Wall-clock time a malformed slot time normalizes to
    pub const DEFAULT_SLOT_TIME: &str = "09:00";

    /// Hours after an occurrence during which a log still satisfies it
    pub const MATCH_WINDOW_HOURS: i64 = 24;

    /// Default number of trailing weeks expanded by the occurrence generator
    pub const DEFAULT_OCCURRENCE_WEEKS: u32 = 52;

    /// Trailing weeks inspected when pruning skips superseded by a new log
    pub const DEFAULT_PRUNE_WEEKS: u32 = 2;

    /// Maximum calendar days the streak walk looks back from `now`
    pub const STREAK_LOOKBACK_DAYS: u32 = 365;

    /// Days in a week, used for weekday roll-over arithmetic
    pub const DAYS_PER_WEEK: u8 = 7;
}
