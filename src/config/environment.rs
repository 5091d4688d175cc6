// ABOUTME: Environment-based configuration for engine horizons and windows
// ABOUTME: Parses env vars with silent fallback to the documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Engine Configuration
//!
//! Deployment-tunable engine horizons. Every value falls back to the
//! defaults in [`crate::constants::schedule`] when the variable is absent or
//! unparseable; configuration loading never fails.

use crate::constants::schedule;
use std::env;
use tracing::debug;

/// Tunable horizons for the schedule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Trailing weeks expanded when building a user's occurrence history
    pub occurrence_horizon_weeks: u32,
    /// Trailing weeks inspected when pruning skips superseded by a new log
    pub prune_lookback_weeks: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            occurrence_horizon_weeks: schedule::DEFAULT_OCCURRENCE_WEEKS,
            prune_lookback_weeks: schedule::DEFAULT_PRUNE_WEEKS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `STRIDE_OCCURRENCE_WEEKS` and `STRIDE_PRUNE_WEEKS`.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            occurrence_horizon_weeks: parse_or_default(
                env::var("STRIDE_OCCURRENCE_WEEKS").ok(),
                schedule::DEFAULT_OCCURRENCE_WEEKS,
            ),
            prune_lookback_weeks: parse_or_default(
                env::var("STRIDE_PRUNE_WEEKS").ok(),
                schedule::DEFAULT_PRUNE_WEEKS,
            ),
        };
        debug!(
            occurrence.weeks = config.occurrence_horizon_weeks,
            prune.weeks = config.prune_lookback_weeks,
            "Engine configuration loaded"
        );
        config
    }
}

/// Parse an optional env value, falling back to the default on any failure
fn parse_or_default(value: Option<String>, default: u32) -> u32 {
    value
        .as_deref()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
