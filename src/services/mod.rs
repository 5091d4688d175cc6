// ABOUTME: Domain service layer bridging the pure engine and the storage seam
// ABOUTME: Protocol-agnostic operations reusable from any transport
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! Domain service layer
//!
//! Orchestration around the pure schedule algorithms: each operation reads
//! through the [`crate::storage::StorageProvider`] seam, applies the engine,
//! and writes results back. Storage failures propagate unchanged; the
//! engine itself never fails.

/// Group template application and post-log skip pruning
pub mod schedule_sync;

/// Streak, eligibility, and upcoming-session read paths plus skip recording
pub mod streaks;
