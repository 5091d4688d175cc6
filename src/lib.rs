// ABOUTME: Main library entry point for the Stride training schedule and streak engine
// ABOUTME: Exposes the schedule algorithms, storage seam, and domain service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

#![deny(unsafe_code)]

//! # Stride Training Engine
//!
//! The schedule and streak engine of the Stride training log. It turns a
//! user's recurring weekly training commitments into concrete occurrences,
//! matches logged activity and explicit skip records against them, counts a
//! consecutive-training-day streak, decides whether a skip may be recorded
//! today, prunes skips superseded by a new log, and merges a coach's group
//! template into member schedules.
//!
//! ## Architecture
//!
//! - **Models**: slot, log, and skip data structures plus the permissive
//!   slot normalizer
//! - **Schedule**: the pure algorithmic core (occurrences, matching,
//!   streaks, skip rules, template merge)
//! - **Storage**: the async persistence seam ([`storage::StorageProvider`])
//!   with an in-memory reference backend
//! - **Services**: orchestration that reads through the storage seam and
//!   applies the engine, reusable from any transport
//!
//! All engine functions are pure: `now` and every data collection are
//! injected by the caller, never read from ambient clocks or handles.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use stride_engine::models::{SlotInput, TrainingSlot};
//! use stride_engine::schedule::streak::compute_streak;
//!
//! let slot = TrainingSlot::normalized(&SlotInput {
//!     day_of_week: Some(1.0),
//!     time: Some("18:30".into()),
//!     source_group_id: None,
//! });
//! let summary = compute_streak(&[slot], &[], &[], Utc::now());
//! assert_eq!(summary.streak, 0);
//! ```

/// Engine configuration loaded from the environment
pub mod config;

/// Engine constants and default values
pub mod constants;

/// Unified error handling: error codes, `AppError`, and `AppResult`
pub mod errors;

/// Structured logging configuration built on `tracing`
pub mod logging;

/// Core data models and the permissive slot normalizer
pub mod models;

/// The pure schedule algorithms: occurrences, matching, streaks, skips, merge
pub mod schedule;

/// Domain service layer bridging the engine and the storage seam
pub mod services;

/// Async storage provider trait and the in-memory reference backend
pub mod storage;
