// ABOUTME: Async storage abstraction for the Stride training engine
// ABOUTME: Trait-based seam over user schedules, logs, skips, and group templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Storage Seam
//!
//! The engine owns no persistence. This trait is the narrow interface the
//! surrounding product implements over its document store; the engine and
//! service layer consume it and propagate its failures unchanged. An
//! in-memory implementation backs the test suite.

use anyhow::Result;
use async_trait::async_trait;
use futures_util::stream::BoxStream;
use uuid::Uuid;

use crate::models::{SkipKey, SkipRecord, TrainingLog, TrainingSlot};

/// In-memory reference implementation
pub mod memory;

pub use memory::MemoryStorage;

/// Transformation applied to the latest persisted slot list inside an
/// atomic update
pub type SlotUpdate<'a> = &'a (dyn Fn(Vec<TrainingSlot>) -> Vec<TrainingSlot> + Send + Sync);

/// Core storage abstraction trait
///
/// All storage implementations must implement this trait to provide a
/// consistent interface for the engine's service layer.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    // ================================
    // Training Schedules
    // ================================

    /// Get a user's ordered training slot list
    async fn get_user_training_slots(&self, user_id: Uuid) -> Result<Vec<TrainingSlot>>;

    /// Replace a user's training slot list
    async fn set_user_training_slots(&self, user_id: Uuid, slots: &[TrainingSlot]) -> Result<()>;

    /// Atomically transform a user's slot list
    ///
    /// The closure must be applied against the latest persisted state as a
    /// single read-modify-write (conditional update or transaction), so a
    /// concurrent edit of unrelated slots is never lost.
    async fn update_user_training_slots(
        &self,
        user_id: Uuid,
        apply: SlotUpdate<'_>,
    ) -> Result<()>;

    // ================================
    // Activity Logs & Skip Records
    // ================================

    /// List all training logs for a user
    async fn list_logs_for_user(&self, user_id: Uuid) -> Result<Vec<TrainingLog>>;

    /// List all skip records for a user
    async fn list_skips_for_user(&self, user_id: Uuid) -> Result<Vec<SkipRecord>>;

    /// Insert a skip record unless one already exists for the same
    /// occurrence; returns whether a record was stored
    async fn insert_skip(&self, skip: &SkipRecord) -> Result<bool>;

    /// Delete a user's skip records matching any of the given keys;
    /// returns how many were removed
    async fn delete_skips(&self, user_id: Uuid, keys: &[SkipKey]) -> Result<u64>;

    // ================================
    // Groups
    // ================================

    /// Stream the members of a group, one user id at a time
    ///
    /// A cursor rather than a loaded list: group-wide operations iterate
    /// sequentially and keep one member in memory at a time.
    fn iterate_group_members(&self, group_id: Uuid) -> BoxStream<'_, Result<Uuid>>;

    /// Get a group's training template
    async fn get_group_template(&self, group_id: Uuid) -> Result<Vec<TrainingSlot>>;

    /// Replace a group's training template
    async fn set_group_template(&self, group_id: Uuid, template: &[TrainingSlot]) -> Result<()>;
}
