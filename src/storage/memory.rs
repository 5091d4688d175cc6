// ABOUTME: In-memory storage provider backing tests and local development
// ABOUTME: DashMap-based implementation with per-entry atomic slot updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! In-memory [`StorageProvider`] implementation
//!
//! Backs the integration test suite and doubles as executable documentation
//! of the seam's contracts: skip uniqueness is enforced on insert, and slot
//! updates run under the entry's lock so the closure always sees the latest
//! state.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use futures_util::stream::{self, BoxStream, StreamExt};
use uuid::Uuid;

use crate::models::{SkipKey, SkipRecord, TrainingLog, TrainingSlot};
use crate::storage::{SlotUpdate, StorageProvider};

/// In-memory storage over concurrent maps; cheap to clone and share
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: Arc<DashMap<Uuid, Vec<TrainingSlot>>>,
    logs: Arc<DashMap<Uuid, Vec<TrainingLog>>>,
    skips: Arc<DashMap<Uuid, Vec<SkipRecord>>>,
    templates: Arc<DashMap<Uuid, Vec<TrainingSlot>>>,
    members: Arc<DashMap<Uuid, Vec<Uuid>>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a training log for a user
    ///
    /// Log creation is owned by the surrounding product; this inherent
    /// method exists so tests can seed activity history.
    pub fn insert_log(&self, log: TrainingLog) {
        self.logs.entry(log.user_id).or_default().push(log);
    }

    /// Register a user as a member of a group
    pub fn add_group_member(&self, group_id: Uuid, user_id: Uuid) {
        self.members.entry(group_id).or_default().push(user_id);
    }
}

#[async_trait]
impl StorageProvider for MemoryStorage {
    async fn get_user_training_slots(&self, user_id: Uuid) -> Result<Vec<TrainingSlot>> {
        Ok(self
            .slots
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn set_user_training_slots(&self, user_id: Uuid, slots: &[TrainingSlot]) -> Result<()> {
        self.slots.insert(user_id, slots.to_vec());
        Ok(())
    }

    async fn update_user_training_slots(
        &self,
        user_id: Uuid,
        apply: SlotUpdate<'_>,
    ) -> Result<()> {
        // Entry guard holds the shard lock for the whole read-modify-write.
        let mut entry = self.slots.entry(user_id).or_default();
        let updated = apply(entry.value().clone());
        *entry.value_mut() = updated;
        Ok(())
    }

    async fn list_logs_for_user(&self, user_id: Uuid) -> Result<Vec<TrainingLog>> {
        Ok(self
            .logs
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn list_skips_for_user(&self, user_id: Uuid) -> Result<Vec<SkipRecord>> {
        Ok(self
            .skips
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn insert_skip(&self, skip: &SkipRecord) -> Result<bool> {
        let mut entry = self.skips.entry(skip.user_id).or_default();
        let duplicate = entry.iter().any(|existing| skip.key().matches(existing));
        if duplicate {
            return Ok(false);
        }
        entry.push(skip.clone());
        Ok(true)
    }

    async fn delete_skips(&self, user_id: Uuid, keys: &[SkipKey]) -> Result<u64> {
        let Some(mut entry) = self.skips.get_mut(&user_id) else {
            return Ok(0);
        };
        let before = entry.len();
        entry.retain(|skip| !keys.iter().any(|key| key.matches(skip)));
        Ok((before - entry.len()) as u64)
    }

    fn iterate_group_members(&self, group_id: Uuid) -> BoxStream<'_, Result<Uuid>> {
        let members = self
            .members
            .get(&group_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        stream::iter(members.into_iter().map(anyhow::Ok)).boxed()
    }

    async fn get_group_template(&self, group_id: Uuid) -> Result<Vec<TrainingSlot>> {
        Ok(self
            .templates
            .get(&group_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn set_group_template(&self, group_id: Uuid, template: &[TrainingSlot]) -> Result<()> {
        self.templates.insert(group_id, template.to_vec());
        Ok(())
    }
}
