// ABOUTME: Group template application and post-log skip pruning services
// ABOUTME: Sequential member-cursor iteration with per-member atomic updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::models::TrainingSlot;
use crate::schedule::merge::merge_template;
use crate::schedule::skips::superseded_skip_keys;
use crate::storage::StorageProvider;

/// Delete skip records superseded by a newly created log
///
/// Invoked after a log insert. Only occurrences inside the configured prune
/// window of the log's timestamp are considered, and only skips whose
/// occurrence the log actually satisfies are removed.
///
/// # Errors
///
/// Returns storage errors on slot lookup or skip deletion failure.
pub async fn prune_superseded_skips(
    storage: &dyn StorageProvider,
    config: &EngineConfig,
    user_id: Uuid,
    log_timestamp: DateTime<Utc>,
) -> AppResult<u64> {
    let slots = storage.get_user_training_slots(user_id).await?;
    let keys = superseded_skip_keys(log_timestamp, &slots, config.prune_lookback_weeks);
    if keys.is_empty() {
        return Ok(0);
    }

    let removed = storage.delete_skips(user_id, &keys).await?;
    if removed > 0 {
        info!(
            user.id = %user_id,
            skips.removed = removed,
            "Pruned skips superseded by new log"
        );
    }
    Ok(removed)
}

/// Re-apply a group's current template to one member on demand
///
/// # Errors
///
/// Returns storage errors on template lookup or slot update failure.
pub async fn sync_member_schedule(
    storage: &dyn StorageProvider,
    group_id: Uuid,
    user_id: Uuid,
) -> AppResult<()> {
    let template = storage.get_group_template(group_id).await?;
    apply_template_to_member(storage, group_id, user_id, &template).await
}

/// Apply a group's current template to every member
///
/// Members are drained from the storage cursor one at a time; each member's
/// merge is an independent atomic read-modify-write, so a failure part-way
/// leaves earlier members updated and later ones untouched.
///
/// # Errors
///
/// Returns storage errors on template lookup, cursor, or update failure.
pub async fn apply_template_to_group(
    storage: &dyn StorageProvider,
    group_id: Uuid,
) -> AppResult<u64> {
    let template = storage.get_group_template(group_id).await?;
    if template.is_empty() {
        // Clearing a template does not strip already-applied member slots.
        debug!(group.id = %group_id, "Empty template, nothing to apply");
        return Ok(0);
    }

    let mut members = storage.iterate_group_members(group_id);
    let mut updated = 0;
    while let Some(member) = members.try_next().await? {
        apply_template_to_member(storage, group_id, member, &template).await?;
        updated += 1;
    }

    info!(
        group.id = %group_id,
        members.updated = updated,
        template.slots = template.len(),
        "Applied group template"
    );
    Ok(updated)
}

/// Merge the template into one member's schedule as a single atomic update
async fn apply_template_to_member(
    storage: &dyn StorageProvider,
    group_id: Uuid,
    user_id: Uuid,
    template: &[TrainingSlot],
) -> AppResult<()> {
    if template.is_empty() {
        return Ok(());
    }
    storage
        .update_user_training_slots(user_id, &|current| {
            merge_template(&current, group_id, template)
        })
        .await?;
    Ok(())
}
