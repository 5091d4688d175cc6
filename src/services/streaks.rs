// ABOUTME: Streak, skip-eligibility, and upcoming-session service operations
// ABOUTME: Read paths over the storage seam plus guarded skip recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

use chrono::{DateTime, Datelike, TimeZone, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{SkipEligibility, SkipRecord, StreakSummary};
use crate::schedule::occurrences::{next_session, occurrences_within, Occurrence};
use crate::schedule::skips::today_skip_status;
use crate::schedule::streak::compute_streak;
use crate::storage::StorageProvider;

/// Compute a user's current streak and total log count
///
/// # Errors
///
/// Returns storage errors on slot, log, or skip lookup failure.
pub async fn training_streak(
    storage: &dyn StorageProvider,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<StreakSummary> {
    let slots = storage.get_user_training_slots(user_id).await?;
    let logs = storage.list_logs_for_user(user_id).await?;
    let skips = storage.list_skips_for_user(user_id).await?;
    Ok(compute_streak(&slots, &logs, &skips, now))
}

/// Decide whether the user may record a skip today
///
/// # Errors
///
/// Returns storage errors on slot, skip, or log lookup failure.
pub async fn skip_eligibility_today(
    storage: &dyn StorageProvider,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<SkipEligibility> {
    let slots = storage.get_user_training_slots(user_id).await?;
    let skips = storage.list_skips_for_user(user_id).await?;
    let logs = storage.list_logs_for_user(user_id).await?;
    Ok(today_skip_status(&slots, &skips, &logs, now))
}

/// Record a skip for today after re-checking eligibility
///
/// The skipped occurrence is the first of today's slots in schedule order.
///
/// # Errors
///
/// Returns `AppError::SkipNotAllowed` when eligibility fails, and storage
/// errors on lookup or insert failure.
pub async fn record_skip_today(
    storage: &dyn StorageProvider,
    user_id: Uuid,
    reason: impl Into<String> + Send,
    now: DateTime<Utc>,
) -> AppResult<SkipRecord> {
    let slots = storage.get_user_training_slots(user_id).await?;
    let skips = storage.list_skips_for_user(user_id).await?;
    let logs = storage.list_logs_for_user(user_id).await?;

    let status = today_skip_status(&slots, &skips, &logs, now);
    if let Some(blocker) = status.reason {
        return Err(AppError::skip_not_allowed(format!(
            "cannot record a skip today: {blocker}"
        )));
    }

    let today = now.date_naive();
    let weekday = today.weekday().num_days_from_sunday() as u8;
    let slot = slots
        .iter()
        .find(|slot| slot.day_of_week == weekday)
        .ok_or_else(|| AppError::skip_not_allowed("no training scheduled today"))?;

    let record = SkipRecord {
        user_id,
        date: today,
        day_of_week: weekday,
        scheduled_time: slot.time.clone(),
        reason: reason.into(),
    };

    if storage.insert_skip(&record).await? {
        info!(user.id = %user_id, skip.date = %record.date, "Skip recorded");
    } else {
        debug!(user.id = %user_id, skip.date = %record.date, "Skip already on record");
    }
    Ok(record)
}

/// A user's past occurrence feed within the configured horizon
///
/// # Errors
///
/// Returns storage errors on slot lookup failure.
pub async fn occurrence_history(
    storage: &dyn StorageProvider,
    config: &EngineConfig,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<Vec<Occurrence>> {
    let slots = storage.get_user_training_slots(user_id).await?;
    Ok(occurrences_within(&slots, now, config.occurrence_horizon_weeks))
}

/// The user's next upcoming session, in the caller's wall clock
///
/// Display-only: evaluates the schedule in `from`'s timezone, not in the
/// UTC terms the streak and matching paths use.
///
/// # Errors
///
/// Returns storage errors on slot lookup failure.
pub async fn upcoming_session<Tz>(
    storage: &dyn StorageProvider,
    user_id: Uuid,
    from: &DateTime<Tz>,
) -> AppResult<Option<DateTime<Tz>>>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    let slots = storage.get_user_training_slots(user_id).await?;
    Ok(next_session(&slots, from))
}
