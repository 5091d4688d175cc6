// ABOUTME: Concrete occurrence generation from recurring weekly training slots
// ABOUTME: UTC trailing-week expansion plus a local-wall-clock next-session helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Occurrence Generation
//!
//! Expands recurring weekly slots into concrete instants. The trailing-week
//! generator feeds matching, streaks, and pruning and works strictly in UTC
//! calendar terms; day boundaries fall at UTC midnight so results stay
//! consistent with the dates stored on skip records.

use chrono::{DateTime, Datelike, Days, NaiveTime, TimeZone, Timelike, Utc};

use crate::constants::schedule::DAYS_PER_WEEK;
use crate::models::TrainingSlot;

/// One concrete calendar instant generated from a slot for a specific week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The occurrence instant in UTC
    pub instant: DateTime<Utc>,
    /// Weekday of the originating slot, 0 = Sunday
    pub day_of_week: u8,
    /// Scheduled "HH:mm" time of the originating slot
    pub time: String,
}

/// Generate past occurrences for a set of slots, most recent first
///
/// For each of `max_weeks` trailing weeks, each slot contributes the most
/// recent date on/before that week's anchor whose weekday matches, at the
/// slot's wall-clock time. Instants after `reference` are discarded, so the
/// current week's not-yet-reached occurrences never appear.
#[must_use]
pub fn occurrences_within(
    slots: &[TrainingSlot],
    reference: DateTime<Utc>,
    max_weeks: u32,
) -> Vec<Occurrence> {
    let mut occurrences = Vec::new();
    let reference_date = reference.date_naive();

    for week in 0..max_weeks {
        let Some(anchor) =
            reference_date.checked_sub_days(Days::new(u64::from(week) * u64::from(DAYS_PER_WEEK)))
        else {
            break;
        };
        for slot in slots {
            let anchor_weekday = anchor.weekday().num_days_from_sunday();
            let step_back =
                (i64::from(anchor_weekday) - i64::from(slot.day_of_week)).rem_euclid(7);
            let Some(date) = anchor.checked_sub_days(Days::new(step_back as u64)) else {
                continue;
            };
            let instant = date.and_time(slot.wall_time()).and_utc();
            if instant <= reference {
                occurrences.push(Occurrence {
                    instant,
                    day_of_week: slot.day_of_week,
                    time: slot.time.clone(),
                });
            }
        }
    }

    occurrences.sort_by(|a, b| b.instant.cmp(&a.instant));
    occurrences
}

/// The next session instant on or after `from`, in the caller's wall clock
///
/// Display-only helper, deliberately separate from [`occurrences_within`]:
/// it evaluates weekday and time in `from`'s own timezone, so a late-night
/// slot lands on the viewer's calendar day rather than UTC's. The smallest
/// non-negative day offset is used, rolling a full week when today's slot
/// time has already passed. Returns `None` for an invalid time of day or a
/// wall-clock instant that does not exist in the target zone.
#[must_use]
pub fn next_occurrence_on_or_after<Tz: TimeZone>(
    from: &DateTime<Tz>,
    day_of_week: u8,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Tz>> {
    let target_time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    let local_date = from.date_naive();
    let from_weekday = local_date.weekday().num_days_from_sunday();

    let mut days_ahead = (i64::from(day_of_week) - i64::from(from_weekday)).rem_euclid(7);
    if days_ahead == 0 && from.time() > target_time {
        days_ahead = i64::from(DAYS_PER_WEEK);
    }

    let date = local_date.checked_add_days(Days::new(days_ahead as u64))?;
    date.and_time(target_time)
        .and_local_timezone(from.timezone())
        .earliest()
}

/// The soonest upcoming session across a whole schedule
#[must_use]
pub fn next_session<Tz: TimeZone>(
    slots: &[TrainingSlot],
    from: &DateTime<Tz>,
) -> Option<DateTime<Tz>> {
    slots
        .iter()
        .filter_map(|slot| {
            let time = slot.wall_time();
            next_occurrence_on_or_after(from, slot.day_of_week, time.hour(), time.minute())
        })
        .min()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn slot(day_of_week: u8, time: &str) -> TrainingSlot {
        TrainingSlot {
            day_of_week,
            time: time.into(),
            source_group_id: None,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_occurrences_are_descending_and_past_only() {
        // 2025-03-12 is a Wednesday; slot on Monday (1) at 09:00
        let reference = utc(2025, 3, 12, 12, 0);
        let occurrences = occurrences_within(&[slot(1, "09:00")], reference, 4);

        assert_eq!(occurrences.len(), 4);
        assert_eq!(occurrences[0].instant, utc(2025, 3, 10, 9, 0));
        assert_eq!(occurrences[1].instant, utc(2025, 3, 3, 9, 0));
        assert!(occurrences.windows(2).all(|w| w[0].instant > w[1].instant));
        assert!(occurrences.iter().all(|o| o.instant <= reference));
    }

    #[test]
    fn test_same_day_occurrence_respects_reference_time() {
        // Reference is a Monday: before 09:00 the week-0 instance is future
        let before = utc(2025, 3, 10, 8, 0);
        let occurrences = occurrences_within(&[slot(1, "09:00")], before, 2);
        assert_eq!(occurrences[0].instant, utc(2025, 3, 3, 9, 0));

        // At exactly 09:00 the instance counts
        let at = utc(2025, 3, 10, 9, 0);
        let occurrences = occurrences_within(&[slot(1, "09:00")], at, 2);
        assert_eq!(occurrences[0].instant, at);
    }

    #[test]
    fn test_multiple_slots_interleave() {
        // Wednesday reference; slots Monday 09:00 and Tuesday 18:00
        let reference = utc(2025, 3, 12, 12, 0);
        let occurrences =
            occurrences_within(&[slot(1, "09:00"), slot(2, "18:00")], reference, 1);

        assert_eq!(occurrences.len(), 2);
        assert_eq!(occurrences[0].instant, utc(2025, 3, 11, 18, 0));
        assert_eq!(occurrences[0].day_of_week, 2);
        assert_eq!(occurrences[1].instant, utc(2025, 3, 10, 9, 0));
    }

    #[test]
    fn test_unparseable_slot_time_falls_back_to_default() {
        let reference = utc(2025, 3, 12, 12, 0);
        let occurrences = occurrences_within(&[slot(1, "99:99")], reference, 1);
        assert_eq!(occurrences[0].instant, utc(2025, 3, 10, 9, 0));
    }

    #[test]
    fn test_next_occurrence_same_day_future_time() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        // Monday 08:00 +02:00
        let from = zone.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let next = next_occurrence_on_or_after(&from, 1, 9, 0).unwrap();
        assert_eq!(next, zone.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_next_occurrence_rolls_week_when_time_passed() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        // Monday 10:00 +02:00, slot time 09:00 already passed
        let from = zone.with_ymd_and_hms(2025, 3, 10, 10, 0, 0).unwrap();
        let next = next_occurrence_on_or_after(&from, 1, 9, 0).unwrap();
        assert_eq!(next, zone.with_ymd_and_hms(2025, 3, 17, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_next_occurrence_uses_local_weekday_not_utc() {
        // 23:30 Sunday in +02:00 is 21:30 Sunday UTC; but 01:30 Monday in
        // +02:00 is still 23:30 Sunday UTC. The helper must see Monday.
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let from = zone.with_ymd_and_hms(2025, 3, 10, 1, 30, 0).unwrap(); // Monday local
        let next = next_occurrence_on_or_after(&from, 1, 9, 0).unwrap();
        assert_eq!(next.date_naive(), from.date_naive());
    }

    #[test]
    fn test_next_session_picks_soonest_slot() {
        let zone = FixedOffset::east_opt(0).unwrap();
        // Wednesday 12:00; Thursday slot beats next Monday slot
        let from = zone.with_ymd_and_hms(2025, 3, 12, 12, 0, 0).unwrap();
        let next = next_session(&[slot(1, "09:00"), slot(4, "07:00")], &from).unwrap();
        assert_eq!(next, zone.with_ymd_and_hms(2025, 3, 13, 7, 0, 0).unwrap());
    }

    #[test]
    fn test_next_session_empty_schedule() {
        let from = utc(2025, 3, 12, 12, 0);
        assert!(next_session(&[], &from).is_none());
    }
}
