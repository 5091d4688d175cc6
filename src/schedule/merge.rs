// ABOUTME: Order-preserving merge of a coach's template into a member schedule
// ABOUTME: Replaces group-sourced slots in place and never moves custom slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Training Log

//! # Group Template Merger
//!
//! Applies a coach-defined ordered template onto a member's personal
//! schedule. Only slots previously sourced from the same group are touched:
//! they are replaced value-in-place by template entries in order, extra old
//! group slots are dropped once the template runs out, and template entries
//! beyond the old count are appended. Custom slots never move or change.

use uuid::Uuid;

use crate::models::TrainingSlot;

/// Merge a group's template into one member's slot list
///
/// An empty template is a no-op and returns the input unchanged: a coach
/// clearing a template does not remove already-applied member slots.
#[must_use]
pub fn merge_template(
    current: &[TrainingSlot],
    group_id: Uuid,
    template: &[TrainingSlot],
) -> Vec<TrainingSlot> {
    if template.is_empty() {
        return current.to_vec();
    }

    let mut incoming = template.iter().map(|entry| TrainingSlot {
        source_group_id: Some(group_id),
        ..entry.clone()
    });

    let mut merged = Vec::with_capacity(current.len().max(template.len()));
    for slot in current {
        if slot.source_group_id == Some(group_id) {
            // Replace in place; a consumed-out template drops the stale slot.
            if let Some(replacement) = incoming.next() {
                merged.push(replacement);
            }
        } else {
            merged.push(slot.clone());
        }
    }

    merged.extend(incoming);
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn custom(day_of_week: u8, time: &str) -> TrainingSlot {
        TrainingSlot {
            day_of_week,
            time: time.into(),
            source_group_id: None,
        }
    }

    fn group_slot(day_of_week: u8, time: &str, group_id: Uuid) -> TrainingSlot {
        TrainingSlot {
            day_of_week,
            time: time.into(),
            source_group_id: Some(group_id),
        }
    }

    #[test]
    fn test_replace_in_place_and_append_surplus() {
        let group_id = Uuid::new_v4();
        let current = vec![
            custom(1, "07:00"),
            group_slot(2, "18:00", group_id),
            custom(5, "08:30"),
        ];
        let template = vec![custom(3, "19:00"), custom(6, "10:00")];

        let merged = merge_template(&current, group_id, &template);

        assert_eq!(merged.len(), 4);
        // custom1 untouched, in place
        assert_eq!(merged[0], custom(1, "07:00"));
        // old group slot replaced in place by template[0], tagged
        assert_eq!(merged[1], group_slot(3, "19:00", group_id));
        // custom2 untouched, in place
        assert_eq!(merged[2], custom(5, "08:30"));
        // surplus template entry appended, tagged
        assert_eq!(merged[3], group_slot(6, "10:00", group_id));
    }

    #[test]
    fn test_shrinking_template_drops_extra_group_slots() {
        let group_id = Uuid::new_v4();
        let current = vec![
            group_slot(1, "09:00", group_id),
            custom(2, "12:00"),
            group_slot(3, "09:00", group_id),
            group_slot(5, "09:00", group_id),
        ];
        let template = vec![custom(4, "17:00")];

        let merged = merge_template(&current, group_id, &template);

        assert_eq!(
            merged,
            vec![group_slot(4, "17:00", group_id), custom(2, "12:00")]
        );
    }

    #[test]
    fn test_empty_template_is_a_no_op() {
        let group_id = Uuid::new_v4();
        let current = vec![custom(1, "07:00"), group_slot(2, "18:00", group_id)];

        assert_eq!(merge_template(&current, group_id, &[]), current);
    }

    #[test]
    fn test_other_groups_slots_are_custom_here() {
        let group_id = Uuid::new_v4();
        let other_group = Uuid::new_v4();
        let current = vec![
            group_slot(1, "09:00", other_group),
            group_slot(2, "09:00", group_id),
        ];
        let template = vec![custom(3, "09:00")];

        let merged = merge_template(&current, group_id, &template);

        // The other group's slot is untouched and keeps its own tag.
        assert_eq!(merged[0], group_slot(1, "09:00", other_group));
        assert_eq!(merged[1], group_slot(3, "09:00", group_id));
    }

    #[test]
    fn test_member_with_no_group_slots_gets_template_appended() {
        let group_id = Uuid::new_v4();
        let current = vec![custom(1, "07:00")];
        let template = vec![custom(2, "18:00"), custom(4, "18:00")];

        let merged = merge_template(&current, group_id, &template);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], custom(1, "07:00"));
        assert_eq!(merged[1], group_slot(2, "18:00", group_id));
        assert_eq!(merged[2], group_slot(4, "18:00", group_id));
    }
}
