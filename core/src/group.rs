// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::datetime::month_label;
use crate::event::MusicalEvent;

/// Label of the terminal bucket collecting all undated events.
pub const TBD_GROUP_LABEL: &str = "A definir / Sem Data";

/// A display bucket of events sharing a calendar month, or the terminal
/// TBD bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGroup {
    pub label: String,
    pub events: Vec<MusicalEvent>,
}

/// Buckets events by localized month label, in first-appearance order.
///
/// No sorting happens here: the caller passes an already-ordered sequence
/// and groups come out in the order their months first appear. Undated
/// events always land in a single bucket appended last.
pub fn group_by_month(events: &[MusicalEvent]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    let mut tbd: Vec<MusicalEvent> = Vec::new();

    for event in events {
        match event.date {
            None => tbd.push(event.clone()),
            Some(date) => {
                let label = month_label(date);
                match groups.iter_mut().find(|group| group.label == label) {
                    Some(group) => group.events.push(event.clone()),
                    None => groups.push(MonthGroup {
                        label,
                        events: vec![event.clone()],
                    }),
                }
            }
        }
    }

    if !tbd.is_empty() {
        groups.push(MonthGroup {
            label: TBD_GROUP_LABEL.to_string(),
            events: tbd,
        });
    }
    groups
}
