// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use crate::event::MusicalEvent;

/// Orders events for display: dated before undated, then date ascending,
/// then the normalized time-of-day rank. The sort is stable, so events that
/// compare equal (including all undated ones) keep their generation order.
pub fn sort_events(mut events: Vec<MusicalEvent>) -> Vec<MusicalEvent> {
    events.sort_by(compare);
    events
}

fn compare(a: &MusicalEvent, b: &MusicalEvent) -> Ordering {
    match (a.date, b.date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(da), Some(db)) => da
            .cmp(&db)
            .then_with(|| a.time_rank().cmp(&b.time_rank())),
    }
}
