// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::MusicalEvent;
use crate::favorites::Favorites;
use crate::filter::{FilterState, apply_filters, partition_by_time};
use crate::group::{MonthGroup, group_by_month};
use crate::sort::sort_events;
use crate::source::Region;

/// The musical agenda of one region for one target year: the generated,
/// sorted event list plus the derived views over it.
///
/// Generation is cheap (tens to low hundreds of events), so an `Agenda` is
/// simply rebuilt when the region changes; nothing is mutated in place.
#[derive(Debug, Clone)]
pub struct Agenda {
    region: Region,
    year: i32,
    events: Vec<MusicalEvent>,
}

impl Agenda {
    pub fn new(region: Region, year: i32) -> Self {
        tracing::debug!(%region, year, "generating agenda");
        let events = sort_events(region.events(year));
        Self {
            region,
            year,
            events,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// All events, sorted for display.
    pub fn events(&self) -> &[MusicalEvent] {
        &self.events
    }

    pub fn find_event(&self, id: &str) -> Option<&MusicalEvent> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Distinct event locations, sorted, for populating a location filter.
    pub fn available_locations(&self) -> Vec<&str> {
        let mut locations: Vec<&str> = self.events.iter().map(|e| e.location.as_str()).collect();
        locations.sort_unstable();
        locations.dedup();
        locations
    }

    /// Runs the full pipeline (filter, partition, group) for the given
    /// filter state and favorites set.
    ///
    /// With a month filter active the view switches display mode: every
    /// filtered match shows in the main section regardless of past/future,
    /// and the past section is suppressed.
    pub fn view(&self, filters: &FilterState, favorites: &Favorites, today: NaiveDate) -> AgendaView {
        let filtered = apply_filters(&self.events, filters, favorites);
        let (upcoming, past) = partition_by_time(&filtered, today);

        let month_selected = filters.month.is_some();
        if month_selected {
            AgendaView {
                filtered_count: filtered.len(),
                upcoming_count: upcoming.len(),
                main: group_by_month(&filtered),
                past: Vec::new(),
                month_selected,
            }
        } else {
            AgendaView {
                filtered_count: filtered.len(),
                upcoming_count: upcoming.len(),
                main: group_by_month(&upcoming),
                past: group_by_month(&past),
                month_selected,
            }
        }
    }
}

/// A fully derived display model: month groups for the main section and,
/// unless a month filter put the view in show-everything mode, for the
/// collapsible past section.
#[derive(Debug, Clone, Serialize)]
pub struct AgendaView {
    pub main: Vec<MonthGroup>,
    pub past: Vec<MonthGroup>,
    pub upcoming_count: usize,
    pub filtered_count: usize,
    pub month_selected: bool,
}

impl AgendaView {
    pub fn has_past(&self) -> bool {
        !self.past.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::TBD_GROUP_LABEL;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn generated_agenda_is_sorted() {
        let agenda = Agenda::new(Region::Uruguaiana, 2026);
        let events = agenda.events();
        for pair in events.windows(2) {
            match (pair[0].date, pair[1].date) {
                (Some(a), Some(b)) => assert!(a <= b),
                (None, Some(_)) => panic!("undated event before dated one"),
                _ => {}
            }
        }
    }

    #[test]
    fn view_without_month_filter_splits_past_and_upcoming() {
        let agenda = Agenda::new(Region::Uruguaiana, 2026);
        let view = agenda.view(&FilterState::default(), &Favorites::default(), today());

        assert!(!view.month_selected);
        assert!(view.has_past());
        // Undated regionals land in the terminal TBD bucket of the main view.
        assert_eq!(view.main.last().unwrap().label, TBD_GROUP_LABEL);
        // The past section never contains a TBD bucket.
        assert!(view.past.iter().all(|g| g.label != TBD_GROUP_LABEL));
    }

    #[test]
    fn month_filter_switches_to_show_everything_mode() {
        let agenda = Agenda::new(Region::Uruguaiana, 2026);
        let filters = FilterState {
            month: Some(0),
            ..FilterState::default()
        };
        let view = agenda.view(&filters, &Favorites::default(), today());

        assert!(view.month_selected);
        assert!(!view.has_past());
        // January is in the past relative to mid-June, yet still shows.
        assert_eq!(view.main.len(), 1);
        assert_eq!(view.main[0].label, "Janeiro de 2026");
    }

    #[test]
    fn available_locations_are_sorted_and_unique() {
        let agenda = Agenda::new(Region::Uruguaiana, 2026);
        let locations = agenda.available_locations();
        assert!(locations.contains(&"Uruguaiana"));
        assert!(locations.contains(&"Libres"));
        let mut deduped = locations.clone();
        deduped.dedup();
        assert_eq!(locations, deduped);
        assert!(locations.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn find_event_locates_by_id() {
        let agenda = Agenda::new(Region::Ijui, 2026);
        let event = agenda.find_event("ci-1").unwrap();
        assert_eq!(event.location, "Cruz Alta");
        assert!(agenda.find_event("missing").is_none());
    }
}
