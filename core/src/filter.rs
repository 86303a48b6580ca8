// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::event::{EventCategory, MusicalEvent};
use crate::favorites::Favorites;

/// User-selected predicates, all optional and ANDed together.
#[derive(Debug, Default, Clone)]
pub struct FilterState {
    /// Exact category, or any.
    pub category: Option<EventCategory>,

    /// Exact location name, or any.
    pub location: Option<String>,

    /// 0-based month index, or any. An undated event never matches an
    /// active month filter.
    pub month: Option<u32>,

    /// Keep only favorited events.
    pub only_favorites: bool,
}

impl FilterState {
    pub fn matches(&self, event: &MusicalEvent, favorites: &Favorites) -> bool {
        if self.only_favorites && !favorites.contains(&event.id) {
            return false;
        }
        if let Some(category) = self.category
            && event.category != category
        {
            return false;
        }
        if let Some(location) = &self.location
            && event.location != *location
        {
            return false;
        }
        if let Some(month) = self.month {
            match event.date {
                Some(date) => {
                    if date.month0() != month {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

/// Keeps the events passing every active predicate, preserving order.
pub fn apply_filters(
    events: &[MusicalEvent],
    filters: &FilterState,
    favorites: &Favorites,
) -> Vec<MusicalEvent> {
    events
        .iter()
        .filter(|event| filters.matches(event, favorites))
        .cloned()
        .collect()
}

/// Splits events into `(upcoming, past)` relative to `today`, preserving
/// order within each half. `today` is already a plain date, so the
/// comparison is against the start of the day; an event happening today is
/// upcoming. Undated events are always upcoming.
pub fn partition_by_time(
    events: &[MusicalEvent],
    today: NaiveDate,
) -> (Vec<MusicalEvent>, Vec<MusicalEvent>) {
    events
        .iter()
        .cloned()
        .partition(|event| match event.date {
            Some(date) => date >= today,
            None => true,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, location: &str, date: Option<(i32, u32, u32)>, category: EventCategory) -> MusicalEvent {
        let date = date.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        MusicalEvent::new(id, "Ensaio", location, date, "09:00", category)
    }

    fn sample() -> Vec<MusicalEvent> {
        vec![
            event("a", "Uruguaiana", Some((2026, 1, 4)), EventCategory::EnsaioLocal),
            event("b", "Itaqui", Some((2026, 3, 7)), EventCategory::PraticaConjunto),
            event("c", "Alegrete", Some((2026, 4, 12)), EventCategory::EnsaioRegional),
            event("d", "Artigas", None, EventCategory::EnsaioRegional),
        ]
    }

    #[test]
    fn no_active_predicates_returns_input_unchanged() {
        let events = sample();
        let filtered = apply_filters(&events, &FilterState::default(), &Favorites::default());
        assert_eq!(filtered, events);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let events = sample();
        let filters = FilterState {
            category: Some(EventCategory::EnsaioRegional),
            location: Some("Alegrete".into()),
            ..FilterState::default()
        };
        let filtered = apply_filters(&events, &filters, &Favorites::default());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c");
    }

    #[test]
    fn month_filter_rejects_undated_events() {
        let events = sample();
        let filters = FilterState {
            month: Some(2),
            ..FilterState::default()
        };
        let filtered = apply_filters(&events, &filters, &Favorites::default());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "b");
    }

    #[test]
    fn favorites_filter_uses_membership() {
        let events = sample();
        let mut favorites = Favorites::default();
        favorites.toggle("b");
        favorites.toggle("d");

        let filters = FilterState {
            only_favorites: true,
            ..FilterState::default()
        };
        let filtered = apply_filters(&events, &filters, &favorites);
        let ids: Vec<_> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "d"]);
    }

    #[test]
    fn partition_is_complete_and_order_preserving() {
        let events = sample();
        let today = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let (upcoming, past) = partition_by_time(&events, today);

        // An event happening today is upcoming; undated is always upcoming.
        let upcoming_ids: Vec<_> = upcoming.iter().map(|e| e.id.as_str()).collect();
        let past_ids: Vec<_> = past.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(upcoming_ids, ["b", "c", "d"]);
        assert_eq!(past_ids, ["a"]);
        assert_eq!(upcoming.len() + past.len(), events.len());
    }
}
