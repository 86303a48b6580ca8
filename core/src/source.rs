// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::Weekday;

use crate::datetime::{WeekOrdinal, nth_weekday_of_month, parse_literal_date};
use crate::event::{EventCategory, MusicalEvent};

mod frederico_westphalen;
mod ijui;
mod uruguaiana;

/// A geographic administrative grouping whose agenda is sourced
/// independently of the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Region {
    Uruguaiana,
    FredericoWestphalen,
    Ijui,
}

const REGION_URUGUAIANA: &str = "uruguaiana";
const REGION_FREDERICO_WESTPHALEN: &str = "frederico-westphalen";
const REGION_IJUI: &str = "ijui";

/// Static display metadata for a region.
#[derive(Debug, Clone, Copy)]
pub struct RegionProfile {
    pub name: &'static str,
    pub full_title: &'static str,
    /// Whether the church dataset covers this region.
    pub has_churches: bool,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::Uruguaiana,
        Region::FredericoWestphalen,
        Region::Ijui,
    ];

    pub fn profile(self) -> RegionProfile {
        match self {
            Region::Uruguaiana => RegionProfile {
                name: "Uruguaiana",
                full_title: "Agenda Musical - Região Uruguaiana",
                has_churches: true,
            },
            Region::FredericoWestphalen => RegionProfile {
                name: "Frederico Westphalen",
                full_title: "Agenda Musical - Região Frederico Westphalen",
                has_churches: false,
            },
            Region::Ijui => RegionProfile {
                name: "Ijuí",
                full_title: "Agenda Musical - Região Ijuí",
                has_churches: false,
            },
        }
    }

    /// Generates the region's full, unsorted event list. Pure: two calls
    /// with the same inputs yield equal events.
    pub fn events(self, year: i32) -> Vec<MusicalEvent> {
        match self.source() {
            EventSource::Computed { recurring, fixed } => expand_rules(year, recurring, fixed),
            EventSource::Static(build) => build(),
        }
    }

    fn source(self) -> EventSource {
        match self {
            Region::Uruguaiana => EventSource::Computed {
                recurring: uruguaiana::RECURRING,
                fixed: uruguaiana::FIXED,
            },
            Region::FredericoWestphalen => EventSource::Static(frederico_westphalen::events),
            Region::Ijui => EventSource::Static(ijui::events),
        }
    }
}

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        match self {
            Region::Uruguaiana => REGION_URUGUAIANA,
            Region::FredericoWestphalen => REGION_FREDERICO_WESTPHALEN,
            Region::Ijui => REGION_IJUI,
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Region {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            REGION_URUGUAIANA => Ok(Region::Uruguaiana),
            REGION_FREDERICO_WESTPHALEN => Ok(Region::FredericoWestphalen),
            REGION_IJUI => Ok(Region::Ijui),
            _ => Err(()),
        }
    }
}

/// How a region's events come to be: expanded from recurrence rules against
/// a target year, or taken verbatim from a curated dataset whose dates are
/// already absolute.
enum EventSource {
    Computed {
        recurring: &'static [RecurringRule],
        fixed: &'static [FixedRule],
    },
    Static(fn() -> Vec<MusicalEvent>),
}

/// "The Nth (or last) weekday W of every month", from a starting month
/// through December.
pub(crate) struct RecurringRule {
    pub title: &'static str,
    pub location: &'static str,
    pub weekday: Weekday,
    pub ordinal: WeekOrdinal,
    /// 0-based month of the first occurrence.
    pub start_month: u32,
    pub time: &'static str,
    pub category: EventCategory,
}

/// A one-off event on a `"DD/MM"` literal date, or a dateless placeholder.
pub(crate) struct FixedRule {
    pub title: &'static str,
    pub location: &'static str,
    pub date: Option<&'static str>,
    pub time: &'static str,
    pub category: EventCategory,
}

fn expand_rules(year: i32, recurring: &[RecurringRule], fixed: &[FixedRule]) -> Vec<MusicalEvent> {
    tracing::debug!(year, "expanding recurrence rules");
    let mut batch = EventBatch::default();

    for rule in recurring {
        for month0 in rule.start_month..12 {
            let date = nth_weekday_of_month(year, month0, rule.weekday, rule.ordinal);
            batch.push(rule.title, rule.location, Some(date), rule.time, rule.category);
        }
    }

    for rule in fixed {
        let date = rule.date.and_then(|literal| parse_literal_date(literal, year));
        batch.push(rule.title, rule.location, date, rule.time, rule.category);
    }

    batch.events
}

/// Accumulates events for one generation run, handing out sequential
/// batch-local ids.
#[derive(Default)]
struct EventBatch {
    events: Vec<MusicalEvent>,
    next_id: u32,
}

impl EventBatch {
    fn push(
        &mut self,
        title: &str,
        location: &str,
        date: Option<chrono::NaiveDate>,
        time: &str,
        category: EventCategory,
    ) {
        self.next_id += 1;
        let id = format!("evt-{}", self.next_id);
        let mut event = MusicalEvent::new(id, title, location, date, time, category);

        // Local rehearsals at 19:30 happen alongside the regular service.
        if category == EventCategory::EnsaioLocal && time == "19:30" {
            event = event.with_description("Junto do culto");
        }

        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn rule_spanning_all_months_expands_twelve_times() {
        let rules = [RecurringRule {
            title: "Ensaio Local",
            location: "Uruguaiana",
            weekday: Weekday::Sun,
            ordinal: WeekOrdinal::First,
            start_month: 0,
            time: "17:00",
            category: EventCategory::EnsaioLocal,
        }];
        let events = expand_rules(2026, &rules, &[]);
        assert_eq!(events.len(), 12);
        for (month0, event) in events.iter().enumerate() {
            let date = event.date.expect("recurring rules always resolve a date");
            assert_eq!(date.month0(), month0 as u32);
            assert_eq!(date.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn rule_starting_mid_year_skips_earlier_months() {
        let rules = [RecurringRule {
            title: "Prática em Conjunto",
            location: "Itaqui",
            weekday: Weekday::Sat,
            ordinal: WeekOrdinal::First,
            start_month: 2,
            time: "Após o Santo Culto",
            category: EventCategory::PraticaConjunto,
        }];
        let events = expand_rules(2026, &rules, &[]);
        assert_eq!(events.len(), 10);
        assert_eq!(events[0].date.unwrap().month0(), 2);
    }

    #[test]
    fn dateless_fixed_rule_stays_undated() {
        let fixed = [FixedRule {
            title: "Ensaio Regional",
            location: "Artigas",
            date: None,
            time: "A definir",
            category: EventCategory::EnsaioRegional,
        }];
        let events = expand_rules(2026, &[], &fixed);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, None);
    }

    #[test]
    fn evening_local_rehearsals_get_service_note() {
        let fixed = [
            FixedRule {
                title: "Ensaio Local",
                location: "São Borja",
                date: Some("08/03"),
                time: "19:30",
                category: EventCategory::EnsaioLocal,
            },
            FixedRule {
                title: "Ensaio Local",
                location: "Uruguaiana",
                date: Some("08/03"),
                time: "17:00",
                category: EventCategory::EnsaioLocal,
            },
        ];
        let events = expand_rules(2026, &[], &fixed);
        assert_eq!(events[0].description.as_deref(), Some("Junto do culto"));
        assert_eq!(events[1].description, None);
    }

    #[test]
    fn batch_ids_are_unique_and_sequential() {
        let events = Region::Uruguaiana.events(2026);
        let mut ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
        assert_eq!(events[0].id, "evt-1");
    }

    #[test]
    fn region_name_round_trips() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse(), Ok(region));
        }
    }
}
