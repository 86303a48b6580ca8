// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the regional musical agenda: event generation from recurrence
//! rules and curated datasets, classification, sorting, filtering and
//! month grouping, plus favorites persistence and share-text rendering.

mod agenda;
mod church;
mod datetime;
mod event;
mod favorites;
mod filter;
mod group;
mod share;
mod sort;
mod source;

pub use agenda::{Agenda, AgendaView};
pub use church::{CHURCH_GROUPS, Church, ChurchGroup, main_address_for};
pub use datetime::{
    RANK_AFTER_SERVICE, RANK_TBD, TBD_DATE_LABEL, TIME_TBD, WeekOrdinal, format_event_date,
    format_full_date, month_label, nth_weekday_of_month, parse_literal_date, time_rank,
};
pub use event::{
    EventCategory, EventStats, FamilyStat, GemSchedule, InstrumentStat, MusicalEvent,
};
pub use favorites::Favorites;
pub use filter::{FilterState, apply_filters, partition_by_time};
pub use group::{MonthGroup, TBD_GROUP_LABEL, group_by_month};
pub use share::{church_share_text, event_share_text, google_calendar_link};
pub use sort::sort_events;
pub use source::{Region, RegionProfile};

pub const APP_NAME: &str = "agenda";
