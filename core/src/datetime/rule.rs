// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, Weekday};

/// Which occurrence of a weekday within a month a recurrence rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOrdinal {
    /// The first occurrence of the weekday in the month.
    First,

    /// The second occurrence.
    Second,

    /// The third occurrence.
    Third,

    /// The fourth occurrence.
    Fourth,

    /// The last occurrence, whether it is the fourth or the fifth.
    Last,
}

impl WeekOrdinal {
    fn nth(self) -> Option<u32> {
        match self {
            WeekOrdinal::First => Some(1),
            WeekOrdinal::Second => Some(2),
            WeekOrdinal::Third => Some(3),
            WeekOrdinal::Fourth => Some(4),
            WeekOrdinal::Last => None,
        }
    }
}

/// Resolves an ordinal-weekday rule ("the Nth/last W of the month") to a
/// concrete date.
///
/// `month0` is 0-based (0 = January), matching the month index used by the
/// filter state. Every weekday occurs at least four times in any month, so
/// `First`..`Fourth` always exist; a hypothetical out-of-range occurrence is
/// clamped to the last day of the month rather than wrapping into the next
/// one.
pub fn nth_weekday_of_month(
    year: i32,
    month0: u32,
    weekday: Weekday,
    ordinal: WeekOrdinal,
) -> NaiveDate {
    let month = month0 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month index must be in 0..12");
    let month_len = days_in_month(year, month);

    let offset = (weekday.num_days_from_sunday() + 7 - first.weekday().num_days_from_sunday()) % 7;
    let first_occurrence = 1 + offset;

    let day = match ordinal.nth() {
        Some(n) => nth_occurrence_day(first_occurrence, month_len, n),
        None => last_occurrence_day(first_occurrence, month_len),
    };
    NaiveDate::from_ymd_opt(year, month, day).expect("day is bounded by month length")
}

fn nth_occurrence_day(first_occurrence: u32, month_len: u32, n: u32) -> u32 {
    let day = first_occurrence + (n - 1) * 7;
    // Degraded fallback: an occurrence past the end of the month clamps to
    // the month's last day instead of spilling into the next month.
    day.min(month_len)
}

fn last_occurrence_day(first_occurrence: u32, month_len: u32) -> u32 {
    let mut day = first_occurrence;
    while day + 7 <= month_len {
        day += 7;
    }
    day
}

/// Parses a `"DD/MM"` or `"DD/MM/YYYY"` literal from the static rule tables.
///
/// The two-field form takes its year from `default_year`; the three-field
/// form carries its own. Malformed input yields `None`, which downstream
/// treats as an undated ("to be determined") event.
pub fn parse_literal_date(literal: &str, default_year: i32) -> Option<NaiveDate> {
    let date = parse_fields(literal, default_year);
    if date.is_none() {
        tracing::warn!(literal, "malformed date literal, treating as undated");
    }
    date
}

fn parse_fields(literal: &str, default_year: i32) -> Option<NaiveDate> {
    let mut fields = literal.split('/');
    let day = fields.next()?.trim().parse().ok()?;
    let month = fields.next()?.trim().parse().ok()?;
    let year = match fields.next() {
        Some(year) => year.trim().parse().ok()?,
        None => default_year,
    };
    if fields.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .expect("first of next month has a predecessor")
        .day()
}
