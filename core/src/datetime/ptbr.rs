// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

/// Display label for events without a resolved date.
pub const TBD_DATE_LABEL: &str = "Data a definir";

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const WEEKDAYS_SHORT: [&str; 7] = ["dom.", "seg.", "ter.", "qua.", "qui.", "sex.", "sáb."];

const WEEKDAYS_FULL: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

/// Month-group label, capitalized: "Janeiro de 2026".
pub fn month_label(date: NaiveDate) -> String {
    capitalize(&format!("{} de {}", month_name(date), date.year()))
}

/// Compact event-card date: "dom., 5 de janeiro", or the TBD label.
pub fn format_event_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("{}, {} de {}", weekday_short(date), date.day(), month_name(date)),
        None => TBD_DATE_LABEL.to_string(),
    }
}

/// Full share-text date: "domingo, 5 de janeiro de 2026".
pub fn format_full_date(date: NaiveDate) -> String {
    format!(
        "{}, {} de {} de {}",
        weekday_full(date),
        date.day(),
        month_name(date),
        date.year()
    )
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

fn weekday_short(date: NaiveDate) -> &'static str {
    WEEKDAYS_SHORT[date.weekday().num_days_from_sunday() as usize]
}

fn weekday_full(date: NaiveDate) -> &'static str {
    WEEKDAYS_FULL[date.weekday().num_days_from_sunday() as usize]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
