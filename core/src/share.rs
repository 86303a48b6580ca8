// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure string formatting for the share surface: human-readable summaries
//! for events and churches, and a Google Calendar deep link. Delivery
//! (share sheet, clipboard, messaging app) is the caller's problem.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::church::Church;
use crate::datetime::{TBD_DATE_LABEL, format_full_date, parse_hhmm};
use crate::event::MusicalEvent;

/// Multi-line, WhatsApp-friendly summary of an event.
pub fn event_share_text(event: &MusicalEvent) -> String {
    let date = match event.date {
        Some(date) => format_full_date(date),
        None => TBD_DATE_LABEL.to_string(),
    };
    let mut text = format!(
        "📅 *Evento Musical - CCB*\n\n🎵 *{}*\n📍 Local: {}\n📆 Data: {}\n⏰ Horário: {}\n🏷️ Tipo: {}",
        event.title, event.location, date, event.time, event.category
    );
    if let Some(description) = &event.description {
        text.push_str(&format!("\nℹ️ Obs: {description}"));
    }
    text
}

/// Multi-line summary of a church and its service schedule.
pub fn church_share_text(church: &Church, region: &str) -> String {
    let mut text = format!(
        "⛪ *Congregação Cristã no Brasil*\n📍 *{}* ({})\n🗺️ Endereço: {}\n\n🛐 Cultos: {}",
        church.name, region, church.address, church.services
    );
    if let Some(rjm) = church.rjm {
        text.push_str(&format!("\n🔥 RJM: {rjm}"));
    }
    if let Some(obs) = church.obs {
        text.push_str(&format!("\n⚠️ Obs: {obs}"));
    }
    text
}

/// Builds a Google Calendar "add event" link, or `None` for undated events.
///
/// The start time comes from the event's `HH:MM` text when present;
/// otherwise a heuristic default applies: morning wording gets 09:00,
/// everything else the usual 19:30 evening service slot. Duration is fixed
/// at two hours. Times are floating local times.
pub fn google_calendar_link(event: &MusicalEvent) -> Option<String> {
    const CALENDAR_TIME: &str = "%Y%m%dT%H%M%S";

    let date = event.date?;
    let time = parse_hhmm(&event.time)
        .and_then(|(hours, minutes)| NaiveTime::from_hms_opt(hours, minutes, 0))
        .unwrap_or_else(|| default_start_time(&event.time));
    let start = NaiveDateTime::new(date, time);
    let end = start + Duration::hours(2);

    let title = format!("CCB - {}", event.title);
    let details = format!(
        "{} - {}",
        event.category,
        event.description.as_deref().unwrap_or("")
    );
    Some(format!(
        "https://www.google.com/calendar/render?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}&sf=true&output=xml",
        urlencoding::encode(&title),
        start.format(CALENDAR_TIME),
        end.format(CALENDAR_TIME),
        urlencoding::encode(&details),
        urlencoding::encode(&event.location),
    ))
}

fn default_start_time(time: &str) -> NaiveTime {
    let lower = time.to_lowercase();
    let (hours, minutes) = if lower.contains("manhã") || lower.contains("9h") {
        (9, 0)
    } else {
        (19, 30)
    };
    NaiveTime::from_hms_opt(hours, minutes, 0).expect("default times are valid")
}
