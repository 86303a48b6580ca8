// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::Regex;

/// The "to be determined" time marker used across the rule tables.
pub const TIME_TBD: &str = "A definir";

/// Sort rank for "after the service" times. 1000 minutes is 16:40, so these
/// sort after every morning and afternoon slot but before the evening
/// services, which is where they actually happen.
pub const RANK_AFTER_SERVICE: u32 = 1_000;

/// Sort rank for undetermined or unparseable times: sorts last among events
/// sharing a date.
pub const RANK_TBD: u32 = 9_999;

static HHMM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").expect("hardcoded regex compiles"));

/// Normalizes a free-text time descriptor into a comparable rank.
///
/// Strict `HH:MM` becomes minutes since midnight; the qualitative "after the
/// service" phrasing and the explicit TBD marker map to sentinel ranks. The
/// raw text is kept for display; this rank only drives ordering.
pub fn time_rank(time: &str) -> u32 {
    if time == TIME_TBD {
        return RANK_TBD;
    }
    if time.contains("Após") {
        return RANK_AFTER_SERVICE;
    }
    match parse_hhmm(time) {
        Some((hours, minutes)) => hours * 60 + minutes,
        None => RANK_TBD,
    }
}

/// Extracts an `HH:MM` pair from a time descriptor, if one is present.
pub(crate) fn parse_hhmm(time: &str) -> Option<(u32, u32)> {
    let captures = HHMM.captures(time)?;
    let hours = captures[1].parse().expect("regex matched 1-2 digits");
    let minutes = captures[2].parse().expect("regex matched 2 digits");
    Some((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_times_become_minutes_since_midnight() {
        assert_eq!(time_rank("09:00"), 540);
        assert_eq!(time_rank("19:30"), 1170);
        assert_eq!(time_rank("8:30"), 510);
    }

    #[test]
    fn after_service_ranks_between_afternoon_and_evening() {
        let after = time_rank("Após o Santo Culto");
        assert_eq!(after, RANK_AFTER_SERVICE);
        assert!(time_rank("14:00") < after);
        assert!(after < time_rank("19:30"));
        assert!(after < time_rank(TIME_TBD));
    }

    #[test]
    fn tbd_and_unparseable_rank_last() {
        assert_eq!(time_rank(TIME_TBD), RANK_TBD);
        assert_eq!(time_rank("de manhã"), RANK_TBD);
        assert_eq!(time_rank(""), RANK_TBD);
    }

    #[test]
    fn extracts_clock_time_from_surrounding_text() {
        assert_eq!(parse_hhmm("às 17:00 em ponto"), Some((17, 0)));
        assert_eq!(parse_hhmm("A definir"), None);
    }
}
