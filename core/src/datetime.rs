// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

mod ptbr;
mod rule;
mod timeofday;

pub use ptbr::{TBD_DATE_LABEL, format_event_date, format_full_date, month_label};
pub use rule::{WeekOrdinal, nth_weekday_of_month, parse_literal_date};
pub(crate) use timeofday::parse_hhmm;
pub use timeofday::{RANK_AFTER_SERVICE, RANK_TBD, TIME_TBD, time_rank};
