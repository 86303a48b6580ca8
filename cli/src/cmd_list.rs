// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io;

use agenda_core::{EventCategory, FilterState};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::cli::Context;
use crate::event_formatter::EventFormatter;
use crate::util::ArgOutputFormat;

/// List the agenda grouped by month, with optional filters.
#[derive(Debug, Default, Clone)]
pub struct CmdList {
    pub category: Option<EventCategory>,
    pub location: Option<String>,
    /// 1-based month as the user typed it.
    pub month: Option<u32>,
    pub favorites: bool,
    pub past: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the agenda of the region, grouped by month")
            .arg(
                arg!(--category <CATEGORY> "Only events of this category")
                    .value_parser(value_parser!(EventCategory)),
            )
            .arg(arg!(--location <LOCATION> "Only events at this location"))
            .arg(
                arg!(-m --month <MONTH> "Only events in this month (1-12), including past ones")
                    .value_parser(value_parser!(u32).range(1..=12)),
            )
            .arg(arg!(--favorites "Only favorited events"))
            .arg(arg!(--past "Show the past events instead of summarizing them"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            category: matches.get_one("category").copied(),
            location: matches.get_one("location").cloned(),
            month: matches.get_one("month").copied(),
            favorites: matches.get_flag("favorites"),
            past: matches.get_flag("past"),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let filters = FilterState {
            category: self.category,
            location: self.location,
            month: self.month.map(|m| m - 1),
            only_favorites: self.favorites,
        };
        let view = ctx.agenda.view(&filters, &ctx.favorites, ctx.today);

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            ArgOutputFormat::Text => {
                let profile = ctx.agenda.region().profile();
                println!(
                    "{} - {}\n",
                    profile.full_title.bold(),
                    ctx.agenda.year()
                );
                let formatter = EventFormatter::new(&ctx.favorites).with_past(self.past);
                formatter.write_view(&mut io::stdout(), &view)?;
            }
        }
        Ok(())
    }
}
