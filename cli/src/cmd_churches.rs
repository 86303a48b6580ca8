// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::CHURCH_GROUPS;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::cli::Context;

/// List the churches of the region, grouped by city.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmdChurches;

impl CmdChurches {
    pub const NAME: &str = "churches";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("igrejas")
            .about("List the churches of the region, with addresses and service times")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdChurches
    }

    pub fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing churches...");
        let profile = ctx.agenda.region().profile();
        if !profile.has_churches {
            println!(
                "Ainda não temos o cadastro de igrejas da região {}.",
                profile.name
            );
            return Ok(());
        }

        for group in CHURCH_GROUPS {
            println!("{}", group.region_name.bold().underline());
            for church in group.churches {
                let marker = if church.is_main { " ⛪" } else { "" };
                println!("  {}{marker}", church.name.bold());
                println!("    {}", church.address);
                println!("    Cultos: {}", church.services);
                if let Some(rjm) = church.rjm {
                    println!("    RJM: {rjm}");
                }
                if let Some(obs) = church.obs {
                    println!("    Obs: {}", obs.italic());
                }
            }
            println!();
        }
        Ok(())
    }
}
