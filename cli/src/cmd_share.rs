// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::{
    CHURCH_GROUPS, EventStats, GemSchedule, church_share_text, event_share_text,
    google_calendar_link, main_address_for,
};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::cli::Context;

/// Print the share text of an event, ready to paste into a message, plus
/// the resolved address and a calendar link when available. With
/// `--church`, shares a church from the dataset instead.
#[derive(Debug, Clone)]
pub struct CmdShare {
    pub id: String,
    pub church: bool,
}

impl CmdShare {
    pub const NAME: &str = "share";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print the share text for an event or a church")
            .arg(arg!(id: <ID> "The event id, as shown by `agenda list`"))
            .arg(arg!(--church "Treat the argument as a church name instead"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let id = matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone();
        let church = matches.get_flag("church");
        Self { id, church }
    }

    pub fn run(self, ctx: &Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "sharing...");
        if self.church {
            let profile = ctx.agenda.region().profile();
            if !profile.has_churches {
                println!(
                    "Ainda não temos o cadastro de igrejas da região {}.",
                    profile.name
                );
                return Ok(());
            }
            return share_church(&self.id);
        }

        let Some(event) = ctx.agenda.find_event(&self.id) else {
            return Err(format!("Evento não encontrado: {}", self.id).into());
        };

        println!("{}", event_share_text(event));

        if let Some(address) = main_address_for(&event.location) {
            println!("\n🗺️ Endereço: {address}");
        }
        if let Some(link) = google_calendar_link(event) {
            println!("\n{}", "Adicionar à agenda:".bold());
            println!("{link}");
        }
        if let Some(stats) = &event.stats {
            println!();
            print_stats(stats);
        }
        if let Some(schedule) = &event.gem_schedule {
            println!();
            print_gem_schedule(schedule);
        }
        Ok(())
    }
}

fn share_church(name: &str) -> Result<(), Box<dyn Error>> {
    let needle = name.to_lowercase();
    for group in CHURCH_GROUPS {
        for church in group.churches {
            if church.name.to_lowercase().contains(&needle) {
                println!("{}", church_share_text(church, group.region_name));
                return Ok(());
            }
        }
    }
    Err(format!("Igreja não encontrada: {name}").into())
}

fn print_stats(stats: &EventStats) {
    println!("{}", "Resumo do ensaio".bold());
    println!("  Hino de abertura: {}", stats.hino_abertura);
    println!("  Ancião: {}", stats.anciao);
    println!("  Palavra: {}", stats.palavra);
    if !stats.regentes.is_empty() {
        println!("  Regentes: {}", stats.regentes.join(", "));
    }
    println!("  Músicos: {}", stats.total_musicians);
    for instrument in &stats.instruments {
        println!("    {}: {}", instrument.name, instrument.count);
    }
    if !stats.hinos_tocados.is_empty() {
        let hinos: Vec<String> = stats.hinos_tocados.iter().map(u32::to_string).collect();
        println!("  Hinos tocados: {}", hinos.join(", "));
    }
    for family in &stats.families {
        println!(
            "  {}: {} ({:.1}% de {:.1}% ideal)",
            family.name, family.total, family.percentage, family.ideal_percentage
        );
    }
    if let Some(organistas) = stats.organistas {
        println!("  Organistas: {organistas}");
    }
    if let Some(examinadoras) = stats.examinadoras {
        println!("  Examinadoras: {examinadoras}");
    }
    if let Some(encarregados) = stats.encarregados_regionais {
        println!("  Encarregados regionais: {encarregados}");
    }
    if let Some(total) = stats.total_geral {
        println!("  Total geral: {total}");
    }
}

fn print_gem_schedule(schedule: &GemSchedule) {
    println!("{}", "Programação GEM".bold());
    println!("  Escala: {}", schedule.scale);
    println!("  Hinos RJM: {}", schedule.hinos_rjm);
    println!("  Hinos da meia hora: {}", schedule.hinos_meia_hora);
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::{Agenda, Favorites, Region};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn context(region: Region) -> Context {
        Context {
            agenda: Agenda::new(region, 2026),
            favorites: Favorites::default(),
            favorites_path: PathBuf::from("favorites.json"),
            today: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn unknown_church_is_an_error() {
        let cmd = CmdShare {
            id: "Igreja Inexistente".into(),
            church: true,
        };
        assert!(cmd.run(&context(Region::Uruguaiana)).is_err());
    }

    #[test]
    fn churchless_region_gets_a_notice_instead_of_a_lookup() {
        // Ijuí has no church registry, so the name is never looked up
        // and the command succeeds with a notice instead of an error.
        let cmd = CmdShare {
            id: "Igreja Inexistente".into(),
            church: true,
        };
        assert!(cmd.run(&context(Region::Ijui)).is_ok());
    }
}
