// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;

use crate::cli::Context;

/// Toggle an event in or out of the favorites set and persist it.
#[derive(Debug, Clone)]
pub struct CmdFavorite {
    pub id: String,
}

impl CmdFavorite {
    pub const NAME: &str = "favorite";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("fav")
            .about("Toggle an event as favorite")
            .arg(arg!(id: <ID> "The event id, as shown by `agenda list`"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let id = matches
            .get_one::<String>("id")
            .expect("id is required")
            .clone();
        Self { id }
    }

    pub fn run(self, ctx: &mut Context) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling favorite...");
        let Some(event) = ctx.agenda.find_event(&self.id) else {
            return Err(format!("Evento não encontrado: {}", self.id).into());
        };
        let title = format!("{} - {}", event.title, event.location);

        if ctx.favorites.toggle(&self.id) {
            println!("{} Favorito adicionado: {title}", "♥".red());
        } else {
            println!("Favorito removido: {title}");
        }
        ctx.favorites.save(&ctx.favorites_path);
        Ok(())
    }
}
