// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use agenda_core::{APP_NAME, Agenda, Favorites, Region};
use chrono::{Datelike, Local, NaiveDate};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_churches::CmdChurches;
use crate::cmd_favorite::CmdFavorite;
use crate::cmd_list::CmdList;
use crate::cmd_share::CmdShare;
use crate::config::parse_config;

/// Run the agenda command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {}", "Erro:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Everything a command needs once the configuration is resolved: the
/// generated agenda plus the persisted favorites and where to write them
/// back.
pub(crate) struct Context {
    pub agenda: Agenda,
    pub favorites: Favorites,
    pub favorites_path: PathBuf,
    pub today: NaiveDate,
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Region override, taking precedence over the configuration
    pub region: Option<Region>,

    /// Target year for event generation
    pub year: Option<i32>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Agenda Musical - ensaios, reuniões e igrejas da região.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // no subcommand defaults to the agenda listing
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/agenda/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(-r --region [REGION] "Region whose agenda to use")
                    .value_parser(value_parser!(Region))
                    .global(true),
            )
            .arg(
                arg!(-y --year [YEAR] "Target year, defaults to the current one")
                    .value_parser(value_parser!(i32))
                    .global(true),
            )
            .subcommand(CmdList::command())
            .subcommand(CmdChurches::command())
            .subcommand(CmdFavorite::command())
            .subcommand(CmdShare::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let command = Self::command();
        let matches = command.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = Self::command();
        let matches = command.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdChurches::NAME, matches)) => Churches(CmdChurches::from(matches)),
            Some((CmdFavorite::NAME, matches)) => Favorite(CmdFavorite::from(matches)),
            Some((CmdShare::NAME, matches)) => Share(CmdShare::from(matches)),
            None => List(CmdList::default()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        let region = matches.get_one("region").copied();
        let year = matches.get_one("year").copied();
        Ok(Cli {
            config,
            region,
            year,
            command,
        })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config)?;

        let region = self.region.or(config.region).unwrap_or(Region::Uruguaiana);
        let now = Local::now();
        let year = self.year.unwrap_or_else(|| now.year());
        let favorites_path = config.favorites_path()?;

        let ctx = Context {
            agenda: Agenda::new(region, year),
            favorites: Favorites::load(&favorites_path),
            favorites_path,
            today: now.date_naive(),
        };
        self.command.run(ctx)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the agenda, grouped by month
    List(CmdList),

    /// List the churches of the region
    Churches(CmdChurches),

    /// Toggle an event as favorite
    Favorite(CmdFavorite),

    /// Print the share text for an event or church
    Share(CmdShare),
}

impl Commands {
    /// Run the command against the resolved context
    pub(crate) fn run(self, mut ctx: Context) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            List(a) => a.run(&ctx),
            Churches(a) => a.run(&ctx),
            Favorite(a) => a.run(&mut ctx),
            Share(a) => a.run(&ctx),
        }
    }
}
