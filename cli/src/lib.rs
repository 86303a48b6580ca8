// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_churches;
mod cmd_favorite;
mod cmd_list;
mod cmd_share;
mod config;
mod event_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
