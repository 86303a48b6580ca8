// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use agenda_core::{AgendaView, Favorites, MonthGroup, MusicalEvent, format_event_date};
use colored::Colorize;

/// Renders an [`AgendaView`] for the terminal: bold month headers, one line
/// per event, special events highlighted, favorites marked with a heart.
#[derive(Debug)]
pub struct EventFormatter<'a> {
    favorites: &'a Favorites,
    show_past: bool,
}

impl<'a> EventFormatter<'a> {
    pub fn new(favorites: &'a Favorites) -> Self {
        Self {
            favorites,
            show_past: false,
        }
    }

    /// Expand the past section instead of summarizing it, mirroring the
    /// collapsed-by-default behavior of the original schedule.
    pub fn with_past(mut self, show_past: bool) -> Self {
        self.show_past = show_past;
        self
    }

    pub fn write_view(&self, out: &mut impl Write, view: &AgendaView) -> io::Result<()> {
        if view.filtered_count == 0 {
            writeln!(out, "Nenhum evento encontrado.")?;
            return Ok(());
        }

        for group in &view.main {
            self.write_group(out, group, false)?;
        }

        if view.has_past() {
            if self.show_past {
                writeln!(out, "{}", "Eventos passados".dimmed().italic())?;
                for group in &view.past {
                    self.write_group(out, group, true)?;
                }
            } else {
                let hidden = view.filtered_count - view.upcoming_count;
                writeln!(
                    out,
                    "{}",
                    format!("{hidden} evento(s) passado(s) ocultos. Use --past para mostrar.")
                        .dimmed()
                )?;
            }
        }

        writeln!(out, "{} evento(s) por vir.", view.upcoming_count)?;
        Ok(())
    }

    fn write_group(&self, out: &mut impl Write, group: &MonthGroup, past: bool) -> io::Result<()> {
        writeln!(out, "{}", group.label.bold().underline())?;
        for event in &group.events {
            self.write_event(out, event, past)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn write_event(&self, out: &mut impl Write, event: &MusicalEvent, past: bool) -> io::Result<()> {
        // Pad before coloring, the ANSI escapes would skew the columns.
        let date = format!("{:<20}", format_event_date(event.date));
        let time = format!("{:<20}", event.time);
        let mut title = format!("{} - {}", event.title, event.location);
        if let Some(description) = &event.description {
            title = format!("{title} ({description})");
        }
        if self.favorites.contains(&event.id) {
            title = format!("{title} ♥");
        }

        let line = format!("  {} {date}{time}{title}", event.id.dimmed());
        if past {
            writeln!(out, "{} {}", line.dimmed(), "(Passado)".dimmed())?;
        } else if event.is_special {
            writeln!(out, "{}", line.yellow().bold())?;
        } else {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agenda_core::{Agenda, FilterState, Region};
    use chrono::NaiveDate;

    fn render(view: &AgendaView, favorites: &Favorites, show_past: bool) -> String {
        colored::control::set_override(false);
        let mut buffer = Vec::new();
        EventFormatter::new(favorites)
            .with_past(show_past)
            .write_view(&mut buffer, view)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn renders_month_headers_and_counts() {
        let agenda = Agenda::new(Region::Ijui, 2026);
        let favorites = Favorites::default();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let view = agenda.view(&FilterState::default(), &favorites, today);

        let output = render(&view, &favorites, false);
        assert!(output.contains("Fevereiro de 2026"));
        assert!(output.contains("Ensaio Regional - Cruz Alta"));
        assert!(output.contains("16 evento(s) por vir."));
    }

    #[test]
    fn marks_favorites_and_past_events() {
        let agenda = Agenda::new(Region::Ijui, 2026);
        let mut favorites = Favorites::default();
        favorites.toggle("ci-13");
        let today = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let view = agenda.view(&FilterState::default(), &favorites, today);

        let output = render(&view, &favorites, true);
        assert!(output.contains("Ensaio Regional - Três Passos ♥"));
        assert!(output.contains("Eventos passados"));
        assert!(output.contains("(Passado)"));
    }

    #[test]
    fn past_section_is_summarized_by_default() {
        let agenda = Agenda::new(Region::Ijui, 2026);
        let favorites = Favorites::default();
        let today = NaiveDate::from_ymd_opt(2026, 12, 1).unwrap();
        let view = agenda.view(&FilterState::default(), &favorites, today);

        let output = render(&view, &favorites, false);
        assert!(!output.contains("Eventos passados"));
        assert!(output.contains("15 evento(s) passado(s) ocultos."));
    }

    #[test]
    fn empty_view_prints_a_notice() {
        let agenda = Agenda::new(Region::Ijui, 2026);
        let favorites = Favorites::default();
        let filters = FilterState {
            location: Some("Lugar Nenhum".into()),
            ..FilterState::default()
        };
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let view = agenda.view(&filters, &favorites, today);

        let output = render(&view, &favorites, false);
        assert!(output.contains("Nenhum evento encontrado."));
    }
}
