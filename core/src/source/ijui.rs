// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Curated 2026 calendar for the Ijuí region (Cruz Alta/Ijuí and
//! surroundings), transcribed from the published musical-services schedule.

use chrono::NaiveDate;

use crate::datetime::parse_literal_date;
use crate::event::{EventCategory, MusicalEvent};

const YEAR: i32 = 2026;

fn date(literal: &str) -> Option<NaiveDate> {
    parse_literal_date(literal, YEAR)
}

fn regional(id: &str, location: &str, literal: &str) -> MusicalEvent {
    MusicalEvent::new(
        id,
        "Ensaio Regional",
        location,
        date(literal),
        "09:00",
        EventCategory::EnsaioRegional,
    )
    .with_special(true)
}

fn sector_meeting(id_base: &str, literal: &str) -> [MusicalEvent; 2] {
    [
        MusicalEvent::new(
            id_base,
            "Reunião Setor Musical",
            "Ijuí",
            date(literal),
            "08:30",
            EventCategory::Reuniao,
        )
        .with_special(true),
        MusicalEvent::new(
            format!("{id_base}-tech"),
            "Reunião Técnica para Organistas",
            "Ijuí",
            date(literal),
            "08:30",
            EventCategory::ReuniaoTecnicaOrganistas,
        )
        .with_special(true),
    ]
}

pub(super) fn events() -> Vec<MusicalEvent> {
    let mut events = Vec::new();

    events.push(regional("ci-1", "Cruz Alta", "15/02/2026"));
    events.extend(sector_meeting("ci-2", "22/02/2026"));
    events.push(
        MusicalEvent::new(
            "ci-3",
            "Ensaio Geral por Família",
            "Ijuí",
            date("22/02/2026"),
            "10:00",
            EventCategory::EnsaioGeral,
        )
        .with_special(true),
    );
    events.push(regional("ci-4", "Ijuí", "15/03/2026"));
    events.push(regional("ci-5", "Tucunduva", "26/04/2026"));
    events.push(regional("ci-6", "São Luiz Gonzaga", "17/05/2026"));
    events.push(regional("ci-7", "São Miguel das Missões", "02/08/2026"));
    events.extend(sector_meeting("ci-8", "30/08/2026"));
    events.push(regional("ci-9", "Independência", "20/09/2026"));
    events.push(regional("ci-10", "Santo Ângelo", "18/10/2026"));
    events.push(regional("ci-11", "Santa Rosa", "01/11/2026"));
    events.extend(sector_meeting("ci-12", "29/11/2026"));
    events.push(regional("ci-13", "Três Passos", "06/12/2026"));

    events
}
