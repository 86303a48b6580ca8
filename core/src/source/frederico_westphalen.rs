// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Curated 2026 calendar for the Frederico Westphalen region, transcribed
//! from the administration's published schedule. Dates are absolute; no
//! rule expansion happens here. Sector meetings are split into a musicians'
//! meeting plus a parallel organists' technical meeting.

use chrono::NaiveDate;

use crate::datetime::parse_literal_date;
use crate::event::{EventCategory, MusicalEvent};

const YEAR: i32 = 2026;

fn date(literal: &str) -> Option<NaiveDate> {
    parse_literal_date(literal, YEAR)
}

fn curated(
    id: &str,
    title: &str,
    location: &str,
    literal: &str,
    time: &str,
    category: EventCategory,
) -> MusicalEvent {
    MusicalEvent::new(id, title, location, date(literal), time, category).with_special(true)
}

fn sector_meeting(id_base: &str, location: &str, literal: &str) -> [MusicalEvent; 2] {
    [
        curated(
            id_base,
            "Reunião Setor Musical",
            location,
            literal,
            "09:00",
            EventCategory::Reuniao,
        ),
        curated(
            &format!("{id_base}-tech"),
            "Reunião Técnica para Organistas",
            location,
            literal,
            "09:00",
            EventCategory::ReuniaoTecnicaOrganistas,
        ),
    ]
}

pub(super) fn events() -> Vec<MusicalEvent> {
    let mut events = Vec::new();

    events.extend(sector_meeting("fw-1", "Frederico Westphalen Central", "11/01/2026"));
    events.push(curated(
        "fw-2",
        "Ensaio Geral por Família - Palhetas",
        "Coronel Bicaco",
        "18/01/2026",
        "09:00",
        EventCategory::EnsaioGeral,
    ));
    events.push(curated(
        "fw-3",
        "Ensaio Regional",
        "Coronel Bicaco",
        "25/01/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-4", "Palmeira das Missões", "01/02/2026"));
    events.push(curated(
        "fw-5",
        "Ensaio Geral por Família - Cordas",
        "Frederico Westphalen Central",
        "22/02/2026",
        "09:00",
        EventCategory::EnsaioGeral,
    ));
    events.push(curated(
        "fw-6",
        "Ensaio Regional",
        "Palmeira das Missões",
        "15/03/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.push(curated(
        "fw-7",
        "Ensaio Geral por Família - Bocais",
        "Palmeira das Missões",
        "29/03/2026",
        "09:00",
        EventCategory::EnsaioGeral,
    ));
    events.extend(sector_meeting("fw-8", "Frederico Westphalen Central", "05/04/2026"));
    events.push(curated(
        "fw-9",
        "Ensaio Regional",
        "Frederico Westphalen Central",
        "19/04/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-10", "Palmeira das Missões", "03/05/2026"));
    events.push(curated(
        "fw-11",
        "Ensaio Regional",
        "Tenente Portela",
        "24/05/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-12", "Frederico Westphalen Central", "05/07/2026"));
    events.push(curated(
        "fw-13",
        "Ensaio Regional",
        "Campo Novo",
        "19/07/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-14", "Palmeira das Missões", "02/08/2026"));
    events.push(curated(
        "fw-15",
        "Ensaio Regional",
        "Iraí",
        "23/08/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.push(curated(
        "fw-16",
        "Ensaio Regional",
        "Palmeira das Missões",
        "27/09/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-17", "Frederico Westphalen Central", "04/10/2026"));
    events.push(curated(
        "fw-18",
        "Ensaio Regional",
        "Nonoai",
        "18/10/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));
    events.extend(sector_meeting("fw-19", "Palmeira das Missões", "01/11/2026"));
    events.push(
        curated(
            "fw-20",
            "Ensaio Regional",
            "Ronda Alta Aparecida",
            "02/11/2026",
            "09:00",
            EventCategory::EnsaioRegional,
        )
        .with_description("Feriado - Finados"),
    );
    events.push(curated(
        "fw-21",
        "Ensaio Regional",
        "Planalto Área Indígena",
        "13/12/2026",
        "09:00",
        EventCategory::EnsaioRegional,
    ));

    events
}
