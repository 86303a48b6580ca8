// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Rule catalog for the Uruguaiana region, the only computed region: local
//! rehearsals and joint practices recur monthly on ordinal weekdays, the
//! rest are one-off dates (border congregations, regionals, and the
//! Uruguaiana special events).

use chrono::Weekday;

use super::{FixedRule, RecurringRule};
use crate::datetime::WeekOrdinal;
use crate::event::EventCategory;

pub(super) const RECURRING: &[RecurringRule] = &[
    // Local rehearsals, every month of the year.
    RecurringRule {
        title: "Ensaio Local",
        location: "Uruguaiana",
        weekday: Weekday::Sun,
        ordinal: WeekOrdinal::First,
        start_month: 0,
        time: "17:00",
        category: EventCategory::EnsaioLocal,
    },
    RecurringRule {
        title: "Ensaio Local",
        location: "São Borja",
        weekday: Weekday::Sun,
        ordinal: WeekOrdinal::Second,
        start_month: 0,
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    RecurringRule {
        title: "Ensaio Local",
        location: "Itaqui",
        weekday: Weekday::Sun,
        ordinal: WeekOrdinal::Third,
        start_month: 0,
        time: "17:00",
        category: EventCategory::EnsaioLocal,
    },
    RecurringRule {
        title: "Ensaio Local",
        location: "Alegrete",
        weekday: Weekday::Sun,
        ordinal: WeekOrdinal::Last,
        start_month: 0,
        time: "17:00",
        category: EventCategory::EnsaioLocal,
    },
    // GEM joint practices start in March; January and February are recess.
    RecurringRule {
        title: "Prática em Conjunto",
        location: "Itaqui",
        weekday: Weekday::Sat,
        ordinal: WeekOrdinal::First,
        start_month: 2,
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
    RecurringRule {
        title: "Prática em Conjunto",
        location: "Alegrete",
        weekday: Weekday::Sat,
        ordinal: WeekOrdinal::Second,
        start_month: 2,
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
    RecurringRule {
        title: "Prática em Conjunto",
        location: "Uruguaiana",
        weekday: Weekday::Sat,
        ordinal: WeekOrdinal::Second,
        start_month: 2,
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
    RecurringRule {
        title: "Prática em Conjunto",
        location: "São Borja",
        weekday: Weekday::Sat,
        ordinal: WeekOrdinal::Last,
        start_month: 2,
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
];

pub(super) const FIXED: &[FixedRule] = &[
    // Border congregations rehearse on ad-hoc dates.
    FixedRule {
        title: "Ensaio Local",
        location: "Libres",
        date: Some("08/03"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Libres",
        date: Some("10/05"),
        time: "10:00",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Libres",
        date: Some("12/07"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Libres",
        date: Some("08/11"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Artigas",
        date: Some("29/03"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Artigas",
        date: Some("31/05"),
        time: "10:00",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Artigas",
        date: Some("26/07"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Artigas",
        date: Some("22/11"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Bella Union",
        date: Some("22/03"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Bella Union",
        date: Some("13/08"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    FixedRule {
        title: "Ensaio Local",
        location: "Bella Union",
        date: Some("20/12"),
        time: "19:30",
        category: EventCategory::EnsaioLocal,
    },
    // Regional rehearsals; the border locations are still unscheduled.
    FixedRule {
        title: "Ensaio Regional",
        location: "Alegrete",
        date: Some("12/04"),
        time: "09:00",
        category: EventCategory::EnsaioRegional,
    },
    FixedRule {
        title: "Ensaio Regional",
        location: "São Borja",
        date: Some("19/07"),
        time: "09:00",
        category: EventCategory::EnsaioRegional,
    },
    FixedRule {
        title: "Ensaio Regional",
        location: "Uruguaiana",
        date: Some("22/08"),
        time: "19:00",
        category: EventCategory::EnsaioRegional,
    },
    FixedRule {
        title: "Ensaio Regional",
        location: "Itaqui",
        date: Some("11/10"),
        time: "09:00",
        category: EventCategory::EnsaioRegional,
    },
    FixedRule {
        title: "Ensaio Regional",
        location: "Artigas",
        date: None,
        time: "A definir",
        category: EventCategory::EnsaioRegional,
    },
    FixedRule {
        title: "Ensaio Regional",
        location: "Libres",
        date: None,
        time: "A definir",
        category: EventCategory::EnsaioRegional,
    },
    // Uruguaiana special events.
    FixedRule {
        title: "Prática Geral",
        location: "Uruguaiana",
        date: Some("24/05"),
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
    FixedRule {
        title: "Prática Geral",
        location: "Uruguaiana",
        date: Some("13/12"),
        time: "Após o Santo Culto",
        category: EventCategory::PraticaConjunto,
    },
    FixedRule {
        title: "Teste e Exames de Músicos e Organistas",
        location: "Uruguaiana",
        date: Some("21/03"),
        time: "A definir",
        category: EventCategory::Exame,
    },
    FixedRule {
        title: "Teste e Exames de Músicos e Organistas",
        location: "Uruguaiana",
        date: Some("22/08"),
        time: "A definir",
        category: EventCategory::Exame,
    },
    FixedRule {
        title: "Ensaio Geral Por Famílias",
        location: "Uruguaiana",
        date: Some("22/03"),
        time: "08:30",
        category: EventCategory::EnsaioGeral,
    },
    FixedRule {
        title: "Ensaio Geral Por Famílias",
        location: "Uruguaiana",
        date: Some("15/11"),
        time: "08:30",
        category: EventCategory::EnsaioGeral,
    },
    FixedRule {
        title: "Reunião Setor Musical",
        location: "Uruguaiana",
        date: Some("01/03"),
        time: "14:00",
        category: EventCategory::Reuniao,
    },
    FixedRule {
        title: "Reunião Setor Musical",
        location: "Uruguaiana",
        date: Some("14/06"),
        time: "14:00",
        category: EventCategory::Reuniao,
    },
    FixedRule {
        title: "Reunião Setor Musical",
        location: "Uruguaiana",
        date: Some("13/12"),
        time: "14:00",
        category: EventCategory::Reuniao,
    },
];
