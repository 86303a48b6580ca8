// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datetime::time_rank;

/// Closed set of event kinds on the musical agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventCategory {
    /// Congregation-level rehearsal.
    #[serde(rename = "Ensaio Local")]
    EnsaioLocal,

    /// Region-wide rehearsal.
    #[serde(rename = "Ensaio Regional")]
    EnsaioRegional,

    /// Joint practice of the youth music groups (GEM).
    #[serde(rename = "Prática em Conjunto")]
    PraticaConjunto,

    /// Music-sector meeting.
    #[serde(rename = "Reunião")]
    Reuniao,

    /// General rehearsal, usually split by instrument family.
    #[serde(rename = "Ensaio Geral")]
    EnsaioGeral,

    /// Musician and organist tests and examinations.
    #[serde(rename = "Exames")]
    Exame,

    /// Technical meeting for organists.
    #[serde(rename = "Reunião Técnica Organistas")]
    ReuniaoTecnicaOrganistas,
}

const CATEGORY_ENSAIO_LOCAL: &str = "Ensaio Local";
const CATEGORY_ENSAIO_REGIONAL: &str = "Ensaio Regional";
const CATEGORY_PRATICA_CONJUNTO: &str = "Prática em Conjunto";
const CATEGORY_REUNIAO: &str = "Reunião";
const CATEGORY_ENSAIO_GERAL: &str = "Ensaio Geral";
const CATEGORY_EXAME: &str = "Exames";
const CATEGORY_REUNIAO_TECNICA: &str = "Reunião Técnica Organistas";

impl EventCategory {
    /// Whether events of this category are highlighted by default: only
    /// regional rehearsals and sector meetings.
    pub fn is_special_by_default(self) -> bool {
        matches!(self, EventCategory::EnsaioRegional | EventCategory::Reuniao)
    }
}

impl AsRef<str> for EventCategory {
    fn as_ref(&self) -> &str {
        match self {
            EventCategory::EnsaioLocal => CATEGORY_ENSAIO_LOCAL,
            EventCategory::EnsaioRegional => CATEGORY_ENSAIO_REGIONAL,
            EventCategory::PraticaConjunto => CATEGORY_PRATICA_CONJUNTO,
            EventCategory::Reuniao => CATEGORY_REUNIAO,
            EventCategory::EnsaioGeral => CATEGORY_ENSAIO_GERAL,
            EventCategory::Exame => CATEGORY_EXAME,
            EventCategory::ReuniaoTecnicaOrganistas => CATEGORY_REUNIAO_TECNICA,
        }
    }
}

impl Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventCategory {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_ENSAIO_LOCAL => Ok(EventCategory::EnsaioLocal),
            CATEGORY_ENSAIO_REGIONAL => Ok(EventCategory::EnsaioRegional),
            CATEGORY_PRATICA_CONJUNTO => Ok(EventCategory::PraticaConjunto),
            CATEGORY_REUNIAO => Ok(EventCategory::Reuniao),
            CATEGORY_ENSAIO_GERAL => Ok(EventCategory::EnsaioGeral),
            CATEGORY_EXAME => Ok(EventCategory::Exame),
            CATEGORY_REUNIAO_TECNICA => Ok(EventCategory::ReuniaoTecnicaOrganistas),
            _ => Err(()),
        }
    }
}

/// A single entry on the musical agenda.
///
/// `date` is `None` for "to be determined" events; `time` is free text (a
/// clock time, a qualitative phrase, or the TBD marker) and carries a
/// precomputed sort rank so ordering never re-parses it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MusicalEvent {
    /// Opaque identifier, unique within one generated batch only.
    pub id: String,

    /// Human-readable event name; repeats across events.
    pub title: String,

    /// Free-text place name, loosely matched against the church dataset.
    pub location: String,

    /// Calendar date, or `None` when still to be determined.
    pub date: Option<NaiveDate>,

    /// Raw time descriptor, kept verbatim for display.
    pub time: String,

    /// The event kind.
    pub category: EventCategory,

    /// Optional free-text annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display-highlight hint; never affects filtering or ordering.
    pub is_special: bool,

    /// Attendance breakdown attached to curated historical events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<EventStats>,

    /// Hymn schedule attached to curated rehearsal events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gem_schedule: Option<GemSchedule>,

    #[serde(skip)]
    time_rank: u32,
}

impl MusicalEvent {
    /// Creates an event, deriving the highlight hint from the category and
    /// the time sort rank from the raw time text.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        date: Option<NaiveDate>,
        time: impl Into<String>,
        category: EventCategory,
    ) -> Self {
        let time = time.into();
        let time_rank = time_rank(&time);
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            date,
            time,
            category,
            description: None,
            is_special: category.is_special_by_default(),
            stats: None,
            gem_schedule: None,
            time_rank,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the derived highlight hint, for curated datasets that set
    /// it explicitly.
    pub fn with_special(mut self, is_special: bool) -> Self {
        self.is_special = is_special;
        self
    }

    pub fn with_stats(mut self, stats: EventStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_gem_schedule(mut self, gem_schedule: GemSchedule) -> Self {
        self.gem_schedule = Some(gem_schedule);
        self
    }

    /// Normalized time-of-day rank used as the same-date tie-breaker.
    pub fn time_rank(&self) -> u32 {
        self.time_rank
    }
}

/// Per-instrument presence count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentStat {
    pub name: String,
    pub count: u32,
}

/// Presence of one instrument family against its ideal share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyStat {
    pub name: String,
    pub total: u32,
    pub percentage: f32,
    pub ideal_percentage: f32,
}

/// Attendance and repertoire breakdown of a past rehearsal. Opaque to the
/// agenda logic; only rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub hino_abertura: u32,
    pub anciao: String,
    pub palavra: String,
    pub regentes: Vec<String>,
    pub total_musicians: u32,
    pub instruments: Vec<InstrumentStat>,
    pub hinos_tocados: Vec<u32>,
    pub families: Vec<FamilyStat>,
    pub organistas: Option<u32>,
    pub examinadoras: Option<u32>,
    pub encarregados_regionais: Option<u32>,
    pub total_geral: Option<u32>,
}

/// Scale and hymn plan for a GEM rehearsal. Opaque to the agenda logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GemSchedule {
    pub scale: String,
    pub hinos_rjm: String,
    pub hinos_meia_hora: String,
}
