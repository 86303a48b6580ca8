// SPDX-FileCopyrightText: 2026 Agenda Musical contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only reference data about the region's churches, used for display
//! and for resolving an event location to a shareable address. Never
//! consulted by filtering, sorting, or grouping.

/// A single church with its address and service schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Church {
    pub name: &'static str,
    pub address: &'static str,
    /// Weekly service schedule, free text.
    pub services: &'static str,
    /// Youth meeting (RJM) schedule, when held.
    pub rjm: Option<&'static str>,
    pub obs: Option<&'static str>,
    /// Central or only church of its city.
    pub is_main: bool,
}

/// Churches of one city or area of the region.
#[derive(Debug, Clone, Copy)]
pub struct ChurchGroup {
    pub region_name: &'static str,
    pub churches: &'static [Church],
}

pub const CHURCH_GROUPS: &[ChurchGroup] = &[
    ChurchGroup {
        region_name: "Uruguaiana (RS)",
        churches: &[
            Church {
                name: "São João",
                address: "Rua Min. Joaquim Murtinho, 2869, Uruguaiana - RS",
                services: "Quarta, Sábado e Domingo (19h30)",
                rjm: Some("Domingo (10h)"),
                obs: None,
                is_main: true,
            },
            Church {
                name: "Cabo Luís Quevedo",
                address: "Rua Pinheiro Machado, 600",
                services: "Segunda e Sexta (19h30)",
                rjm: None,
                obs: None,
                is_main: false,
            },
            Church {
                name: "Santo Inácio",
                address: "R. Dr. Fábio de Barros, 50 - Santo Inacio, Uruguaiana - RS, 97513-222",
                services: "Segunda e Quinta (19h30)",
                rjm: None,
                obs: None,
                is_main: false,
            },
            Church {
                name: "União das Vilas",
                address: "Rua Imbaa, 26 - Quadra Q",
                services: "Terça e Sexta (19h30)",
                rjm: Some("Domingo (10h)"),
                obs: None,
                is_main: false,
            },
            Church {
                name: "Vila Imbaá",
                address: "Rodovia BR-472",
                services: "Domingo (16h)",
                rjm: None,
                obs: Some("Horário diferenciado"),
                is_main: false,
            },
        ],
    },
    ChurchGroup {
        region_name: "Itaqui (RS)",
        churches: &[
            Church {
                name: "COHAB",
                address: "Rua Coronel Assunção, 270, Itaqui - RS",
                services: "Quinta, Sábado e Domingo (19h30)",
                rjm: Some("Domingo (10h)"),
                obs: None,
                is_main: true,
            },
            Church {
                name: "Vila Nova",
                address: "Quadra Area Verde, 21",
                services: "Terça e Sexta (19h30)",
                rjm: None,
                obs: None,
                is_main: false,
            },
        ],
    },
    ChurchGroup {
        region_name: "Outras Cidades",
        churches: &[
            Church {
                name: "São Borja - Rodoviária",
                address: "Rua Frei Caneca, 1065, São Borja - RS",
                services: "Terça, Sábado e Domingo (19h30)",
                rjm: Some("Domingo (10h)"),
                obs: None,
                is_main: true,
            },
            Church {
                name: "Alegrete - Vila Nova",
                address: "Rua Celestino Prunes, 328, Alegrete - RS",
                services: "Quarta, Sábado e Domingo (19h30)",
                rjm: Some("Domingo (10h)"),
                obs: None,
                is_main: true,
            },
            Church {
                name: "Barra do Quaraí - Centro",
                address: "Rua General Neto, 913, Barra do Quaraí - RS",
                services: "Sábado (19h30)",
                rjm: None,
                obs: None,
                is_main: true,
            },
            Church {
                name: "Quaraí - Santa Carmem",
                address: "Av. Airton Senna, 303, Quaraí - RS",
                services: "Terça e Sábado (19h30)",
                rjm: None,
                obs: None,
                is_main: true,
            },
        ],
    },
    ChurchGroup {
        region_name: "Exterior (Uruguai e Argentina)",
        churches: &[
            Church {
                name: "Artigas (UY) - Barrio 25 de agosto",
                address: "Calle 20 de Setiembre, 722, Artigas, Uruguay",
                services: "Horários a confirmar",
                rjm: None,
                obs: Some("Consulte a administração local"),
                is_main: false,
            },
            Church {
                name: "Artigas (UY) - Barrio Industrial",
                address: "Calle Celiar López, 935, Artigas, Uruguay",
                services: "Horários a confirmar",
                rjm: None,
                obs: Some("Consulte a administração local"),
                is_main: true,
            },
            Church {
                name: "Bella Unión (UY) - Pueblo Las Piedras",
                address: "Calle A2, 3156, Bella Unión, Uruguay",
                services: "Horários a confirmar",
                rjm: None,
                obs: Some("Consulte a administração local"),
                is_main: true,
            },
            Church {
                name: "Paso de los Libres (AR)",
                address: "Bartolomé Mitre, 2030, Paso de los Libres, Corrientes, Argentina",
                services: "Horários a confirmar",
                rjm: None,
                obs: Some("Consulte a administração local"),
                is_main: true,
            },
        ],
    },
];

// Event locations that no substring pass resolves (shorthand names used by
// the rule tables for border cities).
const FALLBACK_ADDRESSES: &[(&str, &str)] = &[
    ("Libres", "Bartolomé Mitre, 2030, Paso de los Libres, Corrientes, Argentina"),
    ("Artigas", "Calle Celiar López, 935, Artigas, Uruguay"),
    ("Bella Union", "Calle A2, 3156, Bella Unión, Uruguay"),
    ("São Borja", "Rua Frei Caneca, 1065, São Borja - RS"),
    ("Alegrete", "Rua Celestino Prunes, 328, Alegrete - RS"),
    ("Itaqui", "Rua Coronel Assunção, 270, Itaqui - RS"),
    ("Uruguaiana", "Rua Min. Joaquim Murtinho, 2869, Uruguaiana - RS"),
];

/// Resolves an event location to the main church address of that city.
///
/// Matching is deliberately loose, since event locations are free text and
/// not a foreign key: first a case-insensitive substring match on group
/// names, then on main-church names and addresses, then a fixed fallback
/// table for the shorthand names used by the rule catalogs.
pub fn main_address_for(location: &str) -> Option<&'static str> {
    let needle = location.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(group) = CHURCH_GROUPS
        .iter()
        .find(|group| group.region_name.to_lowercase().contains(&needle))
        && let Some(main) = group.churches.iter().find(|church| church.is_main)
    {
        return Some(main.address);
    }

    for group in CHURCH_GROUPS {
        for church in group.churches {
            if church.is_main
                && (church.name.to_lowercase().contains(&needle)
                    || church.address.to_lowercase().contains(&needle))
            {
                return Some(church.address);
            }
        }
    }

    FALLBACK_ADDRESSES
        .iter()
        .find(|(name, _)| *name == location)
        .map(|(_, address)| *address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_by_group_name() {
        assert_eq!(
            main_address_for("Uruguaiana"),
            Some("Rua Min. Joaquim Murtinho, 2869, Uruguaiana - RS")
        );
        assert_eq!(
            main_address_for("Itaqui"),
            Some("Rua Coronel Assunção, 270, Itaqui - RS")
        );
    }

    #[test]
    fn resolves_by_main_church_name_or_address() {
        assert_eq!(
            main_address_for("Alegrete"),
            Some("Rua Celestino Prunes, 328, Alegrete - RS")
        );
        assert_eq!(
            main_address_for("São Borja"),
            Some("Rua Frei Caneca, 1065, São Borja - RS")
        );
        assert_eq!(
            main_address_for("Libres"),
            Some("Bartolomé Mitre, 2030, Paso de los Libres, Corrientes, Argentina")
        );
    }

    #[test]
    fn resolves_accent_mismatches_via_fallback() {
        // "Bella Union" in the rule tables misses the accented "Bella
        // Unión" in the dataset, so only the fallback table catches it.
        assert_eq!(
            main_address_for("Bella Union"),
            Some("Calle A2, 3156, Bella Unión, Uruguay")
        );
    }

    #[test]
    fn unknown_locations_yield_none() {
        assert_eq!(main_address_for("Porto Alegre"), None);
        assert_eq!(main_address_for(""), None);
    }

    #[test]
    fn every_rule_catalog_location_resolves() {
        for location in [
            "Uruguaiana",
            "São Borja",
            "Itaqui",
            "Alegrete",
            "Libres",
            "Artigas",
            "Bella Union",
        ] {
            assert!(main_address_for(location).is_some(), "{location} did not resolve");
        }
    }
}
