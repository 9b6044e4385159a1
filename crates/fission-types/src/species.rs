// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Species
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::fmt;

/// Every particle the data tables or the reaction network can refer to:
/// the bare neutron, each nuclide with tabulated properties, and the
/// lumped "other fission products" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Neutron,
    // Thorium cycle (tabulated data only; not part of the tracked chain)
    Th232,
    Th233,
    Pa233,
    U233,
    // Uranium chain
    U235,
    U236,
    U237,
    U238,
    U239,
    U240,
    // Neptunium
    Np237,
    Np238,
    Np239,
    Np240,
    // Plutonium
    Pu238,
    Pu239,
    Pu240,
    Pu241,
    Pu242,
    Pu243,
    // Americium / curium
    Am241,
    Am242,
    Am243,
    Am244,
    Cm242,
    Cm243,
    Cm244,
    // Fission products
    Kr95,
    Zr104,
    Sn134,
    I135,
    Xe135,
    Xe136,
    /// Lumped bucket for every fission product not tracked individually.
    FpOther,
}

impl Species {
    /// All species, in declaration order.
    pub const ALL: [Species; 35] = [
        Species::Neutron,
        Species::Th232,
        Species::Th233,
        Species::Pa233,
        Species::U233,
        Species::U235,
        Species::U236,
        Species::U237,
        Species::U238,
        Species::U239,
        Species::U240,
        Species::Np237,
        Species::Np238,
        Species::Np239,
        Species::Np240,
        Species::Pu238,
        Species::Pu239,
        Species::Pu240,
        Species::Pu241,
        Species::Pu242,
        Species::Pu243,
        Species::Am241,
        Species::Am242,
        Species::Am243,
        Species::Am244,
        Species::Cm242,
        Species::Cm243,
        Species::Cm244,
        Species::Kr95,
        Species::Zr104,
        Species::Sn134,
        Species::I135,
        Species::Xe135,
        Species::Xe136,
        Species::FpOther,
    ];

    /// Table key / display symbol, e.g. "U235", "n".
    pub fn symbol(self) -> &'static str {
        match self {
            Species::Neutron => "n",
            Species::Th232 => "Th232",
            Species::Th233 => "Th233",
            Species::Pa233 => "Pa233",
            Species::U233 => "U233",
            Species::U235 => "U235",
            Species::U236 => "U236",
            Species::U237 => "U237",
            Species::U238 => "U238",
            Species::U239 => "U239",
            Species::U240 => "U240",
            Species::Np237 => "Np237",
            Species::Np238 => "Np238",
            Species::Np239 => "Np239",
            Species::Np240 => "Np240",
            Species::Pu238 => "Pu238",
            Species::Pu239 => "Pu239",
            Species::Pu240 => "Pu240",
            Species::Pu241 => "Pu241",
            Species::Pu242 => "Pu242",
            Species::Pu243 => "Pu243",
            Species::Am241 => "Am241",
            Species::Am242 => "Am242",
            Species::Am243 => "Am243",
            Species::Am244 => "Am244",
            Species::Cm242 => "Cm242",
            Species::Cm243 => "Cm243",
            Species::Cm244 => "Cm244",
            Species::Kr95 => "Kr95",
            Species::Zr104 => "Zr104",
            Species::Sn134 => "Sn134",
            Species::I135 => "I135",
            Species::Xe135 => "Xe135",
            Species::Xe136 => "Xe136",
            Species::FpOther => "FP",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Neutron-induced reaction channels with tabulated cross sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Fission,
    Capture,
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReactionKind::Fission => "fission",
            ReactionKind::Capture => "capture",
        })
    }
}

/// Radioactive decay channels with tabulated half-lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecayMode {
    Alpha,
    BetaMinus,
    BetaPlus,
    Gamma,
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DecayMode::Alpha => "alpha",
            DecayMode::BetaMinus => "beta-minus",
            DecayMode::BetaPlus => "beta-plus",
            DecayMode::Gamma => "gamma",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = HashSet::new();
        for sp in Species::ALL {
            assert!(
                seen.insert(sp.symbol()),
                "duplicate symbol {} in species table",
                sp.symbol()
            );
        }
        assert_eq!(seen.len(), Species::ALL.len());
    }

    #[test]
    fn test_neutron_symbol_matches_table_key() {
        assert_eq!(Species::Neutron.symbol(), "n");
        assert_eq!(Species::FpOther.symbol(), "FP");
    }

    #[test]
    fn test_display_matches_symbol() {
        assert_eq!(format!("{}", Species::U235), "U235");
        assert_eq!(format!("{}", ReactionKind::Capture), "capture");
        assert_eq!(format!("{}", DecayMode::BetaMinus), "beta-minus");
    }
}
