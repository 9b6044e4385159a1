// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Nuclide Data Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::collections::HashMap;

use fission_types::error::{FissionError, FissionResult};
use fission_types::species::{DecayMode, ReactionKind, Species};

use crate::cross_section::{CrossSection, CAPTURE_BARN, FISSION_BARN};
use crate::half_life::{ALPHA_S, BETA_MINUS_S};
use crate::molar_mass::MOLAR_MASS_G_MOL;

/// Immutable nuclide property lookups. Built once from a data release
/// and shared by reference across any number of runs; every missing key
/// is a hard error, never a silent zero.
#[derive(Debug, Clone)]
pub struct NuclideDataStore {
    cross_sections: HashMap<(Species, ReactionKind), CrossSection>,
    half_lives: HashMap<DecayMode, HashMap<Species, f64>>,
    molar_masses: HashMap<Species, f64>, // kg/mol
}

impl NuclideDataStore {
    /// The shipped thermal-point data release.
    pub fn default_release() -> Self {
        Self::build(
            &FISSION_BARN,
            &CAPTURE_BARN,
            &ALPHA_S,
            &BETA_MINUS_S,
            &MOLAR_MASS_G_MOL,
        )
    }

    /// Build a store from caller-supplied tables, e.g. a different
    /// nuclear-data release. Molar masses are taken in g/mol (the
    /// conventional table unit). Every value must be finite and strictly
    /// positive; a later duplicate key overwrites an earlier one.
    pub fn new(
        fission_barn: &[(Species, f64)],
        capture_barn: &[(Species, f64)],
        alpha_s: &[(Species, f64)],
        beta_minus_s: &[(Species, f64)],
        molar_mass_g_mol: &[(Species, f64)],
    ) -> FissionResult<Self> {
        let labelled: [(&str, &[(Species, f64)]); 5] = [
            ("fission cross section", fission_barn),
            ("capture cross section", capture_barn),
            ("alpha half-life", alpha_s),
            ("beta-minus half-life", beta_minus_s),
            ("molar mass", molar_mass_g_mol),
        ];
        for (label, table) in labelled {
            for (sp, value) in table {
                if !(value.is_finite() && *value > 0.0) {
                    return Err(FissionError::ConfigError(format!(
                        "{label} for {} must be finite and positive, got {value}",
                        sp.symbol()
                    )));
                }
            }
        }
        Ok(Self::build(
            fission_barn,
            capture_barn,
            alpha_s,
            beta_minus_s,
            molar_mass_g_mol,
        ))
    }

    fn build(
        fission_barn: &[(Species, f64)],
        capture_barn: &[(Species, f64)],
        alpha_s: &[(Species, f64)],
        beta_minus_s: &[(Species, f64)],
        molar_mass_g_mol: &[(Species, f64)],
    ) -> Self {
        let mut cross_sections = HashMap::new();
        for (sp, barns) in fission_barn {
            cross_sections.insert((*sp, ReactionKind::Fission), CrossSection::new(*barns));
        }
        for (sp, barns) in capture_barn {
            cross_sections.insert((*sp, ReactionKind::Capture), CrossSection::new(*barns));
        }

        let mut half_lives: HashMap<DecayMode, HashMap<Species, f64>> = HashMap::new();
        half_lives.insert(
            DecayMode::Alpha,
            alpha_s.iter().map(|(sp, t)| (*sp, *t)).collect(),
        );
        half_lives.insert(
            DecayMode::BetaMinus,
            beta_minus_s.iter().map(|(sp, t)| (*sp, *t)).collect(),
        );

        let molar_masses = molar_mass_g_mol
            .iter()
            .map(|(sp, g_mol)| (*sp, g_mol * 1e-3))
            .collect();

        NuclideDataStore {
            cross_sections,
            half_lives,
            molar_masses,
        }
    }

    /// Microscopic cross section [barn] for a reaction channel at the
    /// given incident energy [eV].
    pub fn cross_section(
        &self,
        nuclide: Species,
        reaction: ReactionKind,
        energy_ev: f64,
    ) -> FissionResult<f64> {
        let entry = self
            .cross_sections
            .get(&(nuclide, reaction))
            .ok_or(FissionError::UnknownReactionPath {
                nuclide: nuclide.symbol(),
                reaction,
            })?;
        entry.evaluate(energy_ev)
    }

    /// Half-life [s] for a decay channel.
    pub fn half_life(&self, nuclide: Species, mode: DecayMode) -> FissionResult<f64> {
        let table = self
            .half_lives
            .get(&mode)
            .ok_or(FissionError::UnknownDecayMode { mode })?;
        table
            .get(&nuclide)
            .copied()
            .ok_or(FissionError::UnknownNuclide {
                nuclide: nuclide.symbol(),
            })
    }

    /// Decay constant λ = ln2 / half-life [1/s].
    pub fn decay_constant(&self, nuclide: Species, mode: DecayMode) -> FissionResult<f64> {
        Ok(std::f64::consts::LN_2 / self.half_life(nuclide, mode)?)
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass(&self, nuclide: Species) -> FissionResult<f64> {
        self.molar_masses
            .get(&nuclide)
            .copied()
            .ok_or(FissionError::UnknownNuclide {
                nuclide: nuclide.symbol(),
            })
    }
}
