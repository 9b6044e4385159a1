// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use fission_types::error::{FissionError, FissionResult};
use fission_types::species::Species;

/// Lower edge of the validated incident-energy domain (eV)
pub const ENERGY_MIN_EV: f64 = 1e-5;

/// Upper edge of the validated incident-energy domain (eV)
pub const ENERGY_MAX_EV: f64 = 2e7;

/// One tabulated reaction channel. The shipped release carries
/// thermal-point data, so the value is constant across the validated
/// energy domain; energies outside it are refused, never extrapolated.
#[derive(Debug, Clone, Copy)]
pub struct CrossSection {
    barns: f64,
}

impl CrossSection {
    pub fn new(barns: f64) -> Self {
        CrossSection { barns }
    }

    /// Microscopic cross section at the given incident energy [barn].
    pub fn evaluate(&self, energy_ev: f64) -> FissionResult<f64> {
        if !energy_ev.is_finite() || energy_ev < ENERGY_MIN_EV || energy_ev > ENERGY_MAX_EV {
            return Err(FissionError::EnergyOutOfRange {
                energy_ev,
                min_ev: ENERGY_MIN_EV,
                max_ev: ENERGY_MAX_EV,
            });
        }
        Ok(self.barns)
    }
}

/// Thermal-point fission cross sections [barn].
pub const FISSION_BARN: [(Species, f64); 5] = [
    (Species::U233, 529.1),
    (Species::U235, 582.6),
    (Species::Pu239, 747.4),
    (Species::Pu241, 1012.3),
    (Species::Cm243, 617.4),
];

/// Thermal-point radiative-capture cross sections [barn].
pub const CAPTURE_BARN: [(Species, f64); 13] = [
    (Species::Th232, 7.35),
    (Species::U235, 98.8),
    (Species::U236, 5.13),
    (Species::U238, 2.68),
    (Species::Pu239, 269.3),
    (Species::Pu240, 289.5),
    (Species::Pu241, 358.2),
    (Species::Pu242, 18.5),
    (Species::Am241, 684.0),
    (Species::Am243, 75.1),
    (Species::Cm242, 15.9),
    (Species::Cm243, 130.2),
    (Species::Xe135, 2.65e6),
];
