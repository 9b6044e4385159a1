// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Avogadro constant (1/mol)
pub const AVOGADRO: f64 = 6.02214076e23;

/// Electron-volt (J)
pub const EV_TO_JOULE: f64 = 1.60218e-19;

/// Barn (m²)
pub const BARN_TO_M2: f64 = 1e-28;

/// Speed of light (m/s)
pub const C_LIGHT: f64 = 3.0e8;

/// Neutron rest energy m_n·c² (eV) - 939.565 MeV
pub const NEUTRON_REST_ENERGY_EV: f64 = 9.39565379e8;

/// Energy per megawatt-day (J) - burnup normalization
pub const JOULES_PER_MWD: f64 = 8.64e10;

/// Mean neutrons released per thermal fission of U235
pub const NU_U235: f64 = 2.43;

/// Mean neutrons released per thermal fission of Pu239
pub const NU_PU239: f64 = 2.88;

/// Mean neutrons released per thermal fission of Pu241
pub const NU_PU241: f64 = 2.95;

/// Recoverable energy per U235 thermal fission (J) - 202.5 MeV
pub const E_FISSION_U235: f64 = 202.5e6 * EV_TO_JOULE;

/// Recoverable energy per Pu239 thermal fission (J) - 207.1 MeV
pub const E_FISSION_PU239: f64 = 207.1e6 * EV_TO_JOULE;

/// Recoverable energy per Pu241 thermal fission (J) - 210.6 MeV
pub const E_FISSION_PU241: f64 = 210.6e6 * EV_TO_JOULE;
