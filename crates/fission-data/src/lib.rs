// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Fission Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclide property tables (cross sections, half-lives, molar masses)
//! and the lookup store serving them to the depletion network.
pub mod cross_section;
pub mod half_life;
pub mod molar_mass;
pub mod store;
