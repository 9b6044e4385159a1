// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Core Library
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Depletion engine: the two-group reaction network, the explicit
//! Euler integrator and the burnup reports derived from a finished
//! trajectory.

pub mod integrator;
pub mod network;
pub mod report;
