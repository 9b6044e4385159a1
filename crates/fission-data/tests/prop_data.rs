// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Property-Based Tests (proptest) for fission-data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for fission-data using proptest.
//!
//! Covers: cross-section domain behavior over every tabulated pair,
//! the decay-constant relation, custom-release roundtrips.

use fission_data::cross_section::{CAPTURE_BARN, ENERGY_MAX_EV, ENERGY_MIN_EV, FISSION_BARN};
use fission_data::half_life::{ALPHA_S, BETA_MINUS_S};
use fission_data::store::NuclideDataStore;
use fission_types::species::{DecayMode, ReactionKind, Species};
use proptest::prelude::*;

fn tabulated_pairs() -> Vec<(Species, ReactionKind)> {
    FISSION_BARN
        .iter()
        .map(|(sp, _)| (*sp, ReactionKind::Fission))
        .chain(CAPTURE_BARN.iter().map(|(sp, _)| (*sp, ReactionKind::Capture)))
        .collect()
}

// ── Cross-Section Domain ─────────────────────────────────────────────

proptest! {
    /// Every tabulated pair returns a finite positive value anywhere
    /// inside the validated energy domain.
    #[test]
    fn all_pairs_positive_in_domain(
        pair_idx in 0usize..18,
        energy in ENERGY_MIN_EV..ENERGY_MAX_EV,
    ) {
        let pairs = tabulated_pairs();
        let (sp, kind) = pairs[pair_idx % pairs.len()];
        let store = NuclideDataStore::default_release();
        let barns = store.cross_section(sp, kind, energy).unwrap();
        prop_assert!(barns.is_finite() && barns > 0.0,
            "{} {} returned {} at {} eV", sp.symbol(), kind, barns, energy);
    }

    /// Energies below the domain floor are always refused.
    #[test]
    fn below_domain_refused(
        pair_idx in 0usize..18,
        energy in 1e-12f64..9.9e-6,
    ) {
        let pairs = tabulated_pairs();
        let (sp, kind) = pairs[pair_idx % pairs.len()];
        let store = NuclideDataStore::default_release();
        prop_assert!(store.cross_section(sp, kind, energy).is_err(),
            "{} eV accepted below the domain floor", energy);
    }

    /// Energies above the domain ceiling are always refused.
    #[test]
    fn above_domain_refused(
        pair_idx in 0usize..18,
        energy in 2.0001e7f64..1e9,
    ) {
        let pairs = tabulated_pairs();
        let (sp, kind) = pairs[pair_idx % pairs.len()];
        let store = NuclideDataStore::default_release();
        prop_assert!(store.cross_section(sp, kind, energy).is_err(),
            "{} eV accepted above the domain ceiling", energy);
    }
}

// ── Decay Constants ──────────────────────────────────────────────────

proptest! {
    /// λ = ln2 / half-life holds bit-exactly for every tabulated
    /// beta emitter.
    #[test]
    fn beta_decay_constant_relation(idx in 0usize..14) {
        let (sp, _) = BETA_MINUS_S[idx % BETA_MINUS_S.len()];
        let store = NuclideDataStore::default_release();
        let lambda = store.decay_constant(sp, DecayMode::BetaMinus).unwrap();
        let t_half = store.half_life(sp, DecayMode::BetaMinus).unwrap();
        prop_assert_eq!(lambda, std::f64::consts::LN_2 / t_half);
        prop_assert!(lambda > 0.0 && lambda.is_finite());
    }

    /// Same relation over the alpha table.
    #[test]
    fn alpha_decay_constant_relation(idx in 0usize..10) {
        let (sp, _) = ALPHA_S[idx % ALPHA_S.len()];
        let store = NuclideDataStore::default_release();
        let lambda = store.decay_constant(sp, DecayMode::Alpha).unwrap();
        let t_half = store.half_life(sp, DecayMode::Alpha).unwrap();
        prop_assert_eq!(lambda, std::f64::consts::LN_2 / t_half);
    }
}

// ── Custom Releases ──────────────────────────────────────────────────

proptest! {
    /// A custom release serves back exactly the values it was built
    /// from (masses converted g/mol → kg/mol).
    #[test]
    fn custom_release_roundtrip(
        sigma_f in 1e-3f64..1e7,
        sigma_c in 1e-3f64..1e7,
        t_half in 1e-3f64..1e18,
        g_mol in 1.0f64..300.0,
    ) {
        let store = NuclideDataStore::new(
            &[(Species::U235, sigma_f)],
            &[(Species::U238, sigma_c)],
            &[],
            &[(Species::Xe135, t_half)],
            &[(Species::U235, g_mol)],
        ).unwrap();

        let f = store.cross_section(Species::U235, ReactionKind::Fission, 1.0).unwrap();
        prop_assert!((f - sigma_f).abs() < 1e-12 * sigma_f.max(1.0));

        let c = store.cross_section(Species::U238, ReactionKind::Capture, 1.0).unwrap();
        prop_assert!((c - sigma_c).abs() < 1e-12 * sigma_c.max(1.0));

        let t = store.half_life(Species::Xe135, DecayMode::BetaMinus).unwrap();
        prop_assert!((t - t_half).abs() < 1e-9 * t_half);

        let m = store.molar_mass(Species::U235).unwrap();
        prop_assert!((m - g_mol * 1e-3).abs() < 1e-15 * g_mol);
    }

    /// Non-positive table entries never build a store.
    #[test]
    fn non_positive_entries_rejected(bad in -1e6f64..=0.0) {
        let result = NuclideDataStore::new(
            &[(Species::U235, bad)],
            &[],
            &[],
            &[],
            &[],
        );
        prop_assert!(result.is_err(), "accepted sigma = {}", bad);
    }
}
