use fission_types::species::Species;

/// Atomic/molar masses [g/mol] - the conventional table unit; the store
/// serves kg/mol.
pub const MOLAR_MASS_G_MOL: [(Species, f64); 30] = [
    (Species::Neutron, 1.0086649),
    (Species::Th232, 232.038060026),
    (Species::Th233, 233.041586541),
    (Species::Pa233, 233.040248815),
    (Species::U233, 233.039636574),
    (Species::U235, 235.043931368),
    (Species::U236, 236.045568),
    (Species::U237, 237.048730),
    (Species::U238, 238.050789466),
    (Species::U239, 239.054294518),
    (Species::Np237, 237.048173),
    (Species::Np239, 239.052940487),
    (Species::Pu239, 239.052164844),
    (Species::Pu240, 240.053815008),
    (Species::Pu241, 241.056851),
    (Species::Pu242, 242.058742),
    (Species::Pu243, 243.062003),
    (Species::Am241, 241.056829),
    (Species::Am242, 242.059549),
    (Species::Am243, 243.061381),
    (Species::Am244, 244.064285),
    (Species::Cm242, 242.058836),
    (Species::Cm243, 243.061389),
    (Species::Cm244, 244.062753),
    (Species::Kr95, 94.939711),
    (Species::Zr104, 103.948050),
    (Species::Sn134, 133.928682),
    (Species::I135, 134.910059),
    (Species::Xe135, 134.907226844),
    (Species::Xe136, 135.907214),
];

#[cfg(test)]
mod tests {
    use super::*;
    use fission_types::state::TRACKED;

    #[test]
    fn test_masses_are_positive() {
        for (sp, g_mol) in MOLAR_MASS_G_MOL {
            assert!(g_mol > 0.0, "non-positive mass for {}", sp.symbol());
        }
    }

    #[test]
    fn test_neutron_mass() {
        let n = MOLAR_MASS_G_MOL
            .iter()
            .find(|(sp, _)| *sp == Species::Neutron)
            .map(|(_, m)| *m)
            .unwrap();
        assert!((n - 1.0086649).abs() < 1e-10);
    }

    #[test]
    fn test_masses_track_mass_number() {
        // A coarse sanity net: molar mass in g/mol stays within one unit
        // of the nuclide's mass number.
        for (sp, g_mol) in MOLAR_MASS_G_MOL {
            if sp == Species::Neutron {
                continue;
            }
            let digits: String = sp
                .symbol()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let mass_number: f64 = digits.parse().unwrap();
            assert!(
                (g_mol - mass_number).abs() < 1.0,
                "{} mass {} far from A={}",
                sp.symbol(),
                g_mol,
                mass_number
            );
        }
    }

    #[test]
    fn test_every_tracked_nuclide_has_a_mass() {
        for sp in TRACKED {
            if sp == Species::FpOther {
                continue; // lumped pseudo-species, no single mass
            }
            assert!(
                MOLAR_MASS_G_MOL.iter().any(|(entry, _)| *entry == sp),
                "missing molar mass for tracked nuclide {}",
                sp.symbol()
            );
        }
    }
}
