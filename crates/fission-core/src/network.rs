// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Reaction Network
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-group depletion network. Every production/loss pathway is a
//! declarative rule record; the derivative is the additive sum of the
//! rule contributions plus the fast-to-thermal moderation term.

use std::f64::consts::LN_2;

use ndarray::{Array1, ArrayView1};

use fission_data::store::NuclideDataStore;
use fission_types::config::DepletionConfig;
use fission_types::constants::{
    AVOGADRO, BARN_TO_M2, C_LIGHT, EV_TO_JOULE, E_FISSION_PU239, E_FISSION_PU241, E_FISSION_U235,
    NEUTRON_REST_ENERGY_EV, NU_PU239, NU_PU241, NU_U235,
};
use fission_types::error::{FissionError, FissionResult};
use fission_types::species::{DecayMode, ReactionKind, Species};
use fission_types::state::{IDX_ENERGY, IDX_FAST, IDX_THERMAL, IDX_TIME, STATE_WIDTH};

/// Neutron group speed from its characteristic energy [m/s]:
/// v = c·√(2E / m_n c²).
pub fn group_speed(energy_ev: f64) -> f64 {
    C_LIGHT * (2.0 * energy_ev / NEUTRON_REST_ENERGY_EV).sqrt()
}

/// Avogadro-scaled group fluxes, Φ_g = N_A·n_g·v_g/V, so that
/// σ[m²]·Φ_g·moles gives reaction events per second.
#[derive(Debug, Clone, Copy)]
pub struct GroupFlux {
    pub fast: f64,
    pub thermal: f64,
}

/// Where a decay rule takes its half-life from.
#[derive(Debug, Clone, Copy)]
pub enum HalfLifeSource {
    /// The beta-minus table of the data store.
    Table,
    /// A fixed value [s] - the lumped fission-product chain.
    Fixed(f64),
}

/// Direct fission yield of one individually tracked product.
#[derive(Debug, Clone, Copy)]
pub struct Yield {
    pub product: Species,
    pub slot: usize,
    pub fraction: f64,
}

/// One reaction channel of a single reactant.
#[derive(Debug, Clone)]
pub enum Reaction {
    /// Thermal fission: consumes a thermal neutron, emits `nu` fast
    /// neutrons and `energy_j` joules; `yields` covers the named
    /// products, the remainder of the event feeds the lumped bucket.
    Fission {
        nu: f64,
        energy_j: f64,
        yields: Vec<Yield>,
    },
    /// Radiative capture of a thermal neutron.
    Capture { child: Species, child_slot: usize },
    /// Beta-minus decay feeding the daughter one-for-one.
    BetaDecay {
        child: Species,
        child_slot: usize,
        half_life: HalfLifeSource,
    },
}

/// A reactant and one of its channels, state slots resolved up front.
#[derive(Debug, Clone)]
pub struct ReactionRule {
    pub reactant: Species,
    pub slot: usize,
    pub reaction: Reaction,
}

fn slot_of(sp: Species) -> FissionResult<usize> {
    sp.state_slot().ok_or_else(|| {
        FissionError::ConfigError(format!("{} has no state slot", sp.symbol()))
    })
}

fn fission_rule(
    reactant: Species,
    nu: f64,
    energy_j: f64,
    named_yields: &[(Species, f64)],
) -> FissionResult<ReactionRule> {
    let mut yields = Vec::with_capacity(named_yields.len());
    for (product, fraction) in named_yields {
        yields.push(Yield {
            product: *product,
            slot: slot_of(*product)?,
            fraction: *fraction,
        });
    }
    Ok(ReactionRule {
        reactant,
        slot: slot_of(reactant)?,
        reaction: Reaction::Fission {
            nu,
            energy_j,
            yields,
        },
    })
}

/// The full depletion network for one configuration.
#[derive(Debug, Clone)]
pub struct ReactionNetwork {
    rules: Vec<ReactionRule>,
    fp_other_slot: usize,
    volume_m3: f64,
    e_fast_ev: f64,
    e_thermal_ev: f64,
    t_fast_s: f64,
    v_fast: f64,    // group speed at e_fast_ev [m/s]
    v_thermal: f64, // group speed at e_thermal_ev [m/s]
}

impl ReactionNetwork {
    /// Build the rule list from a validated configuration.
    pub fn new(config: &DepletionConfig) -> FissionResult<Self> {
        config.validate()?;

        let xe = config.fission_products.xe135_fraction();
        let br = &config.branching;

        let mut rules = Vec::new();

        // Thermal fission channels.
        rules.push(fission_rule(
            Species::U235,
            NU_U235,
            E_FISSION_U235,
            &[
                (Species::Xe135, xe),
                (Species::Kr95, br.kr95_u235_frac),
            ],
        )?);
        rules.push(fission_rule(
            Species::Pu239,
            NU_PU239,
            E_FISSION_PU239,
            &[
                (Species::Xe135, xe),
                (Species::Zr104, br.zr104_pu239_frac),
            ],
        )?);
        rules.push(fission_rule(
            Species::Pu241,
            NU_PU241,
            E_FISSION_PU241,
            &[(Species::Sn134, br.sn134_pu241_frac)],
        )?);

        // Radiative captures along the transmutation chain.
        let captures = [
            (Species::U235, Species::U236),
            (Species::U236, Species::U237),
            (Species::U238, Species::U239),
            (Species::Pu239, Species::Pu240),
            (Species::Pu240, Species::Pu241),
            (Species::Pu241, Species::Pu242),
            (Species::Pu242, Species::Pu243),
            (Species::Am241, Species::Am242),
            (Species::Am243, Species::Am244),
            (Species::Cm242, Species::Cm243),
            (Species::Cm243, Species::Cm244),
            (Species::Xe135, Species::Xe136),
        ];
        for (parent, child) in captures {
            rules.push(ReactionRule {
                reactant: parent,
                slot: slot_of(parent)?,
                reaction: Reaction::Capture {
                    child,
                    child_slot: slot_of(child)?,
                },
            });
        }

        // Beta-minus decays with tabulated half-lives. Xe135's daughter
        // (Cs135) is not tracked individually, so it feeds the bucket.
        let betas = [
            (Species::U237, Species::Np237),
            (Species::U239, Species::Np239),
            (Species::Np239, Species::Pu239),
            (Species::Pu241, Species::Am241),
            (Species::Pu243, Species::Am243),
            (Species::Am242, Species::Cm242),
            (Species::Am244, Species::Cm244),
            (Species::Xe135, Species::FpOther),
        ];
        for (parent, child) in betas {
            rules.push(ReactionRule {
                reactant: parent,
                slot: slot_of(parent)?,
                reaction: Reaction::BetaDecay {
                    child,
                    child_slot: slot_of(child)?,
                    half_life: HalfLifeSource::Table,
                },
            });
        }

        // Short-lived tracked products decay into the bucket with the
        // configured lumped chain half-life.
        for parent in [Species::Kr95, Species::Zr104, Species::Sn134] {
            rules.push(ReactionRule {
                reactant: parent,
                slot: slot_of(parent)?,
                reaction: Reaction::BetaDecay {
                    child: Species::FpOther,
                    child_slot: slot_of(Species::FpOther)?,
                    half_life: HalfLifeSource::Fixed(br.fp_chain_half_life_s),
                },
            });
        }

        Ok(ReactionNetwork {
            rules,
            fp_other_slot: slot_of(Species::FpOther)?,
            volume_m3: config.run.volume_m3,
            e_fast_ev: config.groups.e_fast_ev,
            e_thermal_ev: config.groups.e_thermal_ev,
            t_fast_s: config.groups.t_fast_s,
            v_fast: group_speed(config.groups.e_fast_ev),
            v_thermal: group_speed(config.groups.e_thermal_ev),
        })
    }

    pub fn rules(&self) -> &[ReactionRule] {
        &self.rules
    }

    /// Probe every lookup the rule list will need, so a swapped-in data
    /// release fails at construction instead of mid-run. Also
    /// range-checks the thermal group energy against the release domain.
    pub fn validate(&self, store: &NuclideDataStore) -> FissionResult<()> {
        for rule in &self.rules {
            match &rule.reaction {
                Reaction::Fission { .. } => {
                    store.cross_section(rule.reactant, ReactionKind::Fission, self.e_thermal_ev)?;
                }
                Reaction::Capture { .. } => {
                    store.cross_section(rule.reactant, ReactionKind::Capture, self.e_thermal_ev)?;
                }
                Reaction::BetaDecay {
                    half_life: HalfLifeSource::Table,
                    ..
                } => {
                    store.half_life(rule.reactant, DecayMode::BetaMinus)?;
                }
                Reaction::BetaDecay { .. } => {}
            }
        }
        Ok(())
    }

    /// Avogadro-scaled fluxes for a state row.
    pub fn group_fluxes(&self, row: ArrayView1<f64>) -> GroupFlux {
        GroupFlux {
            fast: AVOGADRO * row[IDX_FAST] * self.v_fast / self.volume_m3,
            thermal: AVOGADRO * row[IDX_THERMAL] * self.v_thermal / self.volume_m3,
        }
    }

    /// Instantaneous derivative of a state row. Pure: reads only the
    /// row and the immutable store, returns a same-shape row whose time
    /// slot is fixed at 1 (time advances at unit rate).
    pub fn derivative(
        &self,
        store: &NuclideDataStore,
        row: ArrayView1<f64>,
    ) -> FissionResult<Array1<f64>> {
        assert_eq!(row.len(), STATE_WIDTH, "state row has wrong width");

        let mut f = Array1::<f64>::zeros(STATE_WIDTH);
        f[IDX_TIME] = 1.0;

        let flux = self.group_fluxes(row);

        // Moderation: fast population relaxes toward thermal, the
        // energy lost per neutron deposits in the coolant.
        let transfer = row[IDX_FAST] * LN_2 / self.t_fast_s;
        f[IDX_FAST] -= transfer;
        f[IDX_THERMAL] += transfer;
        f[IDX_ENERGY] += transfer * (self.e_fast_ev - self.e_thermal_ev) * EV_TO_JOULE;

        for rule in &self.rules {
            let moles = row[rule.slot];
            match &rule.reaction {
                Reaction::Fission {
                    nu,
                    energy_j,
                    yields,
                } => {
                    let sigma_m2 = store.cross_section(
                        rule.reactant,
                        ReactionKind::Fission,
                        self.e_thermal_ev,
                    )? * BARN_TO_M2;
                    let events = sigma_m2 * flux.thermal * moles; // events/s
                    f[rule.slot] -= events / AVOGADRO;
                    f[IDX_THERMAL] -= events;
                    f[IDX_FAST] += nu * events;
                    f[IDX_ENERGY] += energy_j * events;
                    // Named yields first; whatever share of the event
                    // they do not claim becomes lumped products.
                    let mut lumped = 1.0;
                    for y in yields {
                        f[y.slot] += y.fraction * events / AVOGADRO;
                        lumped -= y.fraction;
                    }
                    f[self.fp_other_slot] += lumped * events / AVOGADRO;
                }
                Reaction::Capture { child_slot, .. } => {
                    let sigma_m2 = store.cross_section(
                        rule.reactant,
                        ReactionKind::Capture,
                        self.e_thermal_ev,
                    )? * BARN_TO_M2;
                    let events = sigma_m2 * flux.thermal * moles;
                    f[rule.slot] -= events / AVOGADRO;
                    f[*child_slot] += events / AVOGADRO;
                    f[IDX_THERMAL] -= events;
                }
                Reaction::BetaDecay {
                    child_slot,
                    half_life,
                    ..
                } => {
                    let t_half = match half_life {
                        HalfLifeSource::Table => {
                            store.half_life(rule.reactant, DecayMode::BetaMinus)?
                        }
                        HalfLifeSource::Fixed(s) => *s,
                    };
                    let rate = LN_2 / t_half * moles; // mol/s
                    f[rule.slot] -= rate;
                    f[*child_slot] += rate;
                }
            }
        }

        Ok(f)
    }
}
