// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{FissionError, FissionResult};

/// Percentage sums are accepted within this tolerance of 100.
const COMPOSITION_TOL: f64 = 1e-9;

/// Top-level burnup run configuration.
/// Maps 1:1 to the JSON config schema (leu_config.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepletionConfig {
    #[serde(default = "default_reactor_name")]
    pub reactor_name: String,
    #[serde(default)]
    pub fuel: FuelComposition,
    #[serde(default)]
    pub fission_products: FissionProductComposition,
    #[serde(default)]
    pub groups: GroupStructure,
    #[serde(default)]
    pub branching: BranchingConfig,
    #[serde(default)]
    pub run: RunParams,
}

/// Initial fuel charge by mass percentage. Must sum to 100; never
/// silently renormalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelComposition {
    #[serde(default = "default_u235_pct")]
    pub u235_pct: f64,
    #[serde(default = "default_u238_pct")]
    pub u238_pct: f64,
    #[serde(default)]
    pub pu239_pct: f64,
    #[serde(default)]
    pub th232_pct: f64,
}

/// Split of the fission yield between the Xe135 poison and the lumped
/// "other fission products" bucket. Must sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FissionProductComposition {
    #[serde(default = "default_xe135_pct")]
    pub xe135_pct: f64,
    #[serde(default = "default_fp_other_pct")]
    pub other_pct: f64,
}

/// Two-group neutron energy structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupStructure {
    /// Characteristic fast-group energy [eV]
    #[serde(default = "default_e_fast_ev")]
    pub e_fast_ev: f64,
    /// Characteristic thermal-group energy [eV]
    #[serde(default = "default_e_thermal_ev")]
    pub e_thermal_ev: f64,
    /// Fast-to-thermal moderation half-time [s]
    #[serde(default = "default_t_fast_s")]
    pub t_fast_s: f64,
}

/// Direct-yield fractions for individually tracked fission products.
/// True physical values are part of the data release the operator trusts;
/// they default to zero and everything not named here feeds the lumped
/// bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchingConfig {
    /// Fraction of U235 fissions yielding Kr95 directly [0, 1]
    #[serde(default)]
    pub kr95_u235_frac: f64,
    /// Fraction of Pu239 fissions yielding Zr104 directly [0, 1]
    #[serde(default)]
    pub zr104_pu239_frac: f64,
    /// Fraction of Pu241 fissions yielding Sn134 directly [0, 1]
    #[serde(default)]
    pub sn134_pu241_frac: f64,
    /// Beta half-life applied to the short-lived tracked products
    /// (Kr95, Zr104, Sn134) when decaying into the lumped bucket [s]
    #[serde(default = "default_fp_chain_half_life_s")]
    pub fp_chain_half_life_s: f64,
}

/// Scalar run parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Simulated horizon [s]
    #[serde(default = "default_t_final_s")]
    pub t_final_s: f64,
    /// Time step [s]. The explicit update is only stable for dt well
    /// below the fastest time constant in the system (the fast-group
    /// moderation half-time).
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    /// Initial fast-neutron population [neutrons]
    #[serde(default)]
    pub n_fast_init: f64,
    /// Initial thermal-neutron population [neutrons]
    #[serde(default = "default_n_thermal_init")]
    pub n_thermal_init: f64,
    /// Total initial fuel mass [kg]
    #[serde(default = "default_fuel_mass_kg")]
    pub fuel_mass_kg: f64,
    /// Core volume [m³]
    #[serde(default = "default_volume_m3")]
    pub volume_m3: f64,
    /// Clamp events tolerated before the run is declared unstable
    #[serde(default = "default_max_clamp_events")]
    pub max_clamp_events: usize,
}

fn default_reactor_name() -> String {
    "SCPN-Standard-Burnup".to_string()
}
fn default_u235_pct() -> f64 {
    3.0
}
fn default_u238_pct() -> f64 {
    97.0
}
fn default_xe135_pct() -> f64 {
    5.0
}
fn default_fp_other_pct() -> f64 {
    95.0
}
fn default_e_fast_ev() -> f64 {
    1.0e6
}
fn default_e_thermal_ev() -> f64 {
    25.0e-3
}
fn default_t_fast_s() -> f64 {
    5.0e-4
}
fn default_fp_chain_half_life_s() -> f64 {
    1.0
}
fn default_t_final_s() -> f64 {
    200.0
}
fn default_dt_s() -> f64 {
    1.0e-4
}
fn default_n_thermal_init() -> f64 {
    1.0e10
}
fn default_fuel_mass_kg() -> f64 {
    25.0
}
fn default_volume_m3() -> f64 {
    10.0
}
fn default_max_clamp_events() -> usize {
    1000
}

impl Default for DepletionConfig {
    fn default() -> Self {
        DepletionConfig {
            reactor_name: default_reactor_name(),
            fuel: FuelComposition::default(),
            fission_products: FissionProductComposition::default(),
            groups: GroupStructure::default(),
            branching: BranchingConfig::default(),
            run: RunParams::default(),
        }
    }
}

impl Default for FuelComposition {
    fn default() -> Self {
        FuelComposition {
            u235_pct: default_u235_pct(),
            u238_pct: default_u238_pct(),
            pu239_pct: 0.0,
            th232_pct: 0.0,
        }
    }
}

impl Default for FissionProductComposition {
    fn default() -> Self {
        FissionProductComposition {
            xe135_pct: default_xe135_pct(),
            other_pct: default_fp_other_pct(),
        }
    }
}

impl Default for GroupStructure {
    fn default() -> Self {
        GroupStructure {
            e_fast_ev: default_e_fast_ev(),
            e_thermal_ev: default_e_thermal_ev(),
            t_fast_s: default_t_fast_s(),
        }
    }
}

impl Default for BranchingConfig {
    fn default() -> Self {
        BranchingConfig {
            kr95_u235_frac: 0.0,
            zr104_pu239_frac: 0.0,
            sn134_pu241_frac: 0.0,
            fp_chain_half_life_s: default_fp_chain_half_life_s(),
        }
    }
}

impl Default for RunParams {
    fn default() -> Self {
        RunParams {
            t_final_s: default_t_final_s(),
            dt_s: default_dt_s(),
            n_fast_init: 0.0,
            n_thermal_init: default_n_thermal_init(),
            fuel_mass_kg: default_fuel_mass_kg(),
            volume_m3: default_volume_m3(),
            max_clamp_events: default_max_clamp_events(),
        }
    }
}

fn check_percentages(label: &str, parts: &[(&str, f64)]) -> FissionResult<()> {
    for (name, pct) in parts {
        if !pct.is_finite() || *pct < 0.0 {
            return Err(FissionError::InvalidComposition(format!(
                "{label} {name} percentage must be finite and non-negative, got {pct}"
            )));
        }
    }
    let sum: f64 = parts.iter().map(|(_, pct)| pct).sum();
    if (sum - 100.0).abs() > COMPOSITION_TOL {
        return Err(FissionError::InvalidComposition(format!(
            "{label} percentages sum to {sum}, expected 100"
        )));
    }
    Ok(())
}

impl FuelComposition {
    pub fn validate(&self) -> FissionResult<()> {
        check_percentages(
            "fuel",
            &[
                ("U235", self.u235_pct),
                ("U238", self.u238_pct),
                ("Pu239", self.pu239_pct),
                ("Th232", self.th232_pct),
            ],
        )
    }
}

impl FissionProductComposition {
    pub fn validate(&self) -> FissionResult<()> {
        check_percentages(
            "fission-product",
            &[("Xe135", self.xe135_pct), ("FP", self.other_pct)],
        )
    }

    /// Xe135 share of the fission yield as a fraction in [0, 1].
    pub fn xe135_fraction(&self) -> f64 {
        self.xe135_pct / 100.0
    }
}

impl GroupStructure {
    pub fn validate(&self) -> FissionResult<()> {
        if !(self.e_fast_ev.is_finite() && self.e_fast_ev > 0.0)
            || !(self.e_thermal_ev.is_finite() && self.e_thermal_ev > 0.0)
        {
            return Err(FissionError::ConfigError(format!(
                "group energies must be positive, got fast {} eV / thermal {} eV",
                self.e_fast_ev, self.e_thermal_ev
            )));
        }
        if self.e_fast_ev <= self.e_thermal_ev {
            return Err(FissionError::ConfigError(format!(
                "fast-group energy {} eV must exceed thermal-group energy {} eV",
                self.e_fast_ev, self.e_thermal_ev
            )));
        }
        if !(self.t_fast_s.is_finite() && self.t_fast_s > 0.0) {
            return Err(FissionError::ConfigError(format!(
                "moderation half-time must be positive, got {} s",
                self.t_fast_s
            )));
        }
        Ok(())
    }
}

impl BranchingConfig {
    pub fn validate(&self) -> FissionResult<()> {
        for (name, frac) in [
            ("Kr95/U235", self.kr95_u235_frac),
            ("Zr104/Pu239", self.zr104_pu239_frac),
            ("Sn134/Pu241", self.sn134_pu241_frac),
        ] {
            if !frac.is_finite() || !(0.0..=1.0).contains(&frac) {
                return Err(FissionError::InvalidComposition(format!(
                    "{name} yield fraction must lie in [0, 1], got {frac}"
                )));
            }
        }
        if !(self.fp_chain_half_life_s.is_finite() && self.fp_chain_half_life_s > 0.0) {
            return Err(FissionError::ConfigError(format!(
                "fission-product chain half-life must be positive, got {} s",
                self.fp_chain_half_life_s
            )));
        }
        Ok(())
    }
}

impl RunParams {
    pub fn validate(&self) -> FissionResult<()> {
        if !(self.dt_s.is_finite() && self.dt_s > 0.0) {
            return Err(FissionError::ConfigError(format!(
                "time step must be positive, got {} s",
                self.dt_s
            )));
        }
        if !(self.t_final_s.is_finite() && self.t_final_s >= self.dt_s) {
            return Err(FissionError::ConfigError(format!(
                "horizon {} s must cover at least one step of {} s",
                self.t_final_s, self.dt_s
            )));
        }
        if !(self.volume_m3.is_finite() && self.volume_m3 > 0.0) {
            return Err(FissionError::ConfigError(format!(
                "core volume must be positive, got {} m³",
                self.volume_m3
            )));
        }
        if !self.fuel_mass_kg.is_finite() || self.fuel_mass_kg < 0.0 {
            return Err(FissionError::ConfigError(format!(
                "fuel mass must be finite and non-negative, got {} kg",
                self.fuel_mass_kg
            )));
        }
        for (name, pop) in [
            ("fast", self.n_fast_init),
            ("thermal", self.n_thermal_init),
        ] {
            if !pop.is_finite() || pop < 0.0 {
                return Err(FissionError::ConfigError(format!(
                    "initial {name} population must be finite and non-negative, got {pop}"
                )));
            }
        }
        Ok(())
    }

    /// Number of trajectory rows: the seed row plus one per full step
    /// inside the horizon.
    pub fn step_count(&self) -> usize {
        (self.t_final_s / self.dt_s).floor() as usize + 1
    }
}

impl DepletionConfig {
    /// Load from JSON file. Parsing only; call [`DepletionConfig::validate`]
    /// before handing the config to a solver.
    pub fn from_file(path: &str) -> FissionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Validate every section plus the cross-section couplings a single
    /// section cannot see on its own.
    pub fn validate(&self) -> FissionResult<()> {
        self.fuel.validate()?;
        self.fission_products.validate()?;
        self.groups.validate()?;
        self.branching.validate()?;
        self.run.validate()?;

        // Direct yields of one fissile nuclide may not exceed the whole event.
        let xe = self.fission_products.xe135_fraction();
        if xe + self.branching.kr95_u235_frac > 1.0 {
            return Err(FissionError::InvalidComposition(format!(
                "U235 direct yields exceed 1: Xe135 {} + Kr95 {}",
                xe, self.branching.kr95_u235_frac
            )));
        }
        if xe + self.branching.zr104_pu239_frac > 1.0 {
            return Err(FissionError::InvalidComposition(format!(
                "Pu239 direct yields exceed 1: Xe135 {} + Zr104 {}",
                xe, self.branching.zr104_pu239_frac
            )));
        }
        Ok(())
    }
}
