// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — Depletion Integrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Explicit Euler time stepping over the reaction network, with
//! negative-excursion clamping and a single-use run state machine.

use std::time::Instant;

use ndarray::Array1;

use fission_data::store::NuclideDataStore;
use fission_types::config::DepletionConfig;
use fission_types::error::{FissionError, FissionResult};
use fission_types::species::Species;
use fission_types::state::{ReactorTrajectory, IDX_ENERGY, IDX_FAST, IDX_THERMAL, STATE_WIDTH};

use crate::network::ReactionNetwork;

/// Lifecycle of one solver instance. A solver runs exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Uninitialized,
    Running,
    Completed,
    Failed,
}

/// One negative excursion forced back to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClampEvent {
    /// Step at which the excursion appeared.
    pub step: usize,
    /// State slot that went negative.
    pub slot: usize,
}

/// Run metrics reported on success.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Rows written, including the initial condition.
    pub steps: usize,
    /// Simulated horizon (s).
    pub simulated_s: f64,
    /// Negative excursions clamped over the whole run.
    pub clamp_count: usize,
    /// Wall-clock integration time (ms).
    pub solve_time_ms: f64,
}

/// Seed a state row from the configured charge: neutron populations
/// from the run parameters, heavy-metal moles from the mass split and
/// the release molar masses, everything else zero.
pub fn initial_condition(
    config: &DepletionConfig,
    store: &NuclideDataStore,
) -> FissionResult<Array1<f64>> {
    config.validate()?;
    if config.fuel.th232_pct > 0.0 {
        return Err(FissionError::InvalidComposition(
            "Th232 charges are not supported by the uranium-plutonium chain".into(),
        ));
    }

    let mut row = Array1::<f64>::zeros(STATE_WIDTH);
    row[IDX_FAST] = config.run.n_fast_init;
    row[IDX_THERMAL] = config.run.n_thermal_init;

    let m_tot = config.run.fuel_mass_kg;
    let charge = [
        (Species::U235, config.fuel.u235_pct),
        (Species::U238, config.fuel.u238_pct),
        (Species::Pu239, config.fuel.pu239_pct),
    ];
    for (sp, pct) in charge {
        let slot = sp.state_slot().ok_or_else(|| {
            FissionError::ConfigError(format!("{} has no state slot", sp.symbol()))
        })?;
        row[slot] = pct / 100.0 * m_tot / store.molar_mass(sp)?;
    }
    Ok(row)
}

/// Single-use depletion solver: owns the configuration, the network,
/// the data release and the trajectory it fills.
#[derive(Debug)]
pub struct DepletionSolver {
    config: DepletionConfig,
    network: ReactionNetwork,
    store: NuclideDataStore,
    state: RunState,
    trajectory: ReactorTrajectory,
    clamp_events: Vec<ClampEvent>,
}

impl DepletionSolver {
    /// Solver over the bundled nuclear data release.
    pub fn new(config: DepletionConfig) -> FissionResult<Self> {
        Self::with_store(config, NuclideDataStore::default_release())
    }

    /// Solver over a caller-supplied data release. Every lookup the
    /// network will make is probed here, so a release that cannot
    /// serve the configuration fails before any stepping.
    pub fn with_store(config: DepletionConfig, store: NuclideDataStore) -> FissionResult<Self> {
        config.validate()?;
        let network = ReactionNetwork::new(&config)?;
        network.validate(&store)?;
        let trajectory = ReactorTrajectory::with_capacity(config.run.step_count());
        Ok(DepletionSolver {
            config,
            network,
            store,
            state: RunState::Uninitialized,
            trajectory,
            clamp_events: Vec::new(),
        })
    }

    /// Integrate the configured horizon.
    pub fn run(&mut self) -> FissionResult<RunSummary> {
        self.run_with_abort(|_| false)
    }

    /// Integrate, polling `abort` with the upcoming step index before
    /// each step. A `true` return fails the run with `Aborted`.
    pub fn run_with_abort(
        &mut self,
        mut abort: impl FnMut(usize) -> bool,
    ) -> FissionResult<RunSummary> {
        if self.state != RunState::Uninitialized {
            return Err(FissionError::ConfigError(
                "solver has already run; build a fresh one per run".into(),
            ));
        }
        self.state = RunState::Running;
        let outcome = self.advance(&mut abort);
        self.state = if outcome.is_ok() {
            RunState::Completed
        } else {
            RunState::Failed
        };
        outcome
    }

    fn advance(&mut self, abort: &mut impl FnMut(usize) -> bool) -> FissionResult<RunSummary> {
        let t0 = Instant::now();
        let dt = self.config.run.dt_s;
        let steps = self.config.run.step_count();

        let row0 = initial_condition(&self.config, &self.store)?;
        self.trajectory.push_row(row0.view());

        let mut current = row0;
        for step in 1..steps {
            if abort(step) {
                return Err(FissionError::Aborted { step });
            }

            let f = self
                .network
                .derivative(&self.store, current.view())
                .map_err(|source| FissionError::StepFailed {
                    step,
                    source: Box::new(source),
                })?;

            let mut next = &current + &(f * dt);

            // Populations and inventories stay physical; excursions
            // below zero clamp and are recorded.
            for slot in IDX_FAST..IDX_ENERGY {
                if next[slot] < 0.0 {
                    next[slot] = 0.0;
                    self.clamp_events.push(ClampEvent { step, slot });
                }
            }
            if self.clamp_events.len() > self.config.run.max_clamp_events {
                return Err(FissionError::NumericalInstability {
                    step,
                    message: format!(
                        "clamp budget exhausted: {} negative excursions (limit {})",
                        self.clamp_events.len(),
                        self.config.run.max_clamp_events
                    ),
                });
            }
            if next.iter().any(|v| !v.is_finite()) {
                return Err(FissionError::NumericalInstability {
                    step,
                    message: "non-finite state component".into(),
                });
            }

            self.trajectory.push_row(next.view());
            current = next;
        }

        Ok(RunSummary {
            steps,
            simulated_s: (steps - 1) as f64 * dt,
            clamp_count: self.clamp_events.len(),
            solve_time_ms: t0.elapsed().as_secs_f64() * 1e3,
        })
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The filled trajectory, available only after a completed run.
    pub fn trajectory(&self) -> Option<&ReactorTrajectory> {
        if self.state == RunState::Completed {
            Some(&self.trajectory)
        } else {
            None
        }
    }

    pub fn clamp_events(&self) -> &[ClampEvent] {
        &self.clamp_events
    }

    pub fn config(&self) -> &DepletionConfig {
        &self.config
    }

    pub fn store(&self) -> &NuclideDataStore {
        &self.store
    }
}
