//! Burnup post-processing over a filled trajectory.

use fission_data::store::NuclideDataStore;
use fission_types::constants::JOULES_PER_MWD;
use fission_types::error::{FissionError, FissionResult};
use fission_types::species::Species;
use fission_types::state::{ReactorTrajectory, TRACKED};

/// Whole-run energy figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnupSummary {
    /// Specific burnup (MWd per kg of initial heavy metal).
    pub burnup_mwd_per_kg: f64,
    /// Energy released over the run (J).
    pub energy_released_j: f64,
    /// Released energy over the simulated span (W).
    pub mean_power_w: f64,
    /// Largest single-interval power (W).
    pub peak_power_w: f64,
}

/// One tracked nuclide at the end of the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NuclideInventory {
    pub species: Species,
    pub moles: f64,
    /// Absent for the lumped bucket, which has no single molar mass.
    pub mass_kg: Option<f64>,
}

/// Interval power between consecutive rows (W), one entry per step.
/// Rows are expected to advance in time, as solver trajectories do.
pub fn power_series(traj: &ReactorTrajectory) -> Vec<f64> {
    let mut series = Vec::with_capacity(traj.len().saturating_sub(1));
    for step in 1..traj.len() {
        let de = traj.energy_j(step) - traj.energy_j(step - 1);
        let dt = traj.time(step) - traj.time(step - 1);
        series.push(de / dt);
    }
    series
}

/// Condense a trajectory into burnup and power figures. A zero-mass
/// charge is accepted only while it released no energy.
pub fn summarize(traj: &ReactorTrajectory, fuel_mass_kg: f64) -> FissionResult<BurnupSummary> {
    if traj.is_empty() {
        return Err(FissionError::ConfigError(
            "cannot summarize an empty trajectory".into(),
        ));
    }
    if !fuel_mass_kg.is_finite() || fuel_mass_kg < 0.0 {
        return Err(FissionError::ConfigError(format!(
            "fuel mass {fuel_mass_kg} kg is not a valid charge"
        )));
    }

    let last = traj.len() - 1;
    let released = traj.energy_j(last) - traj.energy_j(0);

    let burnup = if released == 0.0 {
        0.0
    } else if fuel_mass_kg > 0.0 {
        released / (fuel_mass_kg * JOULES_PER_MWD)
    } else {
        return Err(FissionError::ConfigError(
            "energy released from a zero-mass charge".into(),
        ));
    };

    let span = traj.time(last) - traj.time(0);
    let mean = if span > 0.0 { released / span } else { 0.0 };
    let peak = power_series(traj).into_iter().fold(0.0_f64, f64::max);

    Ok(BurnupSummary {
        burnup_mwd_per_kg: burnup,
        energy_released_j: released,
        mean_power_w: mean,
        peak_power_w: peak,
    })
}

/// End-of-run inventory of every tracked nuclide, in state order.
pub fn final_inventory(
    traj: &ReactorTrajectory,
    store: &NuclideDataStore,
) -> FissionResult<Vec<NuclideInventory>> {
    if traj.is_empty() {
        return Err(FissionError::ConfigError(
            "cannot inventory an empty trajectory".into(),
        ));
    }
    let last = traj.len() - 1;

    let mut inventory = Vec::with_capacity(TRACKED.len());
    for sp in TRACKED {
        if let Some(moles) = traj.moles(last, sp) {
            let mass_kg = if sp == Species::FpOther {
                None
            } else {
                Some(store.molar_mass(sp)? * moles)
            };
            inventory.push(NuclideInventory {
                species: sp,
                moles,
                mass_kg,
            });
        }
    }
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::DepletionSolver;
    use fission_types::config::DepletionConfig;
    use fission_types::state::{IDX_ENERGY, IDX_THERMAL, IDX_TIME, STATE_WIDTH};
    use ndarray::Array1;

    /// Trajectory with the given (time, energy) pairs, other slots zero.
    fn energy_traj(points: &[(f64, f64)]) -> ReactorTrajectory {
        let mut traj = ReactorTrajectory::with_capacity(points.len());
        for (t, e) in points {
            let mut row = Array1::<f64>::zeros(STATE_WIDTH);
            row[IDX_TIME] = *t;
            row[IDX_ENERGY] = *e;
            traj.push_row(row.view());
        }
        traj
    }

    #[test]
    fn test_burnup_unit_scaling() {
        // 25 kg releasing 25 full MW-days is exactly 1 MWd/kg.
        let e = 25.0 * JOULES_PER_MWD;
        let traj = energy_traj(&[(0.0, 0.0), (1.0, 0.4 * e), (2.0, e)]);
        let summary = summarize(&traj, 25.0).unwrap();
        assert!((summary.burnup_mwd_per_kg - 1.0).abs() < 1e-12);
        assert!((summary.energy_released_j - e).abs() < e * 1e-12);
        assert!((summary.mean_power_w - e / 2.0).abs() < e * 1e-12);
        // The second interval carries 0.6 e over one second.
        assert!((summary.peak_power_w - 0.6 * e).abs() < e * 1e-12);
    }

    #[test]
    fn test_power_series_intervals() {
        let traj = energy_traj(&[(0.0, 0.0), (1.0, 3.0), (2.0, 9.0)]);
        let series = power_series(&traj);
        assert_eq!(series.len(), 2);
        assert!((series[0] - 3.0).abs() < 1e-12);
        assert!((series[1] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_inert_run_reports_zero_burnup() {
        let traj = energy_traj(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let summary = summarize(&traj, 0.0).unwrap();
        assert_eq!(summary.burnup_mwd_per_kg, 0.0);
        assert_eq!(summary.energy_released_j, 0.0);
        assert_eq!(summary.mean_power_w, 0.0);
        assert_eq!(summary.peak_power_w, 0.0);
    }

    #[test]
    fn test_energy_without_mass_is_rejected() {
        let traj = energy_traj(&[(0.0, 0.0), (1.0, 5.0)]);
        let err = summarize(&traj, 0.0).unwrap_err();
        assert!(matches!(err, FissionError::ConfigError(_)));
    }

    #[test]
    fn test_bad_mass_is_rejected() {
        let traj = energy_traj(&[(0.0, 0.0), (1.0, 5.0)]);
        assert!(summarize(&traj, -1.0).is_err());
        assert!(summarize(&traj, f64::NAN).is_err());
        assert!(summarize(&traj, f64::INFINITY).is_err());
    }

    #[test]
    fn test_empty_trajectory_is_rejected() {
        let traj = ReactorTrajectory::with_capacity(4);
        assert!(summarize(&traj, 25.0).is_err());
        let store = NuclideDataStore::default_release();
        assert!(final_inventory(&traj, &store).is_err());
    }

    #[test]
    fn test_single_row_has_no_power() {
        let traj = energy_traj(&[(0.0, 0.0)]);
        assert!(power_series(&traj).is_empty());
        let summary = summarize(&traj, 25.0).unwrap();
        assert_eq!(summary.mean_power_w, 0.0);
        assert_eq!(summary.peak_power_w, 0.0);
    }

    #[test]
    fn test_final_inventory_masses() {
        let mut traj = ReactorTrajectory::with_capacity(1);
        let mut row = Array1::<f64>::zeros(STATE_WIDTH);
        row[IDX_THERMAL] = 1e10;
        row[Species::U235.state_slot().unwrap()] = 3.19;
        row[Species::FpOther.state_slot().unwrap()] = 0.5;
        traj.push_row(row.view());

        let store = NuclideDataStore::default_release();
        let inventory = final_inventory(&traj, &store).unwrap();
        assert_eq!(inventory.len(), TRACKED.len());
        // State order is preserved.
        assert_eq!(inventory[0].species, Species::Kr95);
        assert_eq!(inventory[0].moles, 0.0);
        assert_eq!(inventory[0].mass_kg, Some(0.0));

        let u235 = inventory
            .iter()
            .find(|n| n.species == Species::U235)
            .unwrap();
        assert!((u235.moles - 3.19).abs() < 1e-12);
        // 3.19 mol at 235.04 g/mol is ~750 g.
        let mass = u235.mass_kg.unwrap();
        assert!((mass - 0.74979).abs() < 1e-3);

        let bucket = inventory
            .iter()
            .find(|n| n.species == Species::FpOther)
            .unwrap();
        assert!((bucket.moles - 0.5).abs() < 1e-12);
        assert_eq!(bucket.mass_kg, None);
    }

    #[test]
    fn test_summary_of_a_real_run() {
        let mut config = DepletionConfig::default();
        config.run.t_final_s = 0.05;
        let fuel_mass = config.run.fuel_mass_kg;
        let mut solver = DepletionSolver::new(config).unwrap();
        solver.run().unwrap();
        let traj = solver.trajectory().unwrap();

        let summary = summarize(traj, fuel_mass).unwrap();
        assert!(summary.energy_released_j > 0.0);
        assert!(summary.burnup_mwd_per_kg > 0.0);
        assert!(summary.mean_power_w > 0.0);
        // Power climbs through the supercritical transient, so the
        // peak interval beats the average.
        assert!(summary.peak_power_w >= summary.mean_power_w);

        let inventory = final_inventory(traj, solver.store()).unwrap();
        assert_eq!(inventory.len(), TRACKED.len());
        assert!(inventory.iter().all(|n| n.moles >= 0.0));
    }
}
