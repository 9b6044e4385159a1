// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::{Array2, ArrayView1};

use crate::species::Species;

/// Elapsed time [s]
pub const IDX_TIME: usize = 0;
/// Fast-neutron population [neutrons]
pub const IDX_FAST: usize = 1;
/// Thermal-neutron population [neutrons]
pub const IDX_THERMAL: usize = 2;
/// First mole slot; tracked species occupy IDX_MOLES..IDX_ENERGY.
pub const IDX_MOLES: usize = 3;
/// Cumulative released energy [J]
pub const IDX_ENERGY: usize = 28;
/// Total state-vector width.
pub const STATE_WIDTH: usize = 29;

/// Species with a mole slot in the state vector, in slot order.
/// Fission products first, then the actinide depletion chain.
pub const TRACKED: [Species; 25] = [
    Species::Kr95,
    Species::Zr104,
    Species::Sn134,
    Species::Xe135,
    Species::Xe136,
    Species::FpOther,
    Species::U235,
    Species::U236,
    Species::U237,
    Species::Np237,
    Species::U238,
    Species::U239,
    Species::Np239,
    Species::Pu239,
    Species::Pu240,
    Species::Pu241,
    Species::Pu242,
    Species::Am241,
    Species::Am242,
    Species::Cm242,
    Species::Pu243,
    Species::Am243,
    Species::Cm243,
    Species::Am244,
    Species::Cm244,
];

impl Species {
    /// State-vector slot holding this species' mole count, or None for
    /// species that appear only in the data tables.
    pub fn state_slot(self) -> Option<usize> {
        let offset = match self {
            Species::Kr95 => 0,
            Species::Zr104 => 1,
            Species::Sn134 => 2,
            Species::Xe135 => 3,
            Species::Xe136 => 4,
            Species::FpOther => 5,
            Species::U235 => 6,
            Species::U236 => 7,
            Species::U237 => 8,
            Species::Np237 => 9,
            Species::U238 => 10,
            Species::U239 => 11,
            Species::Np239 => 12,
            Species::Pu239 => 13,
            Species::Pu240 => 14,
            Species::Pu241 => 15,
            Species::Pu242 => 16,
            Species::Am241 => 17,
            Species::Am242 => 18,
            Species::Cm242 => 19,
            Species::Pu243 => 20,
            Species::Am243 => 21,
            Species::Cm243 => 22,
            Species::Am244 => 23,
            Species::Cm244 => 24,
            _ => return None,
        };
        Some(IDX_MOLES + offset)
    }
}

/// Human-readable name of a state slot, for diagnostics.
pub fn slot_symbol(slot: usize) -> &'static str {
    match slot {
        IDX_TIME => "t",
        IDX_FAST => "n_fast",
        IDX_THERMAL => "n_thermal",
        IDX_ENERGY => "E",
        _ => TRACKED
            .get(slot - IDX_MOLES)
            .map(|sp| sp.symbol())
            .unwrap_or("?"),
    }
}

/// Append-only burnup trajectory: one fixed-width row per time step,
/// preallocated for the whole run. Rows are written exactly once and
/// only written rows are readable.
#[derive(Debug, Clone)]
pub struct ReactorTrajectory {
    data: Array2<f64>, // [capacity, STATE_WIDTH]
    filled: usize,
}

impl ReactorTrajectory {
    pub fn with_capacity(rows: usize) -> Self {
        ReactorTrajectory {
            data: Array2::zeros((rows, STATE_WIDTH)),
            filled: 0,
        }
    }

    /// Rows reserved for the run.
    pub fn capacity(&self) -> usize {
        self.data.nrows()
    }

    /// Rows written so far.
    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Append the next row. Contract: `row` has STATE_WIDTH components
    /// and capacity has not been exhausted.
    pub fn push_row(&mut self, row: ArrayView1<f64>) {
        assert_eq!(row.len(), STATE_WIDTH, "state row has wrong width");
        assert!(self.filled < self.capacity(), "trajectory capacity exhausted");
        self.data.row_mut(self.filled).assign(&row);
        self.filled += 1;
    }

    /// Read a written row. Contract: `step < len()`.
    pub fn row(&self, step: usize) -> ArrayView1<f64> {
        assert!(step < self.filled, "row {step} has not been written");
        self.data.row(step)
    }

    pub fn last_row(&self) -> Option<ArrayView1<f64>> {
        if self.filled == 0 {
            None
        } else {
            Some(self.data.row(self.filled - 1))
        }
    }

    /// Elapsed time at a step [s].
    pub fn time(&self, step: usize) -> f64 {
        self.row(step)[IDX_TIME]
    }

    /// Fast-neutron population at a step.
    pub fn fast_neutrons(&self, step: usize) -> f64 {
        self.row(step)[IDX_FAST]
    }

    /// Thermal-neutron population at a step.
    pub fn thermal_neutrons(&self, step: usize) -> f64 {
        self.row(step)[IDX_THERMAL]
    }

    /// Cumulative released energy at a step [J].
    pub fn energy_j(&self, step: usize) -> f64 {
        self.row(step)[IDX_ENERGY]
    }

    /// Mole count of a tracked species at a step, or None if the species
    /// has no state slot.
    pub fn moles(&self, step: usize, species: Species) -> Option<f64> {
        species.state_slot().map(|slot| self.row(step)[slot])
    }
}
