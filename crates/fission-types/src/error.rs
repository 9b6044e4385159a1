use thiserror::Error;

use crate::species::{DecayMode, ReactionKind};

/// Unified error type for all fission-core operations.
#[derive(Error, Debug)]
pub enum FissionError {
    #[error("no table entry for nuclide {nuclide}")]
    UnknownNuclide { nuclide: &'static str },

    #[error("no {reaction} cross section tabulated for {nuclide}")]
    UnknownReactionPath {
        nuclide: &'static str,
        reaction: ReactionKind,
    },

    #[error("no {mode} half-life table in this data release")]
    UnknownDecayMode { mode: DecayMode },

    #[error("neutron energy {energy_ev:.3e} eV outside validated range [{min_ev:.0e}, {max_ev:.0e}] eV")]
    EnergyOutOfRange {
        energy_ev: f64,
        min_ev: f64,
        max_ev: f64,
    },

    #[error("invalid composition: {0}")]
    InvalidComposition(String),

    #[error("numerical instability at step {step}: {message}")]
    NumericalInstability { step: usize, message: String },

    #[error("derivative evaluation failed at step {step}")]
    StepFailed {
        step: usize,
        #[source]
        source: Box<FissionError>,
    },

    #[error("run aborted at step {step}")]
    Aborted { step: usize },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FissionResult<T> = Result<T, FissionError>;
