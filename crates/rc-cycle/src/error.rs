//! Error types for the cycle analysis.

use rc_core::CoreError;
use rc_fluids::{FluidError, InputPair, Species, StateInput};
use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

/// Errors that abort a scenario run. None of them are retried.
#[derive(Error, Debug)]
pub enum CycleError {
    /// Raised eagerly, before any property lookup is attempted.
    #[error("Invalid parameter {what}: {value}")]
    InvalidParameter { what: &'static str, value: f64 },

    /// The property backend could not resolve a state.
    #[error("Property lookup failed for {species} at {pair} = ({first}, {second})")]
    PropertyLookup {
        species: Species,
        pair: InputPair,
        first: f64,
        second: f64,
        #[source]
        source: FluidError,
    },

    /// The chamber enthalpy does not exceed the nozzle-exit enthalpy, so the
    /// exhaust velocity would be imaginary.
    #[error(
        "No expansion: chamber enthalpy {h_chamber:.1} J/kg does not exceed exit enthalpy {h_exit:.1} J/kg"
    )]
    NoExpansion { h_chamber: f64, h_exit: f64 },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CycleError {
    /// Wrap a backend failure with the query that triggered it.
    pub fn lookup(species: Species, input: StateInput, source: FluidError) -> Self {
        CycleError::PropertyLookup {
            species,
            pair: input.pair(),
            first: input.pressure().value,
            second: input.second_value(),
            source,
        }
    }
}

impl From<CoreError> for CycleError {
    fn from(err: CoreError) -> Self {
        CycleError::InvalidParameter {
            what: err.what(),
            value: err.value(),
        }
    }
}
