//! Fluid property errors.

use crate::species::Species;
use crate::state::InputPair;
use rc_core::CoreError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during fluid property lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, quality outside [0,1], etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the model's valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Operation not supported by the active model (species or input pair).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// The backend could not resolve the requested state.
    #[error("Backend rejected {species:?} at {pair} = ({first}, {second}): {message}")]
    Backend {
        species: Species,
        pair: InputPair,
        first: f64,
        second: f64,
        message: String,
    },
}

impl From<CoreError> for FluidError {
    fn from(err: CoreError) -> Self {
        FluidError::NonPhysical { what: err.what() }
    }
}
