//! Thermodynamic state definitions.

use crate::error::{FluidError, FluidResult};
use crate::species::Species;
use rc_core::numeric::{ensure_finite, ensure_fraction, ensure_positive};
use rc_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Which pair of independent properties fixes a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputPair {
    PT,
    PQ,
    PH,
    PS,
}

impl InputPair {
    pub fn label(self) -> &'static str {
        match self {
            Self::PT => "P-T",
            Self::PQ => "P-Q",
            Self::PH => "P-h",
            Self::PS => "P-s",
        }
    }
}

impl std::fmt::Display for InputPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input specification for resolving a thermodynamic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature.
    PT { p: Pressure, t: Temperature },
    /// Pressure and vapor quality (0 = saturated liquid, 1 = saturated vapor).
    PQ { p: Pressure, q: f64 },
    /// Pressure and specific enthalpy.
    PH { p: Pressure, h: SpecEnthalpy },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
}

impl StateInput {
    pub fn pair(&self) -> InputPair {
        match self {
            StateInput::PT { .. } => InputPair::PT,
            StateInput::PQ { .. } => InputPair::PQ,
            StateInput::PH { .. } => InputPair::PH,
            StateInput::PS { .. } => InputPair::PS,
        }
    }

    pub fn pressure(&self) -> Pressure {
        match *self {
            StateInput::PT { p, .. }
            | StateInput::PQ { p, .. }
            | StateInput::PH { p, .. }
            | StateInput::PS { p, .. } => p,
        }
    }

    /// Raw SI value of the second input.
    pub fn second_value(&self) -> f64 {
        match *self {
            StateInput::PT { t, .. } => t.value,
            StateInput::PQ { q, .. } => q,
            StateInput::PH { h, .. } => h,
            StateInput::PS { s, .. } => s,
        }
    }

    /// Reject non-physical inputs before they reach a backend.
    pub fn validate(&self) -> FluidResult<()> {
        ensure_positive(self.pressure().value, "pressure")?;
        match *self {
            StateInput::PT { t, .. } => {
                ensure_positive(t.value, "temperature")?;
            }
            StateInput::PQ { q, .. } => {
                ensure_fraction(q, "vapor quality")?;
            }
            StateInput::PH { h, .. } => {
                ensure_finite(h, "enthalpy")?;
            }
            StateInput::PS { s, .. } => {
                ensure_finite(s, "entropy")?;
            }
        }
        Ok(())
    }
}

/// A resolved point on a propellant or exhaust path.
///
/// The properties that were given as lookup inputs are stored exactly as
/// queried; only the remaining ones come from the backend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FluidPoint {
    pub species: Species,
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub enthalpy: SpecEnthalpy,
    pub entropy: SpecEntropy,
    /// Vapor quality, present only for saturated/two-phase points.
    pub quality: Option<f64>,
}

impl FluidPoint {
    /// Assemble a point, rejecting non-finite or non-physical values.
    pub fn new(
        species: Species,
        pressure: Pressure,
        temperature: Temperature,
        enthalpy: SpecEnthalpy,
        entropy: SpecEntropy,
        quality: Option<f64>,
    ) -> FluidResult<Self> {
        ensure_positive(pressure.value, "pressure")?;
        ensure_positive(temperature.value, "temperature")?;
        ensure_finite(enthalpy, "enthalpy")?;
        ensure_finite(entropy, "entropy")?;
        if let Some(q) = quality
            && !(0.0..=1.0).contains(&q)
        {
            return Err(FluidError::NonPhysical {
                what: "vapor quality must lie in [0, 1]",
            });
        }
        Ok(Self {
            species,
            pressure,
            temperature,
            enthalpy,
            entropy,
            quality,
        })
    }
}
