//! CoolProp-based fluid property model.

use crate::error::{FluidError, FluidResult};
use crate::model::FluidModel;
use crate::species::Species;
use crate::state::{FluidPoint, StateInput};
use rc_core::units::{Pressure, Temperature, Velocity, k, mps};
use rfluids::prelude::*;

/// CoolProp backend for fluid properties.
///
/// Every supported input pair maps onto a single CoolProp flash, so saturated
/// and two-phase states (e.g. a P-s lookup that lands inside the vapor dome)
/// resolve the same way as single-phase ones.
///
/// Thread-safe: rfluids Fluid instances are created per call and never shared.
pub struct CoolPropModel {}

impl CoolPropModel {
    /// Create a new CoolProp model.
    pub fn new() -> Self {
        Self {}
    }

    /// Create a Fluid instance at the state described by `input`.
    fn flash(&self, species: Species, input: &StateInput) -> FluidResult<Fluid> {
        input.validate()?;
        let second = match *input {
            StateInput::PT { t, .. } => FluidInput::temperature(t.value),
            StateInput::PQ { q, .. } => FluidInput::quality(q),
            StateInput::PH { h, .. } => FluidInput::enthalpy(h),
            StateInput::PS { s, .. } => FluidInput::entropy(s),
        };
        Fluid::from(species.rfluids_pure())
            .in_state(FluidInput::pressure(input.pressure().value), second)
            .map_err(|e| backend_error(species, input, e))
    }
}

fn backend_error(species: Species, input: &StateInput, e: impl std::fmt::Display) -> FluidError {
    FluidError::Backend {
        species,
        pair: input.pair(),
        first: input.pressure().value,
        second: input.second_value(),
        message: format!("rfluids error: {}", e),
    }
}

impl Default for CoolPropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidModel for CoolPropModel {
    fn name(&self) -> &str {
        "CoolProp"
    }

    fn supports(&self, _species: Species) -> bool {
        // Every catalogued species has a CoolProp pure-fluid equation of state.
        true
    }

    fn state(&self, species: Species, input: StateInput) -> FluidResult<FluidPoint> {
        let mut fluid = self.flash(species, &input)?;

        let t_k = fluid
            .temperature()
            .map_err(|e| backend_error(species, &input, e))?;
        let t = match input {
            StateInput::PT { t, .. } => t,
            _ => k(t_k),
        };
        let h = match input {
            StateInput::PH { h, .. } => h,
            _ => fluid
                .enthalpy()
                .map_err(|e| backend_error(species, &input, e))?,
        };
        let s = match input {
            StateInput::PS { s, .. } => s,
            _ => fluid
                .entropy()
                .map_err(|e| backend_error(species, &input, e))?,
        };
        // CoolProp reports single-phase states with a sentinel outside [0,1].
        let quality = match input {
            StateInput::PQ { q, .. } => Some(q),
            _ => fluid.quality().ok().filter(|q| (0.0..=1.0).contains(q)),
        };

        FluidPoint::new(species, input.pressure(), t, h, s, quality)
    }

    fn sound_speed(
        &self,
        species: Species,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<Velocity> {
        let input = StateInput::PT { p, t };
        let mut fluid = self.flash(species, &input)?;
        let a = fluid
            .sound_speed()
            .map_err(|e| backend_error(species, &input, e))?;
        if !a.is_finite() || a <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "speed of sound must be positive and finite",
            });
        }
        Ok(mps(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::units::pa;

    #[test]
    fn model_name() {
        let model = CoolPropModel::new();
        assert_eq!(model.name(), "CoolProp");
    }

    #[test]
    fn supports_catalogued_species() {
        let model = CoolPropModel::new();
        for species in Species::ALL {
            assert!(model.supports(species));
        }
    }

    #[test]
    fn invalid_quality_is_rejected_before_backend() {
        let model = CoolPropModel::new();
        let err = model
            .state_from_pq(Species::Ethanol, pa(1.2e6), 2.0)
            .expect_err("quality above one should fail");
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }
}
