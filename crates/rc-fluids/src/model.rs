//! Fluid property model trait.

use crate::error::FluidResult;
use crate::species::Species;
use crate::state::{FluidPoint, SpecEnthalpy, SpecEntropy, StateInput};
use rc_core::units::{Pressure, Temperature, Velocity};

/// Trait for fluid property models.
///
/// Every lookup is a pure function of its inputs. Implementations must be
/// thread-safe (Send + Sync) and must return the queried input properties
/// unchanged in the resulting [`FluidPoint`].
pub trait FluidModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model can resolve states of the given species.
    fn supports(&self, species: Species) -> bool;

    /// Resolve a full state from an input pair.
    fn state(&self, species: Species, input: StateInput) -> FluidResult<FluidPoint>;

    /// Speed of sound [m/s] of a single-phase state.
    fn sound_speed(&self, species: Species, p: Pressure, t: Temperature)
    -> FluidResult<Velocity>;

    /// State at pressure and vapor quality (`q = 0` is saturated liquid).
    fn state_from_pq(&self, species: Species, p: Pressure, q: f64) -> FluidResult<FluidPoint> {
        self.state(species, StateInput::PQ { p, q })
    }

    /// State at pressure and specific enthalpy.
    fn state_from_ph(
        &self,
        species: Species,
        p: Pressure,
        h: SpecEnthalpy,
    ) -> FluidResult<FluidPoint> {
        self.state(species, StateInput::PH { p, h })
    }

    /// State at pressure and specific entropy.
    fn state_from_ps(
        &self,
        species: Species,
        p: Pressure,
        s: SpecEntropy,
    ) -> FluidResult<FluidPoint> {
        self.state(species, StateInput::PS { p, s })
    }

    /// State at pressure and temperature.
    fn state_from_pt(
        &self,
        species: Species,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<FluidPoint> {
        self.state(species, StateInput::PT { p, t })
    }
}
