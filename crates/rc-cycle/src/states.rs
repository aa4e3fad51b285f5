//! Propellant states along the feed path, computed downstream to upstream.
//!
//! The injector is the anchored point: saturated liquid at feed pressure.
//! The jacket inlet follows from a steady energy balance at the same
//! pressure (no pressure loss through the jacket), and the tank follows from
//! an isentropic pump at tank pressure.

use crate::error::{CycleError, CycleResult};
use rc_core::units::{MassRate, Power, Pressure};
use rc_fluids::{FluidModel, FluidPoint, Species, StateInput};
use serde::Serialize;
use tracing::debug;

/// Position of a state along a propellant path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Location {
    Tank,
    PreHeat,
    Injector,
}

impl Location {
    pub fn label(self) -> &'static str {
        match self {
            Location::Tank => "tank",
            Location::PreHeat => "pre-heat-exchanger (inlet)",
            Location::Injector => "injector (outlet)",
        }
    }
}

fn lookup(model: &dyn FluidModel, species: Species, input: StateInput) -> CycleResult<FluidPoint> {
    model
        .state(species, input)
        .map_err(|e| CycleError::lookup(species, input, e))
}

/// Saturated liquid at the injector feed pressure.
pub fn injector_state(
    model: &dyn FluidModel,
    species: Species,
    feed_pressure: Pressure,
) -> CycleResult<FluidPoint> {
    lookup(
        model,
        species,
        StateInput::PQ {
            p: feed_pressure,
            q: 0.0,
        },
    )
}

/// Jacket inlet state: `h = h_injector - Q / mdot` at injector pressure.
pub fn preheat_state(
    model: &dyn FluidModel,
    injector: &FluidPoint,
    absorbed: Power,
    mass_flow: MassRate,
) -> CycleResult<FluidPoint> {
    let h = injector.enthalpy - absorbed.value / mass_flow.value;
    lookup(
        model,
        injector.species,
        StateInput::PH {
            p: injector.pressure,
            h,
        },
    )
}

/// Tank state reached by an isentropic pump: `s_tank = s_preheat`.
pub fn tank_state(
    model: &dyn FluidModel,
    preheat: &FluidPoint,
    tank_pressure: Pressure,
) -> CycleResult<FluidPoint> {
    lookup(
        model,
        preheat.species,
        StateInput::PS {
            p: tank_pressure,
            s: preheat.entropy,
        },
    )
}

/// The three states of one propellant stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamStates {
    pub species: Species,
    pub mass_flow: MassRate,
    /// Heat picked up between jacket inlet and injector.
    pub absorbed: Power,
    pub injector: FluidPoint,
    pub preheat: FluidPoint,
    pub tank: FluidPoint,
}

impl StreamStates {
    /// Resolve injector, jacket inlet and tank, in that order.
    pub fn compute(
        model: &dyn FluidModel,
        species: Species,
        feed_pressure: Pressure,
        tank_pressure: Pressure,
        absorbed: Power,
        mass_flow: MassRate,
    ) -> CycleResult<Self> {
        let injector = injector_state(model, species, feed_pressure)?;
        let preheat = preheat_state(model, &injector, absorbed, mass_flow)?;
        let tank = tank_state(model, &preheat, tank_pressure)?;
        debug!(
            species = %species,
            t_injector_k = injector.temperature.value,
            t_preheat_k = preheat.temperature.value,
            t_tank_k = tank.temperature.value,
            "resolved stream states"
        );
        Ok(Self {
            species,
            mass_flow,
            absorbed,
            injector,
            preheat,
            tank,
        })
    }

    pub fn at(&self, location: Location) -> &FluidPoint {
        match location {
            Location::Tank => &self.tank,
            Location::PreHeat => &self.preheat,
            Location::Injector => &self.injector,
        }
    }

    /// Heat absorbed per unit mass [J/kg].
    pub fn absorbed_per_kg(&self) -> f64 {
        self.absorbed.value / self.mass_flow.value
    }
}
