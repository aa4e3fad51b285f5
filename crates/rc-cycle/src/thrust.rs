//! Exhaust velocity and thrust.
//!
//! ```text
//! h_mix     = (mdot_f h_f + mdot_o h_o) / mdot
//! h_chamber = h_mix + Q_retained / mdot
//! h_exit    = h_CO2(P_amb, T_max × safety)
//! v         = sqrt(2 (h_chamber - h_exit))
//! F         = mdot v                      (exit pressure = ambient)
//! ```

use crate::config::CycleConstants;
use crate::error::{CycleError, CycleResult};
use crate::flow::{FlowRates, HeatBudget};
use rc_core::units::{Force, Velocity, mps, newton};
use rc_fluids::{FluidModel, FluidPoint, StateInput};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThrustResult {
    /// Mass-weighted injector enthalpy [J/kg]
    pub mixed_enthalpy: f64,
    /// Mixed enthalpy plus retained combustion heat per kg [J/kg]
    pub chamber_enthalpy: f64,
    pub exit: FluidPoint,
    pub exhaust_velocity: Velocity,
    pub exit_sound_speed: Velocity,
    pub mach: f64,
    pub thrust: Force,
}

/// Mass-flow-weighted average of the two injector enthalpies.
pub fn mixed_enthalpy(flow: &FlowRates, fuel: &FluidPoint, oxidizer: &FluidPoint) -> f64 {
    (flow.fuel_mass.value * fuel.enthalpy + flow.oxidizer_mass.value * oxidizer.enthalpy)
        / flow.total_mass.value
}

/// `v = sqrt(2 Δh)`; a non-positive drop is rejected instead of producing NaN.
pub fn exhaust_velocity(h_chamber: f64, h_exit: f64) -> CycleResult<Velocity> {
    let drop = h_chamber - h_exit;
    if drop.is_nan() || drop <= 0.0 {
        return Err(CycleError::NoExpansion { h_chamber, h_exit });
    }
    Ok(mps((2.0 * drop).sqrt()))
}

pub fn compute(
    model: &dyn FluidModel,
    constants: &CycleConstants,
    flow: &FlowRates,
    heat: &HeatBudget,
    fuel_injector: &FluidPoint,
    oxidizer_injector: &FluidPoint,
) -> CycleResult<ThrustResult> {
    let mixed = mixed_enthalpy(flow, fuel_injector, oxidizer_injector);
    let chamber = mixed + heat.chamber_retained.value / flow.total_mass.value;

    let input = StateInput::PT {
        p: constants.ambient_pressure(),
        t: constants.exhaust_temperature(),
    };
    let species = constants.exhaust;
    let exit = model
        .state(species, input)
        .map_err(|e| CycleError::lookup(species, input, e))?;
    let exit_sound_speed = model
        .sound_speed(species, exit.pressure, exit.temperature)
        .map_err(|e| CycleError::lookup(species, input, e))?;

    let exhaust_velocity = exhaust_velocity(chamber, exit.enthalpy)?;
    let thrust = newton(flow.total_mass.value * exhaust_velocity.value);
    debug!(
        h_chamber = chamber,
        h_exit = exit.enthalpy,
        v = exhaust_velocity.value,
        "nozzle expansion"
    );

    Ok(ThrustResult {
        mixed_enthalpy: mixed,
        chamber_enthalpy: chamber,
        mach: exhaust_velocity.value / exit_sound_speed.value,
        exit,
        exhaust_velocity,
        exit_sound_speed,
        thrust,
    })
}
