//! Pump work between tank and jacket inlet.

use crate::states::StreamStates;
use serde::Serialize;

/// Work figure for one propellant pump.
///
/// `reported_work` reproduces the published figures: the enthalpy rise
/// divided by the stream's mass flow. That quantity is labelled W in the
/// report, although its units are J·s/kg²; the physical shaft power would be
/// `enthalpy_rise × mdot`, exposed as [`PumpWork::shaft_power_w`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpWork {
    /// `h_preheat - h_tank` at constant entropy [J/kg]
    pub enthalpy_rise: f64,
    /// `enthalpy_rise / mdot`, reported as "W"
    pub reported_work: f64,
    /// Mass flow the figure was derived with [kg/s]
    pub mass_flow_kg_s: f64,
}

impl PumpWork {
    pub fn compute(stream: &StreamStates) -> Self {
        let enthalpy_rise = stream.preheat.enthalpy - stream.tank.enthalpy;
        let mass_flow_kg_s = stream.mass_flow.value;
        Self {
            enthalpy_rise,
            reported_work: enthalpy_rise / mass_flow_kg_s,
            mass_flow_kg_s,
        }
    }

    /// Dimensionally consistent pump power [W].
    pub fn shaft_power_w(&self) -> f64 {
        self.enthalpy_rise * self.mass_flow_kg_s
    }
}
