//! Flow rates and the combustion heat budget.

use crate::config::{CycleConstants, ScenarioParameters};
use rc_core::units::{MassRate, Power, w};
use serde::Serialize;

/// Mass and molar flow rates of both propellants.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowRates {
    pub fuel_mass: MassRate,
    pub oxidizer_mass: MassRate,
    pub total_mass: MassRate,
    /// [mol/s]
    pub fuel_molar: f64,
    /// [mol/s]
    pub oxidizer_molar: f64,
}

impl FlowRates {
    pub fn compute(scenario: &ScenarioParameters, constants: &CycleConstants) -> Self {
        let fuel_mass = scenario.fuel_mass_flow();
        let oxidizer_mass = scenario.oxidizer_mass_flow();
        Self {
            fuel_mass,
            oxidizer_mass,
            total_mass: fuel_mass + oxidizer_mass,
            fuel_molar: molar_flow(fuel_mass, constants.fuel_molar_mass_g_mol),
            oxidizer_molar: molar_flow(oxidizer_mass, constants.oxidizer_molar_mass_g_mol),
        }
    }
}

/// Molar flow [mol/s] from a mass flow and a molar mass in g/mol.
pub fn molar_flow(mass: MassRate, molar_mass_g_mol: f64) -> f64 {
    mass.value / (molar_mass_g_mol * 1e-3)
}

/// Heat release rate with oxygen as the limiting reagent.
pub fn combustion_heat(oxidizer_molar: f64, constants: &CycleConstants) -> Power {
    w(oxidizer_molar / constants.oxidizer_to_fuel_mole_ratio * constants.combustion_heat_j_per_mol)
}

/// Where the combustion heat goes.
///
/// `fuel_absorbed + oxidizer_absorbed == wall`, and `wall <= combustion`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatBudget {
    pub combustion: Power,
    /// Heat rejected into the chamber wall in this scenario.
    pub wall: Power,
    /// Picked up by the fuel in the cooling jacket.
    pub fuel_absorbed: Power,
    /// Remainder of the wall heat, attributed to the oxidizer.
    pub oxidizer_absorbed: Power,
    /// Heat left in the combustion gas after the fixed wall loss.
    pub chamber_retained: Power,
}

impl HeatBudget {
    pub fn compute(
        flow: &FlowRates,
        scenario: &ScenarioParameters,
        constants: &CycleConstants,
    ) -> Self {
        let combustion = combustion_heat(flow.oxidizer_molar, constants);
        let wall = combustion * scenario.wall_heat_fraction;
        let fuel_absorbed = wall * scenario.fuel_heat_factor;
        Self {
            combustion,
            wall,
            fuel_absorbed,
            oxidizer_absorbed: wall - fuel_absorbed,
            chamber_retained: combustion * (1.0 - constants.wall_loss_fraction),
        }
    }
}
