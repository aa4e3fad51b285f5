//! Cycle constants and scenario parameters.
//!
//! Everything here is plain data loaded once and passed by reference into
//! the stages. YAML is the on-disk format.

use crate::error::{CycleError, CycleResult};
use rc_core::numeric::{ensure_fraction, ensure_positive, ensure_positive_fraction};
use rc_core::units::constants::STANDARD_ATMOSPHERE_PA;
use rc_core::units::{MassRate, Pressure, Temperature, k, kgps, pa};
use rc_fluids::Species;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine-wide constants shared by every scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CycleConstants {
    pub fuel: Species,
    pub oxidizer: Species,
    /// Species whose properties stand in for the exhaust gas.
    pub exhaust: Species,
    pub fuel_molar_mass_g_mol: f64,
    pub oxidizer_molar_mass_g_mol: f64,
    /// Heat released per mole of fuel burned [J/mol].
    pub combustion_heat_j_per_mol: f64,
    /// Moles of oxidizer consumed per mole of fuel (3 for ethanol + O2).
    pub oxidizer_to_fuel_mole_ratio: f64,
    /// Fraction of the combustion heat conducted into the chamber wall.
    pub wall_loss_fraction: f64,
    pub max_material_temperature_k: f64,
    pub safety_factor: f64,
    pub ambient_pressure_pa: f64,
}

impl Default for CycleConstants {
    fn default() -> Self {
        Self {
            fuel: Species::Ethanol,
            oxidizer: Species::O2,
            exhaust: Species::CO2,
            fuel_molar_mass_g_mol: 46.068,
            oxidizer_molar_mass_g_mol: 32.0,
            combustion_heat_j_per_mol: 1.35e6,
            oxidizer_to_fuel_mole_ratio: 3.0,
            wall_loss_fraction: 0.05,
            max_material_temperature_k: 973.0,
            safety_factor: 0.8,
            ambient_pressure_pa: STANDARD_ATMOSPHERE_PA,
        }
    }
}

impl CycleConstants {
    pub fn validate(&self) -> CycleResult<()> {
        ensure_positive(self.fuel_molar_mass_g_mol, "fuel molar mass")?;
        ensure_positive(self.oxidizer_molar_mass_g_mol, "oxidizer molar mass")?;
        ensure_positive(self.combustion_heat_j_per_mol, "combustion heat")?;
        ensure_positive(self.oxidizer_to_fuel_mole_ratio, "oxidizer-to-fuel mole ratio")?;
        ensure_fraction(self.wall_loss_fraction, "wall loss fraction")?;
        ensure_positive(self.max_material_temperature_k, "max material temperature")?;
        ensure_positive_fraction(self.safety_factor, "safety factor")?;
        ensure_positive(self.ambient_pressure_pa, "ambient pressure")?;
        Ok(())
    }

    /// Nozzle-exit temperature: derated material limit.
    pub fn exhaust_temperature(&self) -> Temperature {
        k(self.max_material_temperature_k * self.safety_factor)
    }

    pub fn ambient_pressure(&self) -> Pressure {
        pa(self.ambient_pressure_pa)
    }
}

fn one() -> f64 {
    1.0
}

/// Per-scenario operating point.
///
/// Fuel-side absorbed heat is `fuel_heat_factor × wall_heat_fraction ×
/// combustion heat`. The reference "improved" scenario sets the factor to
/// 0.05 on top of a 0.5 wall fraction, reproducing the published figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioParameters {
    pub name: String,
    pub fuel_mass_flow_kg_s: f64,
    pub oxidizer_mass_flow_kg_s: f64,
    pub feed_pressure_pa: f64,
    pub tank_pressure_pa: f64,
    pub wall_heat_fraction: f64,
    #[serde(default = "one")]
    pub fuel_heat_factor: f64,
}

impl ScenarioParameters {
    /// Ethanol carries 5% of the combustion heat.
    pub fn baseline() -> Self {
        Self {
            name: "baseline".to_string(),
            fuel_mass_flow_kg_s: 0.125,
            oxidizer_mass_flow_kg_s: 0.125,
            feed_pressure_pa: 1.2e6,
            tank_pressure_pa: 3.0e5,
            wall_heat_fraction: 0.05,
            fuel_heat_factor: 1.0,
        }
    }

    /// Ethanol carries half of the wall heat, oxygen the rest.
    pub fn improved() -> Self {
        Self {
            name: "improved".to_string(),
            wall_heat_fraction: 0.5,
            fuel_heat_factor: 0.05,
            ..Self::baseline()
        }
    }

    pub fn validate(&self) -> CycleResult<()> {
        ensure_positive(self.fuel_mass_flow_kg_s, "fuel mass flow")?;
        ensure_positive(self.oxidizer_mass_flow_kg_s, "oxidizer mass flow")?;
        ensure_positive(self.feed_pressure_pa, "feed pressure")?;
        ensure_positive(self.tank_pressure_pa, "tank pressure")?;
        ensure_fraction(self.wall_heat_fraction, "wall heat fraction")?;
        ensure_fraction(self.fuel_heat_factor, "fuel heat factor")?;
        if self.tank_pressure_pa > self.feed_pressure_pa {
            return Err(CycleError::InvalidParameter {
                what: "tank pressure above feed pressure",
                value: self.tank_pressure_pa,
            });
        }
        Ok(())
    }

    pub fn fuel_mass_flow(&self) -> MassRate {
        kgps(self.fuel_mass_flow_kg_s)
    }

    pub fn oxidizer_mass_flow(&self) -> MassRate {
        kgps(self.oxidizer_mass_flow_kg_s)
    }

    pub fn feed_pressure(&self) -> Pressure {
        pa(self.feed_pressure_pa)
    }

    pub fn tank_pressure(&self) -> Pressure {
        pa(self.tank_pressure_pa)
    }
}

/// A configuration file: shared constants plus the scenarios to evaluate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleConfig {
    #[serde(default)]
    pub constants: CycleConstants,
    pub scenarios: Vec<ScenarioParameters>,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl CycleConfig {
    /// Reference constants with the baseline and improved scenarios.
    pub fn reference() -> Self {
        Self {
            constants: CycleConstants::default(),
            scenarios: vec![ScenarioParameters::baseline(), ScenarioParameters::improved()],
        }
    }

    pub fn validate(&self) -> CycleResult<()> {
        self.constants.validate()?;
        if self.scenarios.is_empty() {
            return Err(CycleError::Config {
                what: "no scenarios defined".to_string(),
            });
        }
        for (i, scenario) in self.scenarios.iter().enumerate() {
            if self.scenarios[..i].iter().any(|s| s.name == scenario.name) {
                return Err(CycleError::Config {
                    what: format!("duplicate scenario name '{}'", scenario.name),
                });
            }
            scenario.validate()?;
        }
        Ok(())
    }

    pub fn scenario(&self, name: &str) -> Option<&ScenarioParameters> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn from_yaml_str(content: &str) -> CycleResult<Self> {
        let config: CycleConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> CycleResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn load_yaml(path: &Path) -> CycleResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn save_yaml(&self, path: &Path) -> CycleResult<()> {
        self.validate()?;
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_config_is_valid() {
        let config = CycleConfig::reference();
        config.validate().unwrap();
        assert_eq!(config.scenarios.len(), 2);
        assert!(config.scenario("baseline").is_some());
        assert!(config.scenario("improved").is_some());
    }

    #[test]
    fn exhaust_temperature_is_derated_limit() {
        let constants = CycleConstants::default();
        assert!((constants.exhaust_temperature().value - 778.4).abs() < 1e-9);
    }

    #[test]
    fn improved_keeps_baseline_operating_point() {
        let base = ScenarioParameters::baseline();
        let improved = ScenarioParameters::improved();
        assert_eq!(improved.fuel_mass_flow_kg_s, base.fuel_mass_flow_kg_s);
        assert_eq!(improved.feed_pressure_pa, base.feed_pressure_pa);
        assert_eq!(improved.wall_heat_fraction, 0.5);
        assert_eq!(improved.fuel_heat_factor, 0.05);
    }

    #[test]
    fn non_positive_mass_flow_is_rejected() {
        let scenario = ScenarioParameters {
            fuel_mass_flow_kg_s: 0.0,
            ..ScenarioParameters::baseline()
        };
        let err = scenario.validate().unwrap_err();
        assert!(matches!(
            err,
            CycleError::InvalidParameter {
                what: "fuel mass flow",
                ..
            }
        ));
    }

    #[test]
    fn safety_factor_must_lie_in_half_open_unit_interval() {
        for bad in [0.0, -0.2, 1.1, f64::NAN] {
            let constants = CycleConstants {
                safety_factor: bad,
                ..CycleConstants::default()
            };
            assert!(matches!(
                constants.validate(),
                Err(CycleError::InvalidParameter { what: "safety factor", .. })
            ));
        }
        let full = CycleConstants {
            safety_factor: 1.0,
            ..CycleConstants::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn fraction_outside_unit_interval_is_rejected() {
        let scenario = ScenarioParameters {
            wall_heat_fraction: 1.5,
            ..ScenarioParameters::baseline()
        };
        assert!(matches!(
            scenario.validate(),
            Err(CycleError::InvalidParameter {
                what: "wall heat fraction",
                value,
            }) if value == 1.5
        ));
    }

    #[test]
    fn tank_above_feed_is_rejected() {
        let scenario = ScenarioParameters {
            tank_pressure_pa: 2.0e6,
            ..ScenarioParameters::baseline()
        };
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut config = CycleConfig::reference();
        config.scenarios.push(ScenarioParameters::baseline());
        assert!(matches!(config.validate(), Err(CycleError::Config { .. })));
    }

    #[test]
    fn yaml_with_defaults() {
        let yaml = r#"
scenarios:
  - name: hot
    fuel_mass_flow_kg_s: 0.2
    oxidizer_mass_flow_kg_s: 0.3
    feed_pressure_pa: 1.5e6
    tank_pressure_pa: 4.0e5
    wall_heat_fraction: 0.1
"#;
        let config = CycleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.constants, CycleConstants::default());
        let hot = config.scenario("hot").unwrap();
        assert_eq!(hot.fuel_heat_factor, 1.0);
        assert_eq!(hot.oxidizer_mass_flow().value, 0.3);
    }

    #[test]
    fn yaml_load_validates() {
        let yaml = r#"
scenarios:
  - name: broken
    fuel_mass_flow_kg_s: -0.1
    oxidizer_mass_flow_kg_s: 0.1
    feed_pressure_pa: 1.0e6
    tank_pressure_pa: 1.0e5
    wall_heat_fraction: 0.05
"#;
        assert!(CycleConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn reference_survives_yaml() {
        let config = CycleConfig::reference();
        let text = config.to_yaml_string().unwrap();
        assert_eq!(CycleConfig::from_yaml_str(&text).unwrap(), config);
    }
}
