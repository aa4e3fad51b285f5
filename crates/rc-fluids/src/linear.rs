//! Constant-property liquid model.
//!
//! A closed-form stand-in for a real-fluid backend: constant specific heat,
//! constant density, and a Clausius-Clapeyron saturation line anchored at one
//! known boiling point. It is exact enough to check energy and entropy
//! bookkeeping without CoolProp, and every lookup is an explicit formula:
//!
//! ```text
//! h(T, P) = cp (T - T_ref) + (P - P_ref) / rho
//! s(T)    = cp ln(T / T_ref)
//! 1 / T_sat(P) = 1 / T_ref - (R / (M L)) ln(P / P_ref)
//! ```

use crate::error::{FluidError, FluidResult};
use crate::model::FluidModel;
use crate::species::Species;
use crate::state::{FluidPoint, StateInput};
use rc_core::units::constants::{R_UNIVERSAL, STANDARD_ATMOSPHERE_PA};
use rc_core::units::{Pressure, Temperature, Velocity, k, mps};
use std::collections::HashMap;

/// Coefficients of one incompressible liquid.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearLiquid {
    /// Specific heat [J/(kg·K)]
    pub cp: f64,
    /// Density [kg/m³]
    pub density: f64,
    /// Saturation temperature at `p_ref` [K]; zero of enthalpy and entropy
    pub t_ref: f64,
    /// Reference pressure [Pa]
    pub p_ref: f64,
    /// Latent heat of vaporization [J/kg]
    pub latent_heat: f64,
    /// Molar mass [g/mol]
    pub molar_mass: f64,
    /// Lowest resolvable temperature (freezing point) [K]
    pub t_min: f64,
    /// Speed of sound [m/s]
    pub sound_speed: f64,
}

impl LinearLiquid {
    pub fn ethanol() -> Self {
        Self {
            cp: 2650.0,
            density: 789.0,
            t_ref: 351.39,
            p_ref: STANDARD_ATMOSPHERE_PA,
            latent_heat: 846.0e3,
            molar_mass: Species::Ethanol.molar_mass(),
            t_min: 159.0,
            sound_speed: 1144.0,
        }
    }

    pub fn oxygen() -> Self {
        Self {
            cp: 1700.0,
            density: 1141.0,
            t_ref: 90.19,
            p_ref: STANDARD_ATMOSPHERE_PA,
            latent_heat: 213.1e3,
            molar_mass: Species::O2.molar_mass(),
            t_min: 54.36,
            sound_speed: 903.0,
        }
    }

    /// Coarse hot-gas stand-in: only P-T lookups at reference pressure are meaningful.
    pub fn carbon_dioxide() -> Self {
        Self {
            cp: 1100.0,
            density: 1.8,
            t_ref: 298.15,
            p_ref: STANDARD_ATMOSPHERE_PA,
            latent_heat: 574.0e3,
            molar_mass: Species::CO2.molar_mass(),
            t_min: 216.59,
            sound_speed: 430.0,
        }
    }

    pub fn enthalpy(&self, t_k: f64, p_pa: f64) -> f64 {
        self.cp * (t_k - self.t_ref) + (p_pa - self.p_ref) / self.density
    }

    pub fn entropy(&self, t_k: f64) -> f64 {
        self.cp * (t_k / self.t_ref).ln()
    }

    pub fn saturation_temperature(&self, p_pa: f64) -> f64 {
        let r_specific = R_UNIVERSAL / (self.molar_mass * 1e-3);
        let inv_t = 1.0 / self.t_ref - r_specific / self.latent_heat * (p_pa / self.p_ref).ln();
        1.0 / inv_t
    }

    fn check_temperature(&self, t_k: f64) -> FluidResult<f64> {
        if !t_k.is_finite() || t_k < self.t_min {
            return Err(FluidError::OutOfRange {
                what: "temperature below the liquid range",
            });
        }
        Ok(t_k)
    }
}

/// Fluid model backed by [`LinearLiquid`] coefficients per species.
#[derive(Debug, Clone, Default)]
pub struct LinearFluidModel {
    fluids: HashMap<Species, LinearLiquid>,
}

impl LinearFluidModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ethanol, oxygen and carbon dioxide with textbook coefficients.
    pub fn propellants() -> Self {
        Self::new()
            .with(Species::Ethanol, LinearLiquid::ethanol())
            .with(Species::O2, LinearLiquid::oxygen())
            .with(Species::CO2, LinearLiquid::carbon_dioxide())
    }

    pub fn with(mut self, species: Species, liquid: LinearLiquid) -> Self {
        self.fluids.insert(species, liquid);
        self
    }

    pub fn liquid(&self, species: Species) -> FluidResult<&LinearLiquid> {
        self.fluids.get(&species).ok_or(FluidError::NotSupported {
            what: "species has no linear coefficients",
        })
    }
}

impl FluidModel for LinearFluidModel {
    fn name(&self) -> &str {
        "LinearLiquid"
    }

    fn supports(&self, species: Species) -> bool {
        self.fluids.contains_key(&species)
    }

    fn state(&self, species: Species, input: StateInput) -> FluidResult<FluidPoint> {
        input.validate()?;
        let liquid = self.liquid(species)?;
        let p = input.pressure();
        let p_pa = p.value;

        match input {
            StateInput::PT { t, .. } => {
                let t_k = liquid.check_temperature(t.value)?;
                FluidPoint::new(
                    species,
                    p,
                    t,
                    liquid.enthalpy(t_k, p_pa),
                    liquid.entropy(t_k),
                    None,
                )
            }
            StateInput::PQ { q, .. } => {
                if q != 0.0 {
                    return Err(FluidError::NotSupported {
                        what: "linear liquid model resolves saturated liquid only",
                    });
                }
                let t_k = liquid.check_temperature(liquid.saturation_temperature(p_pa))?;
                FluidPoint::new(
                    species,
                    p,
                    k(t_k),
                    liquid.enthalpy(t_k, p_pa),
                    liquid.entropy(t_k),
                    Some(q),
                )
            }
            StateInput::PH { h, .. } => {
                let t_k = liquid.t_ref + (h - (p_pa - liquid.p_ref) / liquid.density) / liquid.cp;
                let t_k = liquid.check_temperature(t_k)?;
                FluidPoint::new(species, p, k(t_k), h, liquid.entropy(t_k), None)
            }
            StateInput::PS { s, .. } => {
                let t_k = liquid.check_temperature(liquid.t_ref * (s / liquid.cp).exp())?;
                FluidPoint::new(species, p, k(t_k), liquid.enthalpy(t_k, p_pa), s, None)
            }
        }
    }

    fn sound_speed(
        &self,
        species: Species,
        p: Pressure,
        t: Temperature,
    ) -> FluidResult<Velocity> {
        StateInput::PT { p, t }.validate()?;
        Ok(mps(self.liquid(species)?.sound_speed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rc_core::units::pa;

    #[test]
    fn saturation_at_reference_pressure_is_reference_temperature() {
        let liquid = LinearLiquid::ethanol();
        let t = liquid.saturation_temperature(STANDARD_ATMOSPHERE_PA);
        assert!((t - liquid.t_ref).abs() < 1e-9);
    }

    #[test]
    fn saturation_temperature_rises_with_pressure() {
        let liquid = LinearLiquid::ethanol();
        let t1 = liquid.saturation_temperature(3.0e5);
        let t2 = liquid.saturation_temperature(1.2e6);
        assert!(t2 > t1);
        assert!(t1 > liquid.t_ref);
    }

    #[test]
    fn ph_inverts_pt() {
        let model = LinearFluidModel::propellants();
        let forward = model
            .state_from_pt(Species::Ethanol, pa(1.2e6), k(300.0))
            .unwrap();
        let back = model
            .state_from_ph(Species::Ethanol, pa(1.2e6), forward.enthalpy)
            .unwrap();
        assert!((back.temperature.value - 300.0).abs() < 1e-9);
        assert!((back.entropy - forward.entropy).abs() < 1e-9);
    }

    #[test]
    fn ps_echoes_queried_entropy() {
        let model = LinearFluidModel::propellants();
        let point = model.state_from_ps(Species::O2, pa(3.0e5), 123.456).unwrap();
        assert_eq!(point.entropy, 123.456);
    }

    #[test]
    fn below_freezing_is_out_of_range() {
        let model = LinearFluidModel::propellants();
        let err = model
            .state_from_ph(Species::O2, pa(1.2e6), -1.0e6)
            .expect_err("far below the triple point");
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn unknown_species_not_supported() {
        let model = LinearFluidModel::propellants();
        assert!(!model.supports(Species::CO2));
        let err = model
            .state_from_pq(Species::CO2, pa(1.0e5), 0.0)
            .expect_err("no coefficients for carbon dioxide");
        assert!(matches!(err, FluidError::NotSupported { .. }));
    }

    proptest! {
        #[test]
        fn ps_inverts_pt(t in 170.0f64..420.0, p in 1.0e5f64..2.0e6) {
            let model = LinearFluidModel::propellants();
            let forward = model.state_from_pt(Species::Ethanol, pa(p), k(t)).unwrap();
            let back = model.state_from_ps(Species::Ethanol, pa(p), forward.entropy).unwrap();
            prop_assert!((back.temperature.value - t).abs() < 1e-9);
            prop_assert!((back.enthalpy - forward.enthalpy).abs() < 1e-6);
        }
    }

    #[test]
    fn only_saturated_liquid_quality() {
        let model = LinearFluidModel::propellants();
        assert!(model.state_from_pq(Species::O2, pa(1.0e6), 0.0).is_ok());
        assert!(model.state_from_pq(Species::O2, pa(1.0e6), 0.5).is_err());
    }
}
