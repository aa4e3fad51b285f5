//! Scenario runner: validates the inputs, then evaluates every stage once.

use crate::config::{CycleConfig, CycleConstants, ScenarioParameters};
use crate::error::CycleResult;
use crate::flow::{FlowRates, HeatBudget};
use crate::pump::PumpWork;
use crate::states::StreamStates;
use crate::thrust::{self, ThrustResult};
use rc_core::units::w;
use rc_fluids::FluidModel;
use serde::Serialize;
use tracing::{info, info_span};

/// States and pump figure of one propellant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamReport {
    pub states: StreamStates,
    pub pump: PumpWork,
}

impl StreamReport {
    fn new(states: StreamStates) -> Self {
        let pump = PumpWork::compute(&states);
        Self { states, pump }
    }
}

/// Everything computed for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub scenario: ScenarioParameters,
    pub flow: FlowRates,
    pub heat: HeatBudget,
    pub fuel: StreamReport,
    pub oxidizer: StreamReport,
    pub thrust: ThrustResult,
}

/// Run one scenario. Parameters are validated before the first lookup.
pub fn run_scenario(
    model: &dyn FluidModel,
    constants: &CycleConstants,
    scenario: &ScenarioParameters,
) -> CycleResult<ScenarioReport> {
    constants.validate()?;
    scenario.validate()?;

    let span = info_span!("scenario", name = %scenario.name, model = model.name());
    let _enter = span.enter();

    let flow = FlowRates::compute(scenario, constants);
    let heat = HeatBudget::compute(&flow, scenario, constants);
    info!(
        total_mass_kg_s = flow.total_mass.value,
        combustion_w = heat.combustion.value,
        wall_w = heat.wall.value,
        fuel_absorbed_w = heat.fuel_absorbed.value,
        "heat budget"
    );

    let fuel = StreamStates::compute(
        model,
        constants.fuel,
        scenario.feed_pressure(),
        scenario.tank_pressure(),
        heat.fuel_absorbed,
        flow.fuel_mass,
    )?;
    // The oxidizer is fed straight to the injector; its wall share is not
    // applied to its own path.
    let oxidizer = StreamStates::compute(
        model,
        constants.oxidizer,
        scenario.feed_pressure(),
        scenario.tank_pressure(),
        w(0.0),
        flow.oxidizer_mass,
    )?;

    let thrust = thrust::compute(
        model,
        constants,
        &flow,
        &heat,
        &fuel.injector,
        &oxidizer.injector,
    )?;

    let report = ScenarioReport {
        scenario: scenario.clone(),
        flow,
        heat,
        fuel: StreamReport::new(fuel),
        oxidizer: StreamReport::new(oxidizer),
        thrust,
    };
    info!(
        fuel_pump = report.fuel.pump.reported_work,
        oxidizer_pump = report.oxidizer.pump.reported_work,
        thrust_n = report.thrust.thrust.value,
        "scenario complete"
    );
    Ok(report)
}

/// Run every scenario of a configuration, stopping at the first failure.
pub fn run_all(model: &dyn FluidModel, config: &CycleConfig) -> CycleResult<Vec<ScenarioReport>> {
    config.validate()?;
    config
        .scenarios
        .iter()
        .map(|scenario| run_scenario(model, &config.constants, scenario))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CycleError;
    use rc_core::units::{Pressure, Temperature, Velocity};
    use rc_fluids::{FluidPoint, FluidResult, LinearFluidModel, Species, StateInput};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts lookups made through an inner model.
    struct Counting {
        inner: LinearFluidModel,
        calls: AtomicUsize,
    }

    impl Counting {
        fn new() -> Self {
            Self {
                inner: LinearFluidModel::propellants(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FluidModel for Counting {
        fn name(&self) -> &str {
            "Counting"
        }

        fn supports(&self, species: Species) -> bool {
            self.inner.supports(species)
        }

        fn state(&self, species: Species, input: StateInput) -> FluidResult<FluidPoint> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.state(species, input)
        }

        fn sound_speed(
            &self,
            species: Species,
            p: Pressure,
            t: Temperature,
        ) -> FluidResult<Velocity> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.sound_speed(species, p, t)
        }
    }

    #[test]
    fn invalid_parameters_fail_before_any_lookup() {
        let model = Counting::new();
        let scenario = ScenarioParameters {
            oxidizer_mass_flow_kg_s: -0.125,
            ..ScenarioParameters::baseline()
        };
        let err = run_scenario(&model, &CycleConstants::default(), &scenario).unwrap_err();
        assert!(matches!(err, CycleError::InvalidParameter { .. }));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn each_state_is_looked_up_once() {
        let model = Counting::new();
        run_scenario(
            &model,
            &CycleConstants::default(),
            &ScenarioParameters::baseline(),
        )
        .unwrap();
        // 3 states per stream, exit state, exit sound speed
        assert_eq!(model.calls.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn thrust_does_not_depend_on_scenario() {
        let model = LinearFluidModel::propellants();
        let reports = run_all(&model, &CycleConfig::reference()).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].thrust, reports[1].thrust);
    }

    #[test]
    fn improved_scenario_warms_the_fuel_inlet() {
        let model = LinearFluidModel::propellants();
        let reports = run_all(&model, &CycleConfig::reference()).unwrap();
        let (base, improved) = (&reports[0], &reports[1]);

        assert_eq!(base.scenario.name, "baseline");
        assert!(improved.fuel.states.preheat.temperature > base.fuel.states.preheat.temperature);
        assert!(improved.fuel.states.tank.temperature > base.fuel.states.tank.temperature);
        assert_eq!(base.oxidizer.states, improved.oxidizer.states);
    }

    #[test]
    fn oxidizer_path_starts_at_injector_state() {
        let model = LinearFluidModel::propellants();
        let report = run_scenario(
            &model,
            &CycleConstants::default(),
            &ScenarioParameters::improved(),
        )
        .unwrap();
        let ox = &report.oxidizer.states;
        assert_eq!(ox.preheat.enthalpy, ox.injector.enthalpy);
        assert!(report.heat.oxidizer_absorbed.value > 0.0);
    }

    #[test]
    fn empty_config_is_rejected() {
        let model = LinearFluidModel::propellants();
        let config = CycleConfig {
            constants: CycleConstants::default(),
            scenarios: Vec::new(),
        };
        assert!(matches!(
            run_all(&model, &config),
            Err(CycleError::Config { .. })
        ));
    }
}
