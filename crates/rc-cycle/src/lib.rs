//! rc-cycle: static thermodynamic analysis of a regeneratively cooled
//! bipropellant engine.
//!
//! The analysis is a fixed chain of stages evaluated once per scenario:
//!
//! 1. [`flow`]: mass and molar flow rates
//! 2. [`flow::HeatBudget`]: combustion heat and its split into the wall
//! 3. [`states::injector_state`]: saturated liquid at the injector
//! 4. [`states::preheat_state`]: energy balance back to the jacket inlet
//! 5. [`states::tank_state`]: isentropic pump back to the tank
//! 6. [`pump`]: pump work
//! 7. [`thrust`]: exhaust velocity and thrust
//!
//! [`pipeline::run_scenario`] wires the stages together; every stage is a
//! plain function of its inputs.

pub mod config;
pub mod error;
pub mod flow;
pub mod pipeline;
pub mod pump;
pub mod report;
pub mod states;
pub mod thrust;

pub use config::{CycleConfig, CycleConstants, ScenarioParameters};
pub use error::{CycleError, CycleResult};
pub use flow::{FlowRates, HeatBudget};
pub use pipeline::{ScenarioReport, StreamReport, run_all, run_scenario};
pub use pump::PumpWork;
pub use states::{Location, StreamStates};
pub use thrust::ThrustResult;
