//! rc-fluids: fluid property lookups for the regenerative cycle.
//!
//! Provides:
//! - Chemical species definitions (ethanol, O2, CO2, ...)
//! - Typed state inputs (P-T, P-Q, P-h, P-s) and the resolved [`FluidPoint`]
//! - `FluidModel` trait for property lookups
//! - CoolProp backend for real fluid properties
//! - A closed-form incompressible liquid model for deterministic testing
//!
//! # Architecture
//!
//! The rest of the workspace only talks to the `FluidModel` trait. CoolProp
//! (via `rfluids`) is the production backend; it performs every flash
//! directly, so no root finding happens on this side of the boundary.
//!
//! # Example
//!
//! ```no_run
//! use rc_fluids::{CoolPropModel, FluidModel, Species};
//! use rc_core::units::pa;
//!
//! let model = CoolPropModel::new();
//! let sat = model.state_from_pq(Species::Ethanol, pa(1.2e6), 0.0).unwrap();
//! println!("T_sat = {:.2} K, h = {:.1} J/kg", sat.temperature.value, sat.enthalpy);
//! ```

pub mod coolprop;
pub mod error;
pub mod linear;
pub mod model;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use linear::{LinearFluidModel, LinearLiquid};
pub use model::FluidModel;
pub use species::Species;
pub use state::{FluidPoint, InputPair, SpecEnthalpy, SpecEntropy, StateInput};
