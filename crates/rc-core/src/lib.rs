//! rc-core: stable foundation for the regenerative-cycle workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + float guards)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
