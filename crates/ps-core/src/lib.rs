//! ps-core: stable foundation for plantsizer.
//!
//! Contains:
//! - units (uom SI types + constructors for tank geometry)
//! - numeric (Real + tolerances + input coercion helpers)
//! - plant (plant type, treatment train and tank stage identities)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod plant;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PsError, PsResult};
pub use numeric::*;
pub use plant::{PlantType, TankStage, TreatmentTrain};
pub use units::*;
