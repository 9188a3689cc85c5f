//! ps-sizing: the plant-sizing calculation core.
//!
//! Maps influent parameters to tank volumes, chemical consumption and sludge
//! generation:
//! - `biological` / `chemical`: the two treatment-train volume calculators
//! - `formulas`: stage formulas shared by both trains
//! - `tanks`: the per-stage volume set and its derived geometry
//! - `dosing`, `sludge`, `recommend`: chemical dosing and sludge estimates
//! - `compliance`: influent parameters against the industry standards
//!
//! Every function here is total. Non-finite inputs are coerced to zero and
//! volumes are clamped at zero, so the calculators degrade to a zero-valued
//! result instead of failing.
//!
//! # Example
//!
//! ```
//! use ps_core::TreatmentTrain;
//! use ps_core::TankStage;
//! use ps_sizing::{PlantParameters, tank_volumes};
//!
//! let params = PlantParameters {
//!     capacity_m3_per_day: 1000.0,
//!     bod_mg_l: 300.0,
//!     tss_mg_l: 400.0,
//!     ..PlantParameters::default()
//! };
//!
//! let tanks = tank_volumes(TreatmentTrain::Biological, &params);
//! let sludge = tanks.volume_m3(TankStage::SludgeHoldingTank).unwrap();
//! assert!((sludge - 11.4).abs() < 1e-9);
//! ```

pub mod biological;
pub mod chemical;
pub mod compliance;
pub mod dosing;
pub mod formulas;
pub mod params;
pub mod recommend;
pub mod sludge;
pub mod tanks;

// Re-exports
pub use compliance::{Limit, ParameterCheck, compliance, plant_compliance};
pub use dosing::{ChemicalDosing, DosingSummary, MAX_OPERATION_HOURS};
pub use params::PlantParameters;
pub use recommend::{DosingAgent, recommendations};
pub use sludge::SludgeEstimate;
pub use tanks::{TankDimensions, TankVolumeSet, breadth_m, tank_volumes};
