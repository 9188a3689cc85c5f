//! ps-pricing: equipment sizing and cost aggregation.
//!
//! Turns catalog pricing rules plus the current plant into priced line items:
//! - `sizing`: size input of each rule (capacity, diameter, volume, flow)
//! - `map`: the priced equipment list, keyed by catalog id
//! - `engine`: capacity refresh and quantity edits
//! - `totals`: both named cost subtotals

pub mod engine;
pub mod map;
pub mod sizing;
pub mod totals;

// Re-exports
pub use engine::{QuantityChange, set_quantity, update_capacities};
pub use map::{EquipmentItem, EquipmentMap};
pub use sizing::{SizeBasis, clarifier_diameter_m, size_for, unit_price};
pub use totals::{CostTotals, equipment_only_subtotal, total_cost};
