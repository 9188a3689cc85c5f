//! ps-reference: static reference data consumed by the sizing core.
//!
//! Provides:
//! - industries and their discharge standards
//! - suggested coagulants/flocculants per industry with default dose and price
//! - the equipment catalog and the fixed-cost items of a quote
//!
//! Every lookup keyed by a free-form string returns `Option`, so an unknown
//! industry degrades to "no standards / no chemicals" instead of failing.

pub mod chemicals;
pub mod equipment;
pub mod industry;
pub mod standards;

// Re-exports
pub use chemicals::{Chemical, SuggestedChemical, lookup_suggested_chemicals, suggested_chemicals};
pub use equipment::{
    CatalogEntry, FIXED_COST_IDS, FixedCost, PricingRule, equipment_catalog, fixed_costs,
    fixed_costs_total, is_fixed_cost,
};
pub use industry::Industry;
pub use standards::{IndustryStandard, PhRange, lookup_standards, standards};
