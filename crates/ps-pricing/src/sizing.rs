//! Size inputs for catalog pricing rules.

use core::f64::consts::PI;

use ps_core::numeric::non_negative;
use ps_reference::PricingRule;
use ps_sizing::{PlantParameters, TankVolumeSet};
use serde::Serialize;

/// Clarifier surface overflow rate (m³/m²/hr).
pub const CLARIFIER_SURFACE_LOADING: f64 = 1.0;

/// What the size figure of a line item measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SizeBasis {
    Capacity,
    Diameter,
    Volume,
    Flow,
    Piece,
}

impl SizeBasis {
    pub fn of(rule: &PricingRule) -> Self {
        match rule {
            PricingRule::PerCapacity { .. } => SizeBasis::Capacity,
            PricingRule::PerDiameter { .. } => SizeBasis::Diameter,
            PricingRule::PerVolume { .. } => SizeBasis::Volume,
            PricingRule::PerFlow { .. } => SizeBasis::Flow,
            PricingRule::PerPiece { .. } => SizeBasis::Piece,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SizeBasis::Capacity => "m³/day",
            SizeBasis::Diameter => "m",
            SizeBasis::Volume => "m³",
            SizeBasis::Flow => "m³/hr",
            SizeBasis::Piece => "pc",
        }
    }
}

/// Clarifier diameter (m) for the design flow at the surface loading rate.
pub fn clarifier_diameter_m(flow_m3_per_hr: f64) -> f64 {
    let area = non_negative(flow_m3_per_hr) / CLARIFIER_SURFACE_LOADING;
    (4.0 * area / PI).sqrt()
}

/// Size figure for `rule`. Volume rules read the tank of the active train
/// and size to zero when that train has no such tank.
pub fn size_for(rule: &PricingRule, params: &PlantParameters, tanks: &TankVolumeSet) -> f64 {
    match rule {
        PricingRule::PerCapacity { .. } => non_negative(params.capacity_m3_per_day),
        PricingRule::PerDiameter { .. } => clarifier_diameter_m(params.flow_rate()),
        PricingRule::PerVolume { stage, .. } => tanks.volume_m3(*stage).unwrap_or(0.0),
        PricingRule::PerFlow { .. } => params.flow_rate(),
        PricingRule::PerPiece { .. } => 1.0,
    }
}

/// Base price of one unit at `size`.
pub fn unit_price(rule: &PricingRule, size: f64) -> f64 {
    let size = non_negative(size);
    match *rule {
        PricingRule::PerCapacity { cost_per_m3_day } => cost_per_m3_day * size,
        PricingRule::PerDiameter { cost_per_m } => cost_per_m * size,
        PricingRule::PerVolume { cost_per_m3, .. } => cost_per_m3 * size,
        PricingRule::PerFlow { cost_per_m3_hr } => cost_per_m3_hr * size,
        PricingRule::PerPiece { cost } => cost,
    }
}
