//! Equipment catalog and fixed-cost items.
//!
//! Catalog entries carry a pricing rule instead of a fixed price: the price
//! of a clarifier follows its diameter, a filter follows plant flow, media
//! follows the volume of the tank it fills. The pricing engine turns the rule
//! plus the current plant into a base price.

use ps_core::TankStage;
use serde::Serialize;

/// How an entry's base price scales with the plant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PricingRule {
    /// ₹ per m³/day of plant capacity.
    PerCapacity { cost_per_m3_day: f64 },
    /// ₹ per metre of clarifier diameter.
    PerDiameter { cost_per_m: f64 },
    /// ₹ per m³ of the named tank.
    PerVolume { stage: TankStage, cost_per_m3: f64 },
    /// Flat ₹ per unit.
    PerPiece { cost: f64 },
    /// ₹ per m³/hr of design flow.
    PerFlow { cost_per_m3_hr: f64 },
}

impl PricingRule {
    pub fn label(&self) -> &'static str {
        match self {
            PricingRule::PerCapacity { .. } => "per-capacity",
            PricingRule::PerDiameter { .. } => "per-diameter",
            PricingRule::PerVolume { .. } => "per-volume",
            PricingRule::PerPiece { .. } => "per-piece",
            PricingRule::PerFlow { .. } => "per-flow",
        }
    }

    /// True when the size input is derived from the plant.
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, PricingRule::PerPiece { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub rule: PricingRule,
    pub default_quantity: u32,
}

impl CatalogEntry {
    const fn new(id: &'static str, name: &'static str, rule: PricingRule) -> Self {
        Self {
            id,
            name,
            rule,
            default_quantity: 1,
        }
    }

    const fn with_quantity(mut self, quantity: u32) -> Self {
        self.default_quantity = quantity;
        self
    }

    pub fn is_fixed_cost(&self) -> bool {
        is_fixed_cost(self.id)
    }
}

/// A lump-sum item that always appears once on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FixedCost {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
}

pub const FIXED_COST_IDS: [&str; 5] = ["commissioning", "installation", "panel", "cable", "piping"];

const FIXED_COSTS: [FixedCost; 5] = [
    FixedCost {
        id: "commissioning",
        name: "Commissioning and Handover",
        price: 70_000.0,
    },
    FixedCost {
        id: "installation",
        name: "Installation",
        price: 40_000.0,
    },
    FixedCost {
        id: "panel",
        name: "Panel",
        price: 70_000.0,
    },
    FixedCost {
        id: "cable",
        name: "Cable and Cable Tray",
        price: 35_000.0,
    },
    FixedCost {
        id: "piping",
        name: "Piping and Fitting",
        price: 80_000.0,
    },
];

pub fn fixed_costs() -> &'static [FixedCost] {
    &FIXED_COSTS
}

pub fn fixed_costs_total() -> f64 {
    FIXED_COSTS.iter().map(|c| c.price).sum()
}

pub fn is_fixed_cost(id: &str) -> bool {
    FIXED_COST_IDS.contains(&id)
}

const fn fixed(cost: FixedCost) -> CatalogEntry {
    CatalogEntry::new(cost.id, cost.name, PricingRule::PerPiece { cost: cost.price })
}

const CATALOG: [CatalogEntry; 19] = [
    CatalogEntry::new("bar_screen", "Bar Screen", PricingRule::PerPiece { cost: 25_000.0 }),
    CatalogEntry::new(
        "raw_effluent_pump",
        "Raw Effluent Transfer Pump",
        PricingRule::PerFlow {
            cost_per_m3_hr: 1_800.0,
        },
    ),
    CatalogEntry::new(
        "oil_skimmer",
        "Oil & Grease Skimmer",
        PricingRule::PerVolume {
            stage: TankStage::OilGreaseTank,
            cost_per_m3: 4_500.0,
        },
    ),
    CatalogEntry::new(
        "air_blower",
        "Air Blower",
        PricingRule::PerCapacity {
            cost_per_m3_day: 150.0,
        },
    ),
    CatalogEntry::new(
        "diffuser_grid",
        "Coarse Bubble Diffuser Grid",
        PricingRule::PerVolume {
            stage: TankStage::EqualizationTank,
            cost_per_m3: 900.0,
        },
    ),
    CatalogEntry::new("dosing_pump", "Dosing Pump", PricingRule::PerPiece { cost: 18_000.0 })
        .with_quantity(3),
    CatalogEntry::new("agitator", "Flash Mixer / Agitator", PricingRule::PerPiece { cost: 35_000.0 })
        .with_quantity(2),
    CatalogEntry::new(
        "tube_settler_media",
        "Tube Settler Media",
        PricingRule::PerVolume {
            stage: TankStage::TubeSettle1,
            cost_per_m3: 6_500.0,
        },
    ),
    CatalogEntry::new(
        "clarifier_mechanism",
        "Clarifier Mechanism",
        PricingRule::PerDiameter { cost_per_m: 55_000.0 },
    ),
    CatalogEntry::new(
        "mbbr_media",
        "MBBR Media",
        PricingRule::PerVolume {
            stage: TankStage::MbbrTank,
            cost_per_m3: 8_000.0,
        },
    ),
    CatalogEntry::new(
        "pressure_sand_filter",
        "Pressure Sand Filter",
        PricingRule::PerFlow {
            cost_per_m3_hr: 6_000.0,
        },
    ),
    CatalogEntry::new(
        "activated_carbon_filter",
        "Activated Carbon Filter",
        PricingRule::PerFlow {
            cost_per_m3_hr: 7_500.0,
        },
    ),
    CatalogEntry::new(
        "uf_system",
        "Ultrafiltration System",
        PricingRule::PerFlow {
            cost_per_m3_hr: 25_000.0,
        },
    ),
    CatalogEntry::new(
        "filter_press",
        "Filter Press",
        PricingRule::PerVolume {
            stage: TankStage::SludgeHoldingTank,
            cost_per_m3: 15_000.0,
        },
    ),
    fixed(FIXED_COSTS[0]),
    fixed(FIXED_COSTS[1]),
    fixed(FIXED_COSTS[2]),
    fixed(FIXED_COSTS[3]),
    fixed(FIXED_COSTS[4]),
];

/// The built-in equipment catalog, in quote order.
pub fn equipment_catalog() -> &'static [CatalogEntry] {
    &CATALOG
}
