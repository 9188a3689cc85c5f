//! Chemical dosing: consumption and daily cost per chemical.

use ps_core::numeric::non_negative;
use ps_reference::Chemical;
use serde::{Deserialize, Serialize};

/// Upper bound on operation hours per day. Larger inputs are clamped.
pub const MAX_OPERATION_HOURS: f64 = 24.0;

/// Chemical use (kg/hr) = concentration (ppm) × pump flow (L/hr) / 1000.
pub fn chemical_use_kg_per_hr(concentration_ppm: f64, pump_flow_l_per_hr: f64) -> f64 {
    non_negative(concentration_ppm) * non_negative(pump_flow_l_per_hr) / 1000.0
}

/// Operation hours clamped to `[0, 24]`.
pub fn clamp_operation_hours(hours: f64) -> f64 {
    non_negative(hours).min(MAX_OPERATION_HOURS)
}

/// Daily quantity (kg/day) = chemical use × operation hours.
pub fn daily_quantity_kg(concentration_ppm: f64, pump_flow_l_per_hr: f64, hours: f64) -> f64 {
    chemical_use_kg_per_hr(concentration_ppm, pump_flow_l_per_hr) * clamp_operation_hours(hours)
}

/// One chemical's dosing inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalDosing {
    pub chemical: Chemical,
    /// ₹/kg
    pub unit_price: f64,
    pub concentration_ppm: f64,
    pub pump_flow_l_per_hr: f64,
    pub operation_hours: f64,
}

impl ChemicalDosing {
    /// Dosing at the chemical's catalog price.
    pub fn new(
        chemical: Chemical,
        concentration_ppm: f64,
        pump_flow_l_per_hr: f64,
        operation_hours: f64,
    ) -> Self {
        Self {
            chemical,
            unit_price: chemical.unit_price(),
            concentration_ppm,
            pump_flow_l_per_hr,
            operation_hours,
        }
        .sanitized()
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = non_negative(unit_price);
        self
    }

    /// Coerce inputs and clamp operation hours to `[0, 24]`.
    pub fn sanitized(&self) -> Self {
        Self {
            chemical: self.chemical,
            unit_price: non_negative(self.unit_price),
            concentration_ppm: non_negative(self.concentration_ppm),
            pump_flow_l_per_hr: non_negative(self.pump_flow_l_per_hr),
            operation_hours: clamp_operation_hours(self.operation_hours),
        }
    }

    /// kg/hr
    pub fn chemical_use(&self) -> f64 {
        chemical_use_kg_per_hr(self.concentration_ppm, self.pump_flow_l_per_hr)
    }

    /// kg/day
    pub fn daily_quantity(&self) -> f64 {
        daily_quantity_kg(
            self.concentration_ppm,
            self.pump_flow_l_per_hr,
            self.operation_hours,
        )
    }

    /// ₹/day
    pub fn daily_cost(&self) -> f64 {
        self.daily_quantity() * non_negative(self.unit_price)
    }

    /// All three inputs are set; incomplete entries stay out of daily totals.
    pub fn is_complete(&self) -> bool {
        self.concentration_ppm > 0.0 && self.pump_flow_l_per_hr > 0.0 && self.operation_hours > 0.0
    }
}

/// Daily totals across every dosed chemical.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DosingSummary {
    /// Sum of concentrations of every entry, complete or not (ppm).
    pub total_concentration_ppm: f64,
    pub total_daily_quantity_kg: f64,
    pub total_daily_cost: f64,
}

impl DosingSummary {
    pub fn of(dosing: &[ChemicalDosing]) -> Self {
        let total_concentration_ppm = dosing
            .iter()
            .map(|d| non_negative(d.concentration_ppm))
            .sum();

        let complete = dosing.iter().filter(|d| d.is_complete());
        let (qty, cost) = complete.fold((0.0, 0.0), |(q, c), d| {
            (q + d.daily_quantity(), c + d.daily_cost())
        });

        Self {
            total_concentration_ppm,
            total_daily_quantity_kg: qty,
            total_daily_cost: cost,
        }
    }
}
