//! Influent parameters of the plant being sized.

use ps_core::numeric::non_negative;
use ps_core::units::constants::OPERATING_HOURS_PER_DAY;
use ps_core::PlantType;
use ps_reference::{Industry, IndustryStandard, standards};
use serde::{Deserialize, Serialize};

/// Multiplier applied to flow rate when no peak flow is given.
pub const DEFAULT_PEAK_FACTOR: f64 = 1.5;

/// Plant parameters as entered by the user.
///
/// Replaced wholesale on every edit; derived state is recomputed from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlantParameters {
    pub plant_type: PlantType,
    /// Resolved industry, `None` when not chosen or not in the tables.
    pub industry: Option<Industry>,
    /// Plant capacity (m³/day)
    pub capacity_m3_per_day: f64,
    pub bod_mg_l: f64,
    pub cod_mg_l: f64,
    pub tss_mg_l: f64,
    pub ph: f64,
    pub oil_grease_mg_l: f64,
    pub nitrogen_mg_l: f64,
    /// Peak flow on the same basis as [`PlantParameters::flow_rate`].
    /// Absent or zero means "use the default peak factor".
    #[serde(default)]
    pub peak_flow: Option<f64>,
}

impl PlantParameters {
    /// Coerce every numeric field to a finite, non-negative value.
    pub fn sanitized(&self) -> Self {
        Self {
            plant_type: self.plant_type,
            industry: self.industry,
            capacity_m3_per_day: non_negative(self.capacity_m3_per_day),
            bod_mg_l: non_negative(self.bod_mg_l),
            cod_mg_l: non_negative(self.cod_mg_l),
            tss_mg_l: non_negative(self.tss_mg_l),
            ph: non_negative(self.ph),
            oil_grease_mg_l: non_negative(self.oil_grease_mg_l),
            nitrogen_mg_l: non_negative(self.nitrogen_mg_l),
            peak_flow: self.peak_flow.map(non_negative).filter(|p| *p > 0.0),
        }
    }

    /// Derived throughput used as the base unit of most stage formulas.
    pub fn flow_rate(&self) -> f64 {
        flow_rate(self.capacity_m3_per_day)
    }

    /// User peak flow, or [`DEFAULT_PEAK_FACTOR`] × flow rate.
    pub fn peak_flow(&self) -> f64 {
        match self.peak_flow.map(non_negative) {
            Some(p) if p > 0.0 => p,
            _ => self.flow_rate() * DEFAULT_PEAK_FACTOR,
        }
    }

    pub fn standards(&self) -> Option<IndustryStandard> {
        self.industry.map(standards)
    }

    /// True once the plant has a capacity to size against.
    pub fn is_sized(&self) -> bool {
        non_negative(self.capacity_m3_per_day) > 0.0
    }
}

/// capacity / 20
pub fn flow_rate(capacity_m3_per_day: f64) -> f64 {
    non_negative(capacity_m3_per_day) / OPERATING_HOURS_PER_DAY
}
