//! Discharge standards per industry.

use crate::Industry;
use serde::{Deserialize, Serialize};

/// Acceptable pH band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhRange {
    pub min: f64,
    pub max: f64,
}

impl PhRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, ph: f64) -> bool {
        ph >= self.min && ph <= self.max
    }
}

/// Standard limits for treated effluent (mg/L unless noted).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryStandard {
    pub bod_mg_l: f64,
    pub cod_mg_l: f64,
    pub tss_mg_l: f64,
    pub ph: PhRange,
    pub oil_grease_mg_l: f64,
    pub nitrogen_mg_l: f64,
}

const fn std_limits(
    bod: f64,
    cod: f64,
    tss: f64,
    ph: (f64, f64),
    oil_grease: f64,
    nitrogen: f64,
) -> IndustryStandard {
    IndustryStandard {
        bod_mg_l: bod,
        cod_mg_l: cod,
        tss_mg_l: tss,
        ph: PhRange::new(ph.0, ph.1),
        oil_grease_mg_l: oil_grease,
        nitrogen_mg_l: nitrogen,
    }
}

/// Standards for a known industry.
pub fn standards(industry: Industry) -> IndustryStandard {
    match industry {
        Industry::Chemical => std_limits(30.0, 250.0, 100.0, (5.0, 9.0), 50.0, 20.0),
        Industry::FoodAndBeverage => std_limits(30.0, 250.0, 150.0, (5.5, 9.0), 10.0, 25.0),
        Industry::Pharmaceutical => std_limits(30.0, 250.0, 100.0, (6.0, 8.5), 10.0, 100.0),
        Industry::Tannery => std_limits(20.0, 250.0, 50.0, (6.0, 9.0), 10.0, 30.0),
        Industry::Textile => std_limits(30.0, 250.0, 100.0, (6.0, 9.0), 10.0, 50.0),
        Industry::Paper => std_limits(30.0, 250.0, 100.0, (5.5, 9.0), 10.0, 18.0),
        Industry::Steel => std_limits(30.0, 250.0, 100.0, (6.0, 8.5), 10.0, 50.0),
        Industry::Automobile => std_limits(30.0, 250.0, 100.0, (6.0, 8.5), 10.0, 10.0),
        Industry::SugarMill => std_limits(30.0, 250.0, 100.0, (5.5, 8.5), 10.0, 20.0),
        Industry::Electroplating => std_limits(30.0, 250.0, 100.0, (6.0, 9.0), 10.0, 20.0),
        Industry::Hotel => std_limits(30.0, 250.0, 50.0, (5.5, 9.0), 10.0, 100.0),
        Industry::Dairy => std_limits(30.0, 250.0, 100.0, (6.5, 8.5), 10.0, 10.0),
        Industry::PetrolOil => std_limits(15.0, 125.0, 20.0, (6.0, 8.5), 5.0, 15.0),
        Industry::ThermalPowerPlant => std_limits(30.0, 250.0, 20.0, (6.0, 9.0), 5.0, 10.0),
        Industry::Glass => std_limits(15.0, 250.0, 100.0, (6.5, 8.5), 10.0, 15.0),
    }
}

/// Standards by free-form industry name; `None` when the industry is unknown.
pub fn lookup_standards(name: &str) -> Option<IndustryStandard> {
    Industry::from_name(name).map(standards)
}
