//! Coagulant and flocculant chemicals with market prices.

use core::fmt;
use core::str::FromStr;

use crate::Industry;
use ps_core::PsError;
use serde::{Deserialize, Serialize};

/// Treatment chemicals that appear in the suggestion tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Chemical {
    PolyAluminumChloride,
    FerricChloride,
    Alum,
    AluminumSulfate,
    FerricSulfate,
    FerrousSulfate,
    SodiumAluminate,
    PolyDadmac,
    Polyacrylamide,
    AnionicPolyacrylamide,
    CationicPolyacrylamide,
    NonIonicPolyacrylamide,
    Polyamines,
}

impl Chemical {
    pub const ALL: [Chemical; 13] = [
        Chemical::PolyAluminumChloride,
        Chemical::FerricChloride,
        Chemical::Alum,
        Chemical::AluminumSulfate,
        Chemical::FerricSulfate,
        Chemical::FerrousSulfate,
        Chemical::SodiumAluminate,
        Chemical::PolyDadmac,
        Chemical::Polyacrylamide,
        Chemical::AnionicPolyacrylamide,
        Chemical::CationicPolyacrylamide,
        Chemical::NonIonicPolyacrylamide,
        Chemical::Polyamines,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Chemical::PolyAluminumChloride => "Poly Aluminum Chloride",
            Chemical::FerricChloride => "Ferric Chloride",
            Chemical::Alum => "Alum",
            Chemical::AluminumSulfate => "Aluminum Sulfate",
            Chemical::FerricSulfate => "Ferric Sulfate",
            Chemical::FerrousSulfate => "Ferrous Sulfate",
            Chemical::SodiumAluminate => "Sodium Aluminate",
            Chemical::PolyDadmac => "PolyDADMAC",
            Chemical::Polyacrylamide => "Polyacrylamide",
            Chemical::AnionicPolyacrylamide => "Anionic Polyacrylamide",
            Chemical::CationicPolyacrylamide => "Cationic Polyacrylamide",
            Chemical::NonIonicPolyacrylamide => "Non-Ionic Polyacrylamide",
            Chemical::Polyamines => "Polyamines",
        }
    }

    /// Average market price (₹/kg).
    pub fn unit_price(self) -> f64 {
        match self {
            Chemical::PolyAluminumChloride => 65.0,
            Chemical::FerricChloride => 55.0,
            Chemical::Alum | Chemical::AluminumSulfate => 22.5,
            Chemical::FerricSulfate | Chemical::FerrousSulfate => 45.0,
            Chemical::SodiumAluminate => 75.0,
            Chemical::PolyDadmac => 200.0,
            Chemical::Polyacrylamide | Chemical::AnionicPolyacrylamide => 375.0,
            Chemical::CationicPolyacrylamide => 525.0,
            Chemical::NonIonicPolyacrylamide => 450.0,
            Chemical::Polyamines => 350.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Chemical> {
        let query = name.trim();
        Chemical::ALL.into_iter().find(|chemical| {
            chemical.display_name().eq_ignore_ascii_case(query)
                || (*chemical == Chemical::PolyAluminumChloride
                    && query.eq_ignore_ascii_case("PAC"))
        })
    }
}

impl fmt::Display for Chemical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Chemical {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chemical::from_name(s).ok_or_else(|| PsError::UnknownKey {
            kind: "chemical",
            key: s.to_string(),
        })
    }
}

/// A chemical suggested for an industry, with its default dose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestedChemical {
    pub chemical: Chemical,
    pub default_concentration_ppm: f64,
}

impl SuggestedChemical {
    const fn new(chemical: Chemical, default_concentration_ppm: f64) -> Self {
        Self {
            chemical,
            default_concentration_ppm,
        }
    }

    pub fn unit_price(&self) -> f64 {
        self.chemical.unit_price()
    }
}

use Chemical::*;

const CHEMICAL_IND: [SuggestedChemical; 5] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(Alum, 500.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
    SuggestedChemical::new(Polyacrylamide, 200.0),
];
const FOOD_AND_BEVERAGE: [SuggestedChemical; 4] = [
    SuggestedChemical::new(AluminumSulfate, 700.0),
    SuggestedChemical::new(FerricSulfate, 500.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const PHARMACEUTICAL: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
    SuggestedChemical::new(NonIonicPolyacrylamide, 200.0),
];
const TANNERY: [SuggestedChemical; 4] = [
    SuggestedChemical::new(FerricSulfate, 600.0),
    SuggestedChemical::new(AluminumSulfate, 500.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const TEXTILE: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerrousSulfate, 500.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];
const PAPER: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const STEEL: [SuggestedChemical; 4] = [
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];
const AUTOMOBILE: [SuggestedChemical; 4] = [
    SuggestedChemical::new(AluminumSulfate, 500.0),
    SuggestedChemical::new(FerricSulfate, 600.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const SUGAR_MILL: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];
const ELECTROPLATING: [SuggestedChemical; 4] = [
    SuggestedChemical::new(FerricSulfate, 600.0),
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const HOTEL: [SuggestedChemical; 4] = [
    SuggestedChemical::new(AluminumSulfate, 500.0),
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];
const DAIRY: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(SodiumAluminate, 400.0),
    SuggestedChemical::new(NonIonicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const PETROL_OIL: [SuggestedChemical; 4] = [
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];
const THERMAL_POWER: [SuggestedChemical; 4] = [
    SuggestedChemical::new(PolyAluminumChloride, 800.0),
    SuggestedChemical::new(FerricSulfate, 600.0),
    SuggestedChemical::new(CationicPolyacrylamide, 200.0),
    SuggestedChemical::new(Polyamines, 300.0),
];
const GLASS: [SuggestedChemical; 4] = [
    SuggestedChemical::new(FerricChloride, 600.0),
    SuggestedChemical::new(AluminumSulfate, 500.0),
    SuggestedChemical::new(AnionicPolyacrylamide, 200.0),
    SuggestedChemical::new(PolyDadmac, 300.0),
];

/// Suggested chemicals for a known industry, in recommendation order.
pub fn suggested_chemicals(industry: Industry) -> &'static [SuggestedChemical] {
    match industry {
        Industry::Chemical => &CHEMICAL_IND,
        Industry::FoodAndBeverage => &FOOD_AND_BEVERAGE,
        Industry::Pharmaceutical => &PHARMACEUTICAL,
        Industry::Tannery => &TANNERY,
        Industry::Textile => &TEXTILE,
        Industry::Paper => &PAPER,
        Industry::Steel => &STEEL,
        Industry::Automobile => &AUTOMOBILE,
        Industry::SugarMill => &SUGAR_MILL,
        Industry::Electroplating => &ELECTROPLATING,
        Industry::Hotel => &HOTEL,
        Industry::Dairy => &DAIRY,
        Industry::PetrolOil => &PETROL_OIL,
        Industry::ThermalPowerPlant => &THERMAL_POWER,
        Industry::Glass => &GLASS,
    }
}

/// Suggested chemicals by free-form industry name; `None` when unknown.
pub fn lookup_suggested_chemicals(name: &str) -> Option<&'static [SuggestedChemical]> {
    Industry::from_name(name).map(suggested_chemicals)
}
