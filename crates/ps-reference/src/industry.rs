//! Industry categories with published discharge standards.

use core::fmt;

/// Industry category of the plant's influent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Industry {
    Chemical,
    FoodAndBeverage,
    Pharmaceutical,
    Tannery,
    Textile,
    Paper,
    Steel,
    Automobile,
    SugarMill,
    Electroplating,
    Hotel,
    Dairy,
    PetrolOil,
    ThermalPowerPlant,
    Glass,
}

impl Industry {
    pub const ALL: [Industry; 15] = [
        Industry::Chemical,
        Industry::FoodAndBeverage,
        Industry::Pharmaceutical,
        Industry::Tannery,
        Industry::Textile,
        Industry::Paper,
        Industry::Steel,
        Industry::Automobile,
        Industry::SugarMill,
        Industry::Electroplating,
        Industry::Hotel,
        Industry::Dairy,
        Industry::PetrolOil,
        Industry::ThermalPowerPlant,
        Industry::Glass,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Industry::Chemical => "Chemical",
            Industry::FoodAndBeverage => "Food and Beverage",
            Industry::Pharmaceutical => "Pharmaceutical",
            Industry::Tannery => "Tannery Industry",
            Industry::Textile => "Textile Industry",
            Industry::Paper => "Paper Industry",
            Industry::Steel => "Steel Industry",
            Industry::Automobile => "Automobile Industry",
            Industry::SugarMill => "Sugar Mill",
            Industry::Electroplating => "Electroplating Industry",
            Industry::Hotel => "Hotel Industry",
            Industry::Dairy => "Dairy Industry",
            Industry::PetrolOil => "Petrol Oil Industry",
            Industry::ThermalPowerPlant => "Thermal Power Plant",
            Industry::Glass => "Glass Industry",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Industry::Chemical => &["chemicals"],
            Industry::FoodAndBeverage => &["food & beverage", "food", "beverage"],
            Industry::Pharmaceutical => &["pharma"],
            Industry::Tannery => &["tannery", "leather"],
            Industry::Textile => &["textile", "textiles"],
            Industry::Paper => &["paper", "pulp and paper"],
            Industry::Steel => &["steel"],
            Industry::Automobile => &["automobile", "automotive"],
            Industry::SugarMill => &["sugar"],
            Industry::Electroplating => &["electroplating", "plating"],
            Industry::Hotel => &["hotel", "hospitality"],
            Industry::Dairy => &["dairy"],
            Industry::PetrolOil => &["petrol oil", "petroleum", "oil"],
            Industry::ThermalPowerPlant => &["thermal power", "power plant"],
            Industry::Glass => &["glass"],
        }
    }

    /// Resolve a free-form industry name. Returns `None` for anything the
    /// reference tables do not know about.
    pub fn from_name(name: &str) -> Option<Industry> {
        let query = name.trim();
        if query.is_empty() {
            return None;
        }

        Industry::ALL.into_iter().find(|industry| {
            industry.display_name().eq_ignore_ascii_case(query)
                || industry
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(query))
        })
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
