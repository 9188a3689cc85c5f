//! Plant type, treatment train and tank stage identities.

use core::fmt;
use core::str::FromStr;

use crate::PsError;

/// Effluent or sewage treatment plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlantType {
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "etp"))]
    ETP,
    #[cfg_attr(feature = "serde", serde(alias = "stp"))]
    STP,
}

impl PlantType {
    pub fn description(self) -> &'static str {
        match self {
            PlantType::ETP => "Effluent Treatment Plant",
            PlantType::STP => "Sewage Treatment Plant",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlantType::ETP => f.write_str("ETP"),
            PlantType::STP => f.write_str("STP"),
        }
    }
}

/// Which formula set and tank schedule is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreatmentTrain {
    /// Biological with chemical treatment.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "biological"))]
    Biological,
    #[cfg_attr(feature = "serde", serde(alias = "chemical"))]
    Chemical,
}

impl TreatmentTrain {
    pub const ALL: [TreatmentTrain; 2] = [TreatmentTrain::Biological, TreatmentTrain::Chemical];

    /// Ordered tank schedule for this train.
    pub fn stages(self) -> &'static [TankStage] {
        match self {
            TreatmentTrain::Biological => &BIOLOGICAL_STAGES,
            TreatmentTrain::Chemical => &CHEMICAL_STAGES,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TreatmentTrain::Biological => "Biological with Chemical Treatment",
            TreatmentTrain::Chemical => "Chemical Treatment",
        }
    }
}

impl fmt::Display for TreatmentTrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreatmentTrain::Biological => f.write_str("Biological"),
            TreatmentTrain::Chemical => f.write_str("Chemical"),
        }
    }
}

impl FromStr for TreatmentTrain {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "biological" | "bio" => Ok(TreatmentTrain::Biological),
            "chemical" | "chem" => Ok(TreatmentTrain::Chemical),
            _ => Err(PsError::UnknownKey {
                kind: "treatment train",
                key: s.to_string(),
            }),
        }
    }
}

/// A treatment stage that gets its own tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TankStage {
    BarScreen,
    OilGreaseTank,
    EqualizationTank,
    PhNeutralizationTank,
    CoagulantsTank,
    FlocculantTank,
    TubeSettle1,
    AnoxicTank,
    MbbrTank,
    TubeSettle2,
    FilterFeedTank,
    TreatedWaterTank,
    UfWaterTank,
    SludgeHoldingTank,
}

const BIOLOGICAL_STAGES: [TankStage; 14] = [
    TankStage::BarScreen,
    TankStage::OilGreaseTank,
    TankStage::EqualizationTank,
    TankStage::PhNeutralizationTank,
    TankStage::CoagulantsTank,
    TankStage::FlocculantTank,
    TankStage::TubeSettle1,
    TankStage::AnoxicTank,
    TankStage::MbbrTank,
    TankStage::TubeSettle2,
    TankStage::FilterFeedTank,
    TankStage::TreatedWaterTank,
    TankStage::UfWaterTank,
    TankStage::SludgeHoldingTank,
];

const CHEMICAL_STAGES: [TankStage; 11] = [
    TankStage::BarScreen,
    TankStage::OilGreaseTank,
    TankStage::EqualizationTank,
    TankStage::PhNeutralizationTank,
    TankStage::CoagulantsTank,
    TankStage::FlocculantTank,
    TankStage::TubeSettle1,
    TankStage::FilterFeedTank,
    TankStage::TreatedWaterTank,
    TankStage::UfWaterTank,
    TankStage::SludgeHoldingTank,
];

impl TankStage {
    pub fn key(self) -> &'static str {
        match self {
            TankStage::BarScreen => "BarScreen",
            TankStage::OilGreaseTank => "OilGreaseTank",
            TankStage::EqualizationTank => "EqualizationTank",
            TankStage::PhNeutralizationTank => "PHNeutralizationTank",
            TankStage::CoagulantsTank => "CoagulantsTank",
            TankStage::FlocculantTank => "FlocculantTank",
            TankStage::TubeSettle1 => "TubeSettle1",
            TankStage::AnoxicTank => "AnoxicTank",
            TankStage::MbbrTank => "MBBRTank",
            TankStage::TubeSettle2 => "TubeSettle2",
            TankStage::FilterFeedTank => "FilterFeedTank",
            TankStage::TreatedWaterTank => "TreatedWaterTank",
            TankStage::UfWaterTank => "UFWaterTank",
            TankStage::SludgeHoldingTank => "SludgeHoldingTank",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TankStage::BarScreen => "Bar Screen",
            TankStage::OilGreaseTank => "Oil Grease Tank",
            TankStage::EqualizationTank => "Equalization Tank",
            TankStage::PhNeutralizationTank => "PH Neutralization Tank",
            TankStage::CoagulantsTank => "Coagulants Tank",
            TankStage::FlocculantTank => "Flocculant Tank",
            TankStage::TubeSettle1 => "Tube Settle 1",
            TankStage::AnoxicTank => "Anoxic Tank",
            TankStage::MbbrTank => "MBBR Tank",
            TankStage::TubeSettle2 => "Tube Settle 2",
            TankStage::FilterFeedTank => "Filter Feed Tank",
            TankStage::TreatedWaterTank => "Treated Water Tank",
            TankStage::UfWaterTank => "UF Water Tank",
            TankStage::SludgeHoldingTank => "Sludge Holding Tank",
        }
    }

    /// True for stages that only exist in the biological train.
    pub fn is_biological_only(self) -> bool {
        matches!(
            self,
            TankStage::AnoxicTank | TankStage::MbbrTank | TankStage::TubeSettle2
        )
    }
}

impl fmt::Display for TankStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for TankStage {
    type Err = PsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BIOLOGICAL_STAGES
            .iter()
            .copied()
            .find(|stage| stage.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PsError::UnknownKey {
                kind: "tank stage",
                key: s.to_string(),
            })
    }
}
