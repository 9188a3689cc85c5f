//! By-value view of a session for presentation.

use ps_core::units::constants::{TANK_HEIGHT_M, TANK_LENGTH_M};
use ps_core::{TankStage, TreatmentTrain};
use ps_pricing::{CostTotals, EquipmentMap};
use ps_reference::{Industry, IndustryStandard, SuggestedChemical, suggested_chemicals};
use ps_sizing::{
    ChemicalDosing, DosingAgent, DosingSummary, ParameterCheck, PlantParameters, SludgeEstimate,
    plant_compliance, recommendations,
};
use serde::Serialize;

use crate::session::{ClientInfo, Session};

/// One row of the tank table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankRow {
    pub stage: TankStage,
    pub name: &'static str,
    pub volume_m3: f64,
    pub length_m: f64,
    pub breadth_m: f64,
    pub height_m: f64,
}

/// Everything a renderer needs, detached from the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub params: PlantParameters,
    pub industry_name: Option<&'static str>,
    pub train: TreatmentTrain,
    /// m³/hr
    pub flow_rate: f64,
    pub peak_flow: f64,
    pub standards: Option<IndustryStandard>,
    /// Influent values against the standard limits; empty without an industry.
    pub compliance: Vec<ParameterCheck>,
    pub suggested_chemicals: Vec<SuggestedChemical>,
    pub tanks: Vec<TankRow>,
    pub equipment: EquipmentMap,
    pub totals: CostTotals,
    pub dosing: Vec<ChemicalDosing>,
    pub dosing_summary: DosingSummary,
    pub sludge: Option<SludgeEstimate>,
    pub client: ClientInfo,
}

impl Snapshot {
    pub fn of(session: &Session) -> Self {
        let params = session.params().clone();
        let tanks = session
            .tanks()
            .iter()
            .map(|(stage, volume)| TankRow {
                stage,
                name: stage.display_name(),
                volume_m3: volume,
                length_m: TANK_LENGTH_M,
                breadth_m: ps_sizing::breadth_m(volume),
                height_m: TANK_HEIGHT_M,
            })
            .collect();

        Self {
            industry_name: params.industry.map(Industry::display_name),
            train: session.train(),
            flow_rate: params.flow_rate(),
            peak_flow: params.peak_flow(),
            standards: params.standards(),
            compliance: plant_compliance(&params),
            suggested_chemicals: params
                .industry
                .map(|i| suggested_chemicals(i).to_vec())
                .unwrap_or_default(),
            tanks,
            equipment: session.equipment().clone(),
            totals: session.totals(),
            dosing: session.dosing().to_vec(),
            dosing_summary: DosingSummary::of(session.dosing()),
            sludge: SludgeEstimate::for_plant(&params, session.dosing()),
            client: session.client().clone(),
            params,
        }
    }

    /// Dose recommendations at `pump_flow_l_per_hr`; empty without standards
    /// or pump flow.
    pub fn recommendations(&self, pump_flow_l_per_hr: f64) -> Vec<(DosingAgent, f64)> {
        match &self.standards {
            Some(standard) => recommendations(pump_flow_l_per_hr, &self.params, standard),
            None => Vec::new(),
        }
    }
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }
}
