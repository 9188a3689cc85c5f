//! Quote file schema definitions.

use ps_core::{PlantType, TreatmentTrain};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub client: ClientDef,
    pub plant: PlantDef,
    #[serde(default)]
    pub treatment: TreatmentTrain,
    #[serde(default)]
    pub equipment: Vec<EquipmentOverrideDef>,
    #[serde(default)]
    pub chemicals: Vec<ChemicalDosingDef>,
    #[serde(default)]
    pub terms: TermsDef,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ClientDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantDef {
    #[serde(default)]
    pub plant_type: PlantType,
    /// Industry name as typed; resolved leniently when the session is built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub capacity_m3_per_day: f64,
    #[serde(default)]
    pub bod_mg_l: f64,
    #[serde(default)]
    pub cod_mg_l: f64,
    #[serde(default)]
    pub tss_mg_l: f64,
    #[serde(default)]
    pub ph: f64,
    #[serde(default)]
    pub oil_grease_mg_l: f64,
    #[serde(default)]
    pub nitrogen_mg_l: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_flow_m3_per_hr: Option<f64>,
}

/// Quantity override for one catalog id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EquipmentOverrideDef {
    pub id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChemicalDosingDef {
    pub chemical: String,
    /// Falls back to the industry's suggested concentration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concentration_ppm: Option<f64>,
    pub pump_flow_l_per_hr: f64,
    pub operation_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermsDef {
    #[serde(default = "default_gst_percent")]
    pub gst_percent: f64,
}

pub const DEFAULT_GST_PERCENT: f64 = 18.0;

fn default_gst_percent() -> f64 {
    DEFAULT_GST_PERCENT
}

impl Default for TermsDef {
    fn default() -> Self {
        Self {
            gst_percent: DEFAULT_GST_PERCENT,
        }
    }
}

impl QuoteFile {
    /// Minimal file at the latest version for the given plant.
    pub fn new(name: impl Into<String>, plant: PlantDef) -> Self {
        Self {
            version: crate::migrate::LATEST_VERSION,
            name: name.into(),
            client: ClientDef::default(),
            plant,
            treatment: TreatmentTrain::default(),
            equipment: Vec::new(),
            chemicals: Vec::new(),
            terms: TermsDef::default(),
        }
    }
}

impl PlantDef {
    pub fn with_capacity(capacity_m3_per_day: f64) -> Self {
        Self {
            plant_type: PlantType::default(),
            industry: None,
            capacity_m3_per_day,
            bod_mg_l: 0.0,
            cod_mg_l: 0.0,
            tss_mg_l: 0.0,
            ph: 0.0,
            oil_grease_mg_l: 0.0,
            nitrogen_mg_l: 0.0,
            peak_flow_m3_per_hr: None,
        }
    }
}
