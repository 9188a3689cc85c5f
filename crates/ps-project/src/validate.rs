//! Quote file validation logic.

use crate::schema::{ChemicalDosingDef, PlantDef, QuoteFile};
use ps_reference::Chemical;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Unknown chemical: {name}")]
    UnknownChemical { name: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_quote_file(file: &QuoteFile) -> Result<(), ValidationError> {
    if file.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    validate_plant(&file.plant)?;

    let mut equipment_ids = HashSet::new();
    for item in &file.equipment {
        if !equipment_ids.insert(item.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: item.id.clone(),
                context: "equipment".to_string(),
            });
        }
    }

    let mut chemicals = HashSet::new();
    for dosing in &file.chemicals {
        let chemical = validate_dosing(dosing)?;
        if !chemicals.insert(chemical) {
            return Err(ValidationError::DuplicateId {
                id: dosing.chemical.clone(),
                context: "chemicals".to_string(),
            });
        }
    }

    check_non_negative("terms gst_percent", file.terms.gst_percent)?;

    Ok(())
}

fn validate_plant(plant: &PlantDef) -> Result<(), ValidationError> {
    check_non_negative("plant capacity_m3_per_day", plant.capacity_m3_per_day)?;
    check_non_negative("plant bod_mg_l", plant.bod_mg_l)?;
    check_non_negative("plant cod_mg_l", plant.cod_mg_l)?;
    check_non_negative("plant tss_mg_l", plant.tss_mg_l)?;
    check_non_negative("plant ph", plant.ph)?;
    check_non_negative("plant oil_grease_mg_l", plant.oil_grease_mg_l)?;
    check_non_negative("plant nitrogen_mg_l", plant.nitrogen_mg_l)?;
    if let Some(peak) = plant.peak_flow_m3_per_hr {
        check_non_negative("plant peak_flow_m3_per_hr", peak)?;
    }
    Ok(())
}

fn validate_dosing(dosing: &ChemicalDosingDef) -> Result<Chemical, ValidationError> {
    let chemical =
        Chemical::from_name(&dosing.chemical).ok_or_else(|| ValidationError::UnknownChemical {
            name: dosing.chemical.clone(),
        })?;

    let context = |field: &str| format!("chemical '{}' {}", dosing.chemical, field);
    if let Some(ppm) = dosing.concentration_ppm {
        check_non_negative(&context("concentration_ppm"), ppm)?;
    }
    check_non_negative(&context("pump_flow_l_per_hr"), dosing.pump_flow_l_per_hr)?;
    check_non_negative(&context("operation_hours"), dosing.operation_hours)?;

    Ok(chemical)
}

fn check_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}
