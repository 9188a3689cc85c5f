//! Quote file loading, saving, and session construction.

use std::path::Path;

use ps_project::{QuoteFile, from_json_str, from_yaml_str, validate_quote_file};
use ps_reference::{Chemical, Industry, equipment_catalog, is_fixed_cost, suggested_chemicals};
use ps_sizing::{ChemicalDosing, PlantParameters};

use crate::error::{AppError, AppResult};
use crate::session::{Action, ClientInfo, Session};

/// Load, migrate and validate a quote file. `.json` files are read as JSON,
/// everything else as YAML.
pub fn load_quote_file(path: &Path) -> AppResult<QuoteFile> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ProjectFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file = match ps_project::extension(path).as_str() {
        "json" => from_json_str(&content)?,
        _ => from_yaml_str(&content)?,
    };

    tracing::info!(path = %path.display(), name = %file.name, "loaded quote file");
    Ok(file)
}

/// Validate and write a quote file as YAML.
pub fn save_quote_file(path: &Path, file: &QuoteFile) -> AppResult<()> {
    validate_quote_file(file).map_err(|e| AppError::Project(e.to_string()))?;
    let content = serde_yaml::to_string(file)?;

    std::fs::write(path, content).map_err(|e| AppError::ProjectFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Strict industry lookup for callers that need one.
pub fn resolve_industry(name: &str) -> AppResult<Industry> {
    Industry::from_name(name).ok_or_else(|| AppError::UnknownIndustry(name.to_string()))
}

/// Plant parameters from the file. Unknown industries resolve to none.
pub fn plant_parameters(file: &QuoteFile) -> PlantParameters {
    let plant = &file.plant;
    let industry = plant.industry.as_deref().and_then(|name| {
        let resolved = Industry::from_name(name);
        if resolved.is_none() {
            tracing::warn!(industry = name, "unknown industry, sizing without standards");
        }
        resolved
    });

    PlantParameters {
        plant_type: plant.plant_type,
        industry,
        capacity_m3_per_day: plant.capacity_m3_per_day,
        bod_mg_l: plant.bod_mg_l,
        cod_mg_l: plant.cod_mg_l,
        tss_mg_l: plant.tss_mg_l,
        ph: plant.ph,
        oil_grease_mg_l: plant.oil_grease_mg_l,
        nitrogen_mg_l: plant.nitrogen_mg_l,
        peak_flow: plant.peak_flow_m3_per_hr,
    }
}

/// Replay a quote file onto a fresh session.
pub fn session_from_file(file: &QuoteFile) -> Session {
    let params = plant_parameters(file);
    let industry = params.industry;

    let client = ClientInfo {
        name: file.client.name.clone().unwrap_or_default(),
        email: file.client.email.clone().unwrap_or_default(),
        phone: file.client.phone.clone().unwrap_or_default(),
        company: file.client.company.clone().unwrap_or_default(),
    };

    let mut session = Session::new()
        .apply(Action::SetClient(client))
        .apply(Action::SetTreatmentTrain(file.treatment))
        .apply(Action::SetPlantParameters(params));

    for item in &file.equipment {
        if !equipment_catalog().iter().any(|e| e.id == item.id) {
            tracing::warn!(id = %item.id, "unknown equipment id, override ignored");
            continue;
        }
        if is_fixed_cost(&item.id) {
            tracing::warn!(id = %item.id, "fixed-cost item is always quoted once");
            continue;
        }
        session = session.apply(Action::SetEquipmentQuantity {
            id: item.id.clone(),
            quantity: item.quantity,
        });
    }

    for def in &file.chemicals {
        let Some(chemical) = Chemical::from_name(&def.chemical) else {
            tracing::warn!(chemical = %def.chemical, "unknown chemical, dosing ignored");
            continue;
        };
        let concentration = def
            .concentration_ppm
            .unwrap_or_else(|| default_concentration(industry, chemical));
        session = session.apply(Action::SetChemicalDosing(ChemicalDosing::new(
            chemical,
            concentration,
            def.pump_flow_l_per_hr,
            def.operation_hours,
        )));
    }

    session
}

/// Suggested concentration for the industry, zero when it has none.
fn default_concentration(industry: Option<Industry>, chemical: Chemical) -> f64 {
    industry
        .map(suggested_chemicals)
        .and_then(|list| list.iter().find(|s| s.chemical == chemical))
        .map(|s| s.default_concentration_ppm)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::TreatmentTrain;
    use ps_project::{ChemicalDosingDef, EquipmentOverrideDef, PlantDef};

    fn file() -> QuoteFile {
        let mut plant = PlantDef::with_capacity(1000.0);
        plant.industry = Some("textile".into());
        plant.bod_mg_l = 300.0;
        plant.tss_mg_l = 400.0;
        QuoteFile::new("test", plant)
    }

    #[test]
    fn resolves_industry_leniently() {
        let params = plant_parameters(&file());
        assert_eq!(params.industry, Some(Industry::Textile));

        let mut f = file();
        f.plant.industry = Some("Shipbuilding".into());
        assert_eq!(plant_parameters(&f).industry, None);
        assert!(matches!(
            resolve_industry("Shipbuilding"),
            Err(AppError::UnknownIndustry(_))
        ));
    }

    #[test]
    fn overrides_apply_and_unknowns_are_skipped() {
        let mut f = file();
        f.treatment = TreatmentTrain::Chemical;
        f.equipment = vec![
            EquipmentOverrideDef { id: "uf_system".into(), quantity: 2 },
            EquipmentOverrideDef { id: "reverse_osmosis".into(), quantity: 5 },
            EquipmentOverrideDef { id: "panel".into(), quantity: 4 },
        ];
        let s = session_from_file(&f);
        assert_eq!(s.train(), TreatmentTrain::Chemical);
        assert_eq!(s.equipment().get("uf_system").unwrap().quantity, 2);
        assert_eq!(s.equipment().get("panel").unwrap().quantity, 1);
        assert!(s.equipment().get("reverse_osmosis").is_none());
    }

    #[test]
    fn missing_concentration_takes_industry_default() {
        let mut f = file();
        let suggested = suggested_chemicals(Industry::Textile)[0];
        f.chemicals = vec![ChemicalDosingDef {
            chemical: suggested.chemical.display_name().to_string(),
            concentration_ppm: None,
            pump_flow_l_per_hr: 10.0,
            operation_hours: 8.0,
        }];
        let s = session_from_file(&f);
        assert_eq!(s.dosing().len(), 1);
        assert_eq!(s.dosing()[0].concentration_ppm, suggested.default_concentration_ppm);
    }
}
