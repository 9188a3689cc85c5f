//! Sludge generation estimate.

use crate::dosing::{ChemicalDosing, DosingSummary};
use crate::params::PlantParameters;
use ps_core::numeric::{coerce, non_negative};
use ps_reference::IndustryStandard;
use serde::Serialize;

/// Solids content of liquid sludge (%).
pub const LIQUID_SLUDGE_SOLIDS_PERCENT: f64 = 3.0;

/// Fraction of dosed chemical that ends up as sludge solids.
pub const CHEMICAL_SLUDGE_FACTOR: f64 = 0.3;

/// totalSludge (kg/day) = capacity × (TSS − TSSstd)/1000 + totalConc × 0.3/1000,
/// clamped at zero when the influent already beats the standard.
///
/// The plain formula goes negative for TSS below the standard. That result is
/// deliberately not reproduced: a plant cannot generate negative sludge.
pub fn total_sludge_kg_per_day(
    capacity_m3_per_day: f64,
    current_tss_mg_l: f64,
    standard_tss_mg_l: f64,
    total_chemical_concentration_ppm: f64,
) -> f64 {
    let tss_component = (coerce(current_tss_mg_l) - coerce(standard_tss_mg_l)) / 1000.0;
    let chemical_component =
        non_negative(total_chemical_concentration_ppm) * CHEMICAL_SLUDGE_FACTOR / 1000.0;
    (non_negative(capacity_m3_per_day) * tss_component + chemical_component).max(0.0)
}

/// Liquid sludge (L/day) = total sludge × 100 / 3.
pub fn liquid_sludge_l_per_day(total_sludge_kg_per_day: f64) -> f64 {
    non_negative(total_sludge_kg_per_day) * 100.0 / LIQUID_SLUDGE_SOLIDS_PERCENT
}

/// Derived sludge figures, never stored on their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SludgeEstimate {
    pub standard_tss_mg_l: f64,
    pub total_chemical_concentration_ppm: f64,
    pub total_sludge_kg_per_day: f64,
    pub liquid_sludge_l_per_day: f64,
}

impl SludgeEstimate {
    pub fn estimate(
        params: &PlantParameters,
        standard: &IndustryStandard,
        dosing: &[ChemicalDosing],
    ) -> Self {
        let total_conc = DosingSummary::of(dosing).total_concentration_ppm;
        let total = total_sludge_kg_per_day(
            params.capacity_m3_per_day,
            params.tss_mg_l,
            standard.tss_mg_l,
            total_conc,
        );
        Self {
            standard_tss_mg_l: standard.tss_mg_l,
            total_chemical_concentration_ppm: total_conc,
            total_sludge_kg_per_day: total,
            liquid_sludge_l_per_day: liquid_sludge_l_per_day(total),
        }
    }

    /// `None` when the plant has no industry standards to compare against.
    pub fn for_plant(params: &PlantParameters, dosing: &[ChemicalDosing]) -> Option<Self> {
        params
            .standards()
            .map(|standard| Self::estimate(params, &standard, dosing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::{Tolerances, nearly_equal};
    use ps_reference::{Chemical, Industry};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn sludge_formula() {
        // 1000 × (400 − 100)/1000 + 800 × 0.3/1000 = 300 + 0.24
        let total = total_sludge_kg_per_day(1000.0, 400.0, 100.0, 800.0);
        assert!(close(total, 300.24));
        assert!(close(liquid_sludge_l_per_day(total), 300.24 * 100.0 / 3.0));
    }

    #[test]
    fn clean_influent_produces_no_negative_sludge() {
        assert_eq!(total_sludge_kg_per_day(1000.0, 50.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn estimate_uses_industry_standard() {
        let params = PlantParameters {
            capacity_m3_per_day: 1000.0,
            tss_mg_l: 400.0,
            industry: Some(Industry::Chemical),
            ..Default::default()
        };
        let dosing = vec![ChemicalDosing::new(Chemical::PolyAluminumChloride, 800.0, 10.0, 8.0)];
        let est = SludgeEstimate::for_plant(&params, &dosing).unwrap();
        assert_eq!(est.standard_tss_mg_l, 100.0);
        assert!(close(est.total_chemical_concentration_ppm, 800.0));
        assert!(close(est.total_sludge_kg_per_day, 300.24));
    }

    #[test]
    fn no_industry_no_estimate() {
        let params = PlantParameters::default();
        assert!(SludgeEstimate::for_plant(&params, &[]).is_none());
    }
}
