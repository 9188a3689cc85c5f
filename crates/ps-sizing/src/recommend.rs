//! One-sided dose suggestions for correcting an influent outside its discharge limits.
//!
//! A suggestion is only made when the influent is worse than the industry
//! standard; otherwise the dose is zero. Doses scale with the dosing-pump flow.

use core::fmt;

use crate::params::PlantParameters;
use ps_core::numeric::non_negative;
use ps_reference::IndustryStandard;
use serde::Serialize;

/// Agents the recommendation helper knows how to dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DosingAgent {
    /// Raises pH.
    Lime,
    /// Targets COD.
    FerrousSulfate,
    /// Poly aluminium chloride, targets TSS.
    Pac,
    /// Flocculant aid, targets TSS.
    Polyacrylamide,
}

impl DosingAgent {
    pub const ALL: [DosingAgent; 4] = [
        DosingAgent::Lime,
        DosingAgent::FerrousSulfate,
        DosingAgent::Pac,
        DosingAgent::Polyacrylamide,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            DosingAgent::Lime => "Lime",
            DosingAgent::FerrousSulfate => "Ferrous Sulfate",
            DosingAgent::Pac => "PAC",
            DosingAgent::Polyacrylamide => "Polyacrylamide",
        }
    }
}

impl fmt::Display for DosingAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

const LIME_PER_PH_UNIT: f64 = 0.1;
const FERROUS_PER_COD: f64 = 0.002;
const PAC_PER_TSS: f64 = 0.001;
const POLYACRYLAMIDE_PER_TSS: f64 = 0.0005;

/// Suggested dose of `agent`, zero when the influent already meets the standard.
pub fn recommended_dose(
    agent: DosingAgent,
    pump_flow_l_per_hr: f64,
    params: &PlantParameters,
    standard: &IndustryStandard,
) -> f64 {
    let flow = non_negative(pump_flow_l_per_hr);
    let excess = match agent {
        DosingAgent::Lime => (standard.ph.min - non_negative(params.ph)) * LIME_PER_PH_UNIT,
        DosingAgent::FerrousSulfate => {
            (non_negative(params.cod_mg_l) - standard.cod_mg_l) * FERROUS_PER_COD
        }
        DosingAgent::Pac => (non_negative(params.tss_mg_l) - standard.tss_mg_l) * PAC_PER_TSS,
        DosingAgent::Polyacrylamide => {
            (non_negative(params.tss_mg_l) - standard.tss_mg_l) * POLYACRYLAMIDE_PER_TSS
        }
    };
    if excess > 0.0 { flow * excess } else { 0.0 }
}

/// Doses for every agent. Empty without a pump flow.
pub fn recommendations(
    pump_flow_l_per_hr: f64,
    params: &PlantParameters,
    standard: &IndustryStandard,
) -> Vec<(DosingAgent, f64)> {
    if non_negative(pump_flow_l_per_hr) == 0.0 {
        return Vec::new();
    }
    DosingAgent::ALL
        .into_iter()
        .map(|agent| (agent, recommended_dose(agent, pump_flow_l_per_hr, params, standard)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::{Tolerances, nearly_equal};
    use ps_reference::{Industry, standards};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    fn dirty() -> PlantParameters {
        PlantParameters {
            ph: 4.0,
            cod_mg_l: 750.0,
            tss_mg_l: 400.0,
            ..Default::default()
        }
    }

    #[test]
    fn doses_scale_with_excess() {
        let std = standards(Industry::Textile); // pH 6–9, COD 250, TSS 100
        let p = dirty();
        assert!(close(recommended_dose(DosingAgent::Lime, 10.0, &p, &std), 2.0));
        assert!(close(recommended_dose(DosingAgent::FerrousSulfate, 10.0, &p, &std), 10.0));
        assert!(close(recommended_dose(DosingAgent::Pac, 10.0, &p, &std), 3.0));
        assert!(close(recommended_dose(DosingAgent::Polyacrylamide, 10.0, &p, &std), 1.5));
    }

    #[test]
    fn compliant_influent_gets_nothing() {
        let std = standards(Industry::Textile);
        let p = PlantParameters {
            ph: 7.0,
            cod_mg_l: 100.0,
            tss_mg_l: 50.0,
            ..Default::default()
        };
        for (_, dose) in recommendations(10.0, &p, &std) {
            assert_eq!(dose, 0.0);
        }
    }

    #[test]
    fn no_pump_flow_no_recommendations() {
        let std = standards(Industry::Dairy);
        assert!(recommendations(0.0, &dirty(), &std).is_empty());
    }
}
