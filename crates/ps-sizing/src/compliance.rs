//! Influent parameters against the industry's discharge standards.

use core::fmt;

use crate::params::PlantParameters;
use ps_core::numeric::coerce;
use ps_reference::{IndustryStandard, PhRange};
use serde::Serialize;

/// Standard limit for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Limit {
    /// Value must not exceed the bound.
    AtMost { max: f64 },
    /// Value must fall inside the band (pH).
    Within { range: PhRange },
}

impl Limit {
    pub fn admits(&self, value: f64) -> bool {
        match self {
            Limit::AtMost { max } => value <= *max,
            Limit::Within { range } => range.contains(value),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::AtMost { max } => write!(f, "≤ {}", max),
            Limit::Within { range } => write!(f, "{} - {}", range.min, range.max),
        }
    }
}

/// Current value of one influent parameter next to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterCheck {
    pub name: &'static str,
    /// Empty for pH.
    pub unit: &'static str,
    pub current: f64,
    pub limit: Limit,
    pub compliant: bool,
}

impl ParameterCheck {
    fn new(name: &'static str, unit: &'static str, current: f64, limit: Limit) -> Self {
        let current = coerce(current);
        Self {
            name,
            unit,
            current,
            limit,
            compliant: limit.admits(current),
        }
    }
}

/// BOD, COD, TSS, pH, oil & grease and nitrogen, in that order.
pub fn compliance(params: &PlantParameters, standard: &IndustryStandard) -> Vec<ParameterCheck> {
    let at_most = |max| Limit::AtMost { max };
    vec![
        ParameterCheck::new("BOD", "mg/L", params.bod_mg_l, at_most(standard.bod_mg_l)),
        ParameterCheck::new("COD", "mg/L", params.cod_mg_l, at_most(standard.cod_mg_l)),
        ParameterCheck::new("TSS", "mg/L", params.tss_mg_l, at_most(standard.tss_mg_l)),
        ParameterCheck::new("pH", "", params.ph, Limit::Within { range: standard.ph }),
        ParameterCheck::new(
            "Oil & Grease",
            "mg/L",
            params.oil_grease_mg_l,
            at_most(standard.oil_grease_mg_l),
        ),
        ParameterCheck::new(
            "Nitrogen",
            "mg/L",
            params.nitrogen_mg_l,
            at_most(standard.nitrogen_mg_l),
        ),
    ]
}

/// Checks against the plant's own industry; empty without one.
pub fn plant_compliance(params: &PlantParameters) -> Vec<ParameterCheck> {
    params
        .standards()
        .map(|standard| compliance(params, &standard))
        .unwrap_or_default()
}
