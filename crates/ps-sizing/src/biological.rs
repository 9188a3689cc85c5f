//! Biological-with-chemical treatment train.
//!
//! Same front end as the chemical train, plus an anoxic tank, an MBBR
//! reactor sized on organic load and a second tube settler after it.

use crate::formulas;
use crate::params::PlantParameters;
use crate::tanks::TankVolumeSet;
use ps_core::numeric::non_negative;
use ps_core::{TankStage, TreatmentTrain};

/// Tube settler volume per unit flow in the biological train.
pub const TUBE_SETTLE_COEFF: f64 = 2.0;

/// Anoxic tank volume per unit flow.
pub const ANOXIC_COEFF: f64 = 4.0;

/// Design organic loading of the MBBR reactor (kg BOD / m³ / day).
pub const MBBR_ORGANIC_LOADING: f64 = 1.0;

pub fn tube_settle_1(flow_rate: f64) -> f64 {
    (non_negative(flow_rate) * TUBE_SETTLE_COEFF).max(0.0)
}

pub fn tube_settle_2(flow_rate: f64) -> f64 {
    (non_negative(flow_rate) * TUBE_SETTLE_COEFF).max(0.0)
}

pub fn anoxic(flow_rate: f64) -> f64 {
    (non_negative(flow_rate) * ANOXIC_COEFF).max(0.0)
}

/// Reactor volume holding the daily BOD load at the design loading rate.
pub fn mbbr(capacity_m3_per_day: f64, bod_mg_l: f64) -> f64 {
    // mg/L × m³/day / 1000 = kg/day
    let bod_load_kg_per_day = non_negative(capacity_m3_per_day) * non_negative(bod_mg_l) / 1000.0;
    (bod_load_kg_per_day / MBBR_ORGANIC_LOADING).max(0.0)
}

/// Compute every biological-train stage from the plant parameters.
pub fn tank_volumes(params: &PlantParameters) -> TankVolumeSet {
    let flow = params.flow_rate();
    let peak = params.peak_flow();
    let capacity = params.capacity_m3_per_day;

    let volumes = TreatmentTrain::Biological
        .stages()
        .iter()
        .map(|&stage| {
            let v = match stage {
                TankStage::BarScreen => formulas::bar_screen(flow, peak),
                TankStage::OilGreaseTank => formulas::oil_grease(flow, peak),
                TankStage::EqualizationTank => formulas::equalization(flow),
                TankStage::PhNeutralizationTank => formulas::ph_neutralization(flow),
                TankStage::CoagulantsTank => formulas::coagulants(flow),
                TankStage::FlocculantTank => formulas::flocculant(flow),
                TankStage::TubeSettle1 => tube_settle_1(flow),
                TankStage::AnoxicTank => anoxic(flow),
                TankStage::MbbrTank => mbbr(capacity, params.bod_mg_l),
                TankStage::TubeSettle2 => tube_settle_2(flow),
                TankStage::FilterFeedTank => formulas::filter_feed(flow),
                TankStage::TreatedWaterTank => formulas::treated_water(flow),
                TankStage::UfWaterTank => formulas::uf_water(flow),
                TankStage::SludgeHoldingTank => {
                    formulas::sludge_holding(capacity, params.bod_mg_l, params.tss_mg_l)
                }
            };
            (stage, v)
        })
        .collect();

    tracing::debug!(flow, peak, "sized biological train");
    TankVolumeSet::from_volumes(TreatmentTrain::Biological, volumes)
}
