//! Chemical-only treatment train.

use crate::formulas;
use crate::params::PlantParameters;
use crate::tanks::TankVolumeSet;
use ps_core::numeric::non_negative;
use ps_core::{TankStage, TreatmentTrain};

/// Tube settler volume per unit flow in the chemical train.
pub const TUBE_SETTLE_COEFF: f64 = 2.5;

pub fn tube_settle(flow_rate: f64) -> f64 {
    (non_negative(flow_rate) * TUBE_SETTLE_COEFF).max(0.0)
}

/// Compute every chemical-train stage from the plant parameters.
pub fn tank_volumes(params: &PlantParameters) -> TankVolumeSet {
    let flow = params.flow_rate();
    let peak = params.peak_flow();
    let capacity = params.capacity_m3_per_day;

    let volumes = TreatmentTrain::Chemical
        .stages()
        .iter()
        .filter_map(|&stage| {
            let v = match stage {
                TankStage::BarScreen => formulas::bar_screen(flow, peak),
                TankStage::OilGreaseTank => formulas::oil_grease(flow, peak),
                TankStage::EqualizationTank => formulas::equalization(flow),
                TankStage::PhNeutralizationTank => formulas::ph_neutralization(flow),
                TankStage::CoagulantsTank => formulas::coagulants(flow),
                TankStage::FlocculantTank => formulas::flocculant(flow),
                TankStage::TubeSettle1 => tube_settle(flow),
                TankStage::FilterFeedTank => formulas::filter_feed(flow),
                TankStage::TreatedWaterTank => formulas::treated_water(flow),
                TankStage::UfWaterTank => formulas::uf_water(flow),
                TankStage::SludgeHoldingTank => {
                    formulas::sludge_holding(capacity, params.bod_mg_l, params.tss_mg_l)
                }
                TankStage::AnoxicTank | TankStage::MbbrTank | TankStage::TubeSettle2 => {
                    return None;
                }
            };
            Some((stage, v))
        })
        .collect();

    tracing::debug!(flow, peak, "sized chemical train");
    TankVolumeSet::from_volumes(TreatmentTrain::Chemical, volumes)
}
