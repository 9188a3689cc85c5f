//! Stage formulas shared by both treatment trains.
//!
//! Inputs are coerced with [`non_negative`] and outputs clamped at zero, so
//! every function is total and never returns a negative volume.

use ps_core::numeric::non_negative;
use ps_core::units::constants::{TANK_HEIGHT_M, TANK_LENGTH_M};

/// Shared sizing coefficients (multiples of flow rate unless noted).
pub mod coeff {
    pub const BAR_SCREEN: f64 = 0.04167;
    /// Oil/grease retention in minutes, applied to flow × peak flow.
    pub const OIL_GREASE_RETENTION_MIN: f64 = 20.0;
    pub const EQUALIZATION: f64 = 10.0;
    pub const PH_NEUTRALIZATION: f64 = 0.3333;
    pub const COAGULANTS: f64 = 0.3333;
    pub const FLOCCULANT: f64 = 0.3333;
    pub const FILTER_FEED: f64 = 2.5;
    pub const TREATED_WATER: f64 = 6.0;
    pub const UF_WATER: f64 = 2.0;
    /// Sludge yield per mg/L of BOD.
    pub const SLUDGE_BOD_YIELD: f64 = 0.15;
    /// Sludge yield per mg/L of TSS.
    pub const SLUDGE_TSS_YIELD: f64 = 0.6;
    pub const SLUDGE_DIVISOR: f64 = 100_000.0;
    /// Days of sludge held.
    pub const SLUDGE_HOLDING_DAYS: f64 = 4.0;
}

#[inline]
fn scaled(flow_rate: f64, k: f64) -> f64 {
    (non_negative(flow_rate) * k).max(0.0)
}

pub fn bar_screen(flow_rate: f64, peak_flow: f64) -> f64 {
    (non_negative(flow_rate) * coeff::BAR_SCREEN * non_negative(peak_flow)).max(0.0)
}

pub fn oil_grease(flow_rate: f64, peak_flow: f64) -> f64 {
    (non_negative(flow_rate) * non_negative(peak_flow) * coeff::OIL_GREASE_RETENTION_MIN / 60.0)
        .max(0.0)
}

pub fn equalization(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::EQUALIZATION)
}

pub fn ph_neutralization(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::PH_NEUTRALIZATION)
}

pub fn coagulants(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::COAGULANTS)
}

pub fn flocculant(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::FLOCCULANT)
}

pub fn filter_feed(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::FILTER_FEED)
}

pub fn treated_water(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::TREATED_WATER)
}

pub fn uf_water(flow_rate: f64) -> f64 {
    scaled(flow_rate, coeff::UF_WATER)
}

/// Daily sludge mass index: capacity × (BOD×0.15 + TSS×0.6) / 100000.
pub fn sludge_holder(capacity_m3_per_day: f64, bod_mg_l: f64, tss_mg_l: f64) -> f64 {
    let load = non_negative(bod_mg_l) * coeff::SLUDGE_BOD_YIELD
        + non_negative(tss_mg_l) * coeff::SLUDGE_TSS_YIELD;
    non_negative(capacity_m3_per_day) * load / coeff::SLUDGE_DIVISOR
}

pub fn sludge_holding(capacity_m3_per_day: f64, bod_mg_l: f64, tss_mg_l: f64) -> f64 {
    (sludge_holder(capacity_m3_per_day, bod_mg_l, tss_mg_l) * coeff::SLUDGE_HOLDING_DAYS).max(0.0)
}

/// Tank breadth for a volume at the fixed length and height.
pub fn breadth(volume_m3: f64) -> f64 {
    non_negative(volume_m3) / (TANK_HEIGHT_M * TANK_LENGTH_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn flow_based_stages() {
        assert!(close(equalization(50.0), 500.0));
        assert!(close(ph_neutralization(50.0), 16.665));
        assert!(close(coagulants(50.0), 16.665));
        assert!(close(flocculant(50.0), 16.665));
        assert!(close(filter_feed(50.0), 125.0));
        assert!(close(treated_water(50.0), 300.0));
        assert!(close(uf_water(50.0), 100.0));
    }

    #[test]
    fn peak_flow_stages() {
        assert!(close(bar_screen(50.0, 75.0), 50.0 * 0.04167 * 75.0));
        assert!(close(oil_grease(50.0, 75.0), 1250.0));
    }

    #[test]
    fn sludge_holding_example() {
        assert!(close(sludge_holder(1000.0, 300.0, 400.0), 2.85));
        assert!(close(sludge_holding(1000.0, 300.0, 400.0), 11.4));
    }

    #[test]
    fn bad_inputs_degrade_to_zero() {
        assert_eq!(equalization(f64::NAN), 0.0);
        assert_eq!(bar_screen(-3.0, 10.0), 0.0);
        assert_eq!(oil_grease(10.0, f64::INFINITY), 0.0);
        assert_eq!(sludge_holding(-1000.0, 300.0, 400.0), 0.0);
        assert_eq!(breadth(f64::NAN), 0.0);
    }

    #[test]
    fn breadth_uses_three_by_three() {
        assert!(close(breadth(27.0), 3.0));
        assert!(close(breadth(11.4), 11.4 / 9.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_stage_is_non_negative(
            flow in 0.0_f64..1.0e6,
            peak in 0.0_f64..1.0e6,
            capacity in -1.0e6_f64..1.0e7,
            bod in -100.0_f64..1.0e5,
            tss in -100.0_f64..1.0e5,
        ) {
            prop_assert!(bar_screen(flow, peak) >= 0.0);
            prop_assert!(oil_grease(flow, peak) >= 0.0);
            prop_assert!(equalization(flow) >= 0.0);
            prop_assert!(ph_neutralization(flow) >= 0.0);
            prop_assert!(coagulants(flow) >= 0.0);
            prop_assert!(flocculant(flow) >= 0.0);
            prop_assert!(filter_feed(flow) >= 0.0);
            prop_assert!(treated_water(flow) >= 0.0);
            prop_assert!(uf_water(flow) >= 0.0);
            prop_assert!(sludge_holding(capacity, bod, tss) >= 0.0);
        }
    }
}
