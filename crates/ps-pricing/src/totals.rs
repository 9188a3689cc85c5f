//! Cost subtotals.
//!
//! Two totals are kept because both are quoted: the plant total including
//! the lump-sum fixed items, and the equipment-only subtotal without them.

use crate::map::EquipmentMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostTotals {
    /// Every line item, fixed costs included (₹).
    pub total_with_fixed: f64,
    /// Line items excluding the fixed-cost ids (₹).
    pub equipment_only_subtotal: f64,
    /// The fixed-cost ids alone (₹).
    pub fixed_subtotal: f64,
}

impl CostTotals {
    pub fn of(map: &EquipmentMap) -> Self {
        let equipment = equipment_only_subtotal(map);
        let fixed: f64 = map.fixed().map(|i| i.total_price).sum();
        Self {
            total_with_fixed: equipment + fixed,
            equipment_only_subtotal: equipment,
            fixed_subtotal: fixed,
        }
    }
}

/// Sum of every line total.
pub fn total_cost(map: &EquipmentMap) -> f64 {
    map.iter().map(|i| i.total_price).sum()
}

pub fn equipment_only_subtotal(map: &EquipmentMap) -> f64 {
    map.equipment().map(|i| i.total_price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{set_quantity, update_capacities};
    use ps_core::{Tolerances, TreatmentTrain, nearly_equal};
    use ps_reference::{equipment_catalog, fixed_costs_total};
    use ps_sizing::{PlantParameters, tank_volumes};

    fn priced(capacity: f64) -> EquipmentMap {
        let p = PlantParameters {
            capacity_m3_per_day: capacity,
            bod_mg_l: 250.0,
            ..Default::default()
        };
        let tanks = tank_volumes(TreatmentTrain::Chemical, &p);
        update_capacities(
            equipment_catalog(),
            &p,
            &tanks,
            &EquipmentMap::from_catalog(equipment_catalog()),
        )
    }

    #[test]
    fn subtotals_partition_total() {
        let map = priced(800.0);
        let t = CostTotals::of(&map);
        let tol = Tolerances::default();
        assert!(nearly_equal(t.total_with_fixed, total_cost(&map), tol));
        assert!(nearly_equal(
            t.total_with_fixed,
            t.equipment_only_subtotal + fixed_costs_total(),
            tol
        ));
        assert_eq!(t.fixed_subtotal, fixed_costs_total());
    }

    #[test]
    fn quantity_edit_moves_equipment_subtotal_only() {
        let map = priced(800.0);
        let before = CostTotals::of(&map);
        let price = map.get("bar_screen").unwrap().base_price;
        let (map, _) = set_quantity(&map, "bar_screen", 3);
        let after = CostTotals::of(&map);
        let tol = Tolerances::default();
        assert!(nearly_equal(
            after.equipment_only_subtotal - before.equipment_only_subtotal,
            2.0 * price,
            tol
        ));
        assert_eq!(after.fixed_subtotal, before.fixed_subtotal);
    }

    #[test]
    fn empty_map_totals_zero() {
        assert_eq!(CostTotals::of(&EquipmentMap::default()), CostTotals::default());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::engine::{set_quantity, update_capacities};
    use proptest::prelude::*;
    use ps_core::TreatmentTrain;
    use ps_reference::{equipment_catalog, fixed_costs_total};
    use ps_sizing::{PlantParameters, tank_volumes};

    fn train() -> impl Strategy<Value = TreatmentTrain> {
        prop_oneof![Just(TreatmentTrain::Biological), Just(TreatmentTrain::Chemical)]
    }

    proptest! {
        #[test]
        fn refresh_is_idempotent(capacity in 0.0..5000.0f64, bod in 0.0..2000.0f64, t in train()) {
            let p = PlantParameters { capacity_m3_per_day: capacity, bod_mg_l: bod, ..Default::default() };
            let tanks = tank_volumes(t, &p);
            let once = update_capacities(equipment_catalog(), &p, &tanks, &EquipmentMap::from_catalog(equipment_catalog()));
            let twice = update_capacities(equipment_catalog(), &p, &tanks, &once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn quantities_survive_refresh(
            capacity in 1.0..5000.0f64,
            other in 1.0..5000.0f64,
            qty in 0u32..20,
        ) {
            let a = PlantParameters { capacity_m3_per_day: capacity, ..Default::default() };
            let b = PlantParameters { capacity_m3_per_day: other, ..Default::default() };
            let ta = tank_volumes(TreatmentTrain::Biological, &a);
            let tb = tank_volumes(TreatmentTrain::Biological, &b);
            let map = update_capacities(equipment_catalog(), &a, &ta, &EquipmentMap::from_catalog(equipment_catalog()));
            let (map, _) = set_quantity(&map, "uf_system", qty);
            let map = update_capacities(equipment_catalog(), &b, &tb, &map);
            prop_assert_eq!(map.get("uf_system").unwrap().quantity, qty);
        }

        #[test]
        fn fixed_subtotal_never_moves(capacity in 0.0..5000.0f64, qty in 0u32..20, idx in 0usize..5) {
            let p = PlantParameters { capacity_m3_per_day: capacity, ..Default::default() };
            let tanks = tank_volumes(TreatmentTrain::Biological, &p);
            let map = update_capacities(equipment_catalog(), &p, &tanks, &EquipmentMap::from_catalog(equipment_catalog()));
            let (map, _) = set_quantity(&map, ps_reference::FIXED_COST_IDS[idx], qty);
            let totals = CostTotals::of(&map);
            prop_assert_eq!(totals.fixed_subtotal, fixed_costs_total());
            prop_assert!(totals.equipment_only_subtotal >= 0.0);
        }
    }
}
