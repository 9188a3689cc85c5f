//! Capacity refresh and quantity edits.

use crate::map::{EquipmentItem, EquipmentMap, default_quantity};
use crate::sizing::{size_for, unit_price};
use ps_reference::CatalogEntry;
use ps_sizing::{PlantParameters, TankVolumeSet};

/// Refresh every catalog entry's size and price from the current plant.
///
/// Quantities already in `current` are kept; entries new to the catalog get
/// their default quantity, and ids the catalog no longer carries are dropped.
/// Fixed-cost entries are always priced once. An unsized plant (zero
/// capacity) prices every non-fixed entry at zero.
pub fn update_capacities(
    catalog: &[CatalogEntry],
    params: &PlantParameters,
    tanks: &TankVolumeSet,
    current: &EquipmentMap,
) -> EquipmentMap {
    let sized = params.is_sized();

    let items = catalog
        .iter()
        .map(|entry| {
            let quantity = if entry.is_fixed_cost() {
                1
            } else {
                current
                    .get(entry.id)
                    .map(|item| item.quantity)
                    .unwrap_or_else(|| default_quantity(entry))
            };

            let mut item = EquipmentItem::from_catalog(entry, quantity);
            if entry.is_fixed_cost() || sized {
                item.size = size_for(&entry.rule, params, tanks);
                item.base_price = unit_price(&entry.rule, item.size);
            }
            item.reprice();
            item
        })
        .collect();

    let dropped = current
        .iter()
        .filter(|item| !catalog.iter().any(|e| e.id == item.id))
        .count();
    if dropped > 0 {
        tracing::debug!(dropped, "equipment ids no longer in catalog");
    }

    EquipmentMap::from_items(items)
}

/// Outcome of a quantity edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Applied,
    /// Fixed-cost items are always quoted once; the edit is ignored.
    FixedCost,
    UnknownId,
}

/// Set `id`'s quantity and reprice that line. No-op for fixed-cost and
/// unknown ids.
pub fn set_quantity(map: &EquipmentMap, id: &str, quantity: u32) -> (EquipmentMap, QuantityChange) {
    if ps_reference::is_fixed_cost(id) {
        return (map.clone(), QuantityChange::FixedCost);
    }

    let mut next = map.clone();
    match next.get_mut(id) {
        Some(item) => {
            item.quantity = quantity;
            item.reprice();
            (next, QuantityChange::Applied)
        }
        None => (next, QuantityChange::UnknownId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::TreatmentTrain;
    use ps_reference::{equipment_catalog, fixed_costs_total};
    use ps_sizing::tank_volumes;

    fn plant(capacity: f64) -> PlantParameters {
        PlantParameters {
            capacity_m3_per_day: capacity,
            bod_mg_l: 300.0,
            tss_mg_l: 400.0,
            ..Default::default()
        }
    }

    fn priced(capacity: f64) -> EquipmentMap {
        let p = plant(capacity);
        let tanks = tank_volumes(TreatmentTrain::Biological, &p);
        update_capacities(
            equipment_catalog(),
            &p,
            &tanks,
            &EquipmentMap::from_catalog(equipment_catalog()),
        )
    }

    #[test]
    fn prices_follow_capacity() {
        let small = priced(500.0);
        let large = priced(1000.0);
        let blower_small = small.get("air_blower").unwrap();
        let blower_large = large.get("air_blower").unwrap();
        assert_eq!(blower_small.size, 500.0);
        assert_eq!(blower_large.base_price, 150_000.0);
        assert!(blower_large.base_price > blower_small.base_price);

        let pump = large.get("raw_effluent_pump").unwrap();
        assert_eq!(pump.size, 50.0);
        assert_eq!(pump.base_price, 90_000.0);
    }

    #[test]
    fn unsized_plant_prices_only_fixed_costs() {
        let map = priced(0.0);
        let fixed: f64 = map.fixed().map(|i| i.total_price).sum();
        let equipment: f64 = map.equipment().map(|i| i.total_price).sum();
        assert_eq!(fixed, fixed_costs_total());
        assert_eq!(equipment, 0.0);
    }

    #[test]
    fn fixed_cost_quantity_is_pinned() {
        let map = priced(1000.0);
        let (next, change) = set_quantity(&map, "installation", 7);
        assert_eq!(change, QuantityChange::FixedCost);
        assert_eq!(next, map);
    }

    #[test]
    fn quantity_edit_reprices_line() {
        let map = priced(1000.0);
        let (next, change) = set_quantity(&map, "uf_system", 2);
        assert_eq!(change, QuantityChange::Applied);
        let uf = next.get("uf_system").unwrap();
        assert_eq!(uf.quantity, 2);
        assert_eq!(uf.total_price, uf.base_price * 2.0);
    }

    #[test]
    fn unknown_id_is_noop() {
        let map = priced(1000.0);
        let (next, change) = set_quantity(&map, "reverse_osmosis", 2);
        assert_eq!(change, QuantityChange::UnknownId);
        assert_eq!(next, map);
    }

    #[test]
    fn catalog_changes_are_tolerated() {
        let map = priced(1000.0);
        let p = plant(1000.0);
        let tanks = tank_volumes(TreatmentTrain::Biological, &p);

        let shrunk = &equipment_catalog()[..3];
        let next = update_capacities(shrunk, &p, &tanks, &map);
        assert_eq!(next.len(), 3);

        let grown = update_capacities(equipment_catalog(), &p, &tanks, &next);
        assert_eq!(grown.len(), equipment_catalog().len());
        assert_eq!(grown.get("dosing_pump").unwrap().quantity, 3);
    }
}
