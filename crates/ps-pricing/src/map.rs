//! The priced equipment list.

use crate::sizing::SizeBasis;
use ps_reference::{CatalogEntry, PricingRule, is_fixed_cost};
use serde::Serialize;

/// One priced line item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub rule: PricingRule,
    /// Size input of the rule, see [`EquipmentItem::size_basis`].
    pub size: f64,
    /// Price of one unit at the current size (₹).
    pub base_price: f64,
    pub quantity: u32,
    /// base_price × quantity (₹)
    pub total_price: f64,
}

impl EquipmentItem {
    pub(crate) fn from_catalog(entry: &CatalogEntry, quantity: u32) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            rule: entry.rule,
            size: 0.0,
            base_price: 0.0,
            quantity,
            total_price: 0.0,
        }
    }

    pub fn is_fixed_cost(&self) -> bool {
        is_fixed_cost(&self.id)
    }

    pub fn size_basis(&self) -> SizeBasis {
        SizeBasis::of(&self.rule)
    }

    pub(crate) fn reprice(&mut self) {
        self.total_price = self.base_price * f64::from(self.quantity);
    }
}

/// Line items in catalog order, looked up by id.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct EquipmentMap {
    items: Vec<EquipmentItem>,
}

impl EquipmentMap {
    /// Unpriced items at their catalog default quantities.
    pub fn from_catalog(catalog: &[CatalogEntry]) -> Self {
        Self {
            items: catalog
                .iter()
                .map(|e| EquipmentItem::from_catalog(e, default_quantity(e)))
                .collect(),
        }
    }

    pub(crate) fn from_items(items: Vec<EquipmentItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&EquipmentItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut EquipmentItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items excluding the fixed-cost ids.
    pub fn equipment(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter().filter(|i| !i.is_fixed_cost())
    }

    /// Only the fixed-cost ids.
    pub fn fixed(&self) -> impl Iterator<Item = &EquipmentItem> {
        self.items.iter().filter(|i| i.is_fixed_cost())
    }

    /// Every quantity back to 1; non-fixed items lose their computed price,
    /// fixed-cost items keep theirs.
    pub fn with_unit_quantities(&self) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut item = item.clone();
                item.quantity = 1;
                if !item.is_fixed_cost() {
                    item.size = 0.0;
                    item.base_price = 0.0;
                }
                item.reprice();
                item
            })
            .collect();
        Self { items }
    }
}

pub(crate) fn default_quantity(entry: &CatalogEntry) -> u32 {
    if entry.is_fixed_cost() {
        1
    } else {
        entry.default_quantity
    }
}
