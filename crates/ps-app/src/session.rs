//! Session state and the action reducer.
//!
//! A [`Session`] is never edited in place. [`reduce`] takes the current
//! state and an [`Action`] and returns a new state in which every derived
//! field (tank volumes, equipment prices, cost totals) has been recomputed
//! in a fixed order: parameters, volumes, equipment capacities, totals.

use ps_core::TreatmentTrain;
use ps_pricing::{CostTotals, EquipmentMap, QuantityChange, set_quantity, update_capacities};
use ps_reference::{Chemical, equipment_catalog};
use ps_sizing::{ChemicalDosing, PlantParameters, TankVolumeSet, tank_volumes};
use serde::{Deserialize, Serialize};

/// Contact details printed on the quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
}

/// User edits the session understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the plant parameters wholesale.
    SetPlantParameters(PlantParameters),
    SetTreatmentTrain(TreatmentTrain),
    SetEquipmentQuantity { id: String, quantity: u32 },
    /// Back to an unsized plant with every quantity at 1.
    Reset,
    SetClient(ClientInfo),
    /// Add or replace the dosing entry for its chemical.
    SetChemicalDosing(ChemicalDosing),
    RemoveChemicalDosing(Chemical),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    params: PlantParameters,
    train: TreatmentTrain,
    tanks: TankVolumeSet,
    equipment: EquipmentMap,
    totals: CostTotals,
    dosing: Vec<ChemicalDosing>,
    client: ClientInfo,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Unsized plant, biological train, catalog default quantities.
    pub fn new() -> Self {
        Self::derive(
            PlantParameters::default(),
            TreatmentTrain::default(),
            &EquipmentMap::from_catalog(equipment_catalog()),
            Vec::new(),
            ClientInfo::default(),
        )
    }

    /// Recompute every derived field from the given inputs.
    fn derive(
        params: PlantParameters,
        train: TreatmentTrain,
        equipment: &EquipmentMap,
        dosing: Vec<ChemicalDosing>,
        client: ClientInfo,
    ) -> Self {
        let params = params.sanitized();
        let tanks = tank_volumes(train, &params);
        let equipment = update_capacities(equipment_catalog(), &params, &tanks, equipment);
        let totals = totals_for(&params, &equipment);

        tracing::debug!(
            capacity = params.capacity_m3_per_day,
            %train,
            total = totals.total_with_fixed,
            "session recomputed"
        );

        Self {
            params,
            train,
            tanks,
            equipment,
            totals,
            dosing,
            client,
        }
    }

    pub fn params(&self) -> &PlantParameters {
        &self.params
    }

    pub fn train(&self) -> TreatmentTrain {
        self.train
    }

    pub fn tanks(&self) -> &TankVolumeSet {
        &self.tanks
    }

    pub fn equipment(&self) -> &EquipmentMap {
        &self.equipment
    }

    pub fn totals(&self) -> CostTotals {
        self.totals
    }

    pub fn dosing(&self) -> &[ChemicalDosing] {
        &self.dosing
    }

    pub fn client(&self) -> &ClientInfo {
        &self.client
    }

    /// Convenience for `reduce(self, action)`.
    pub fn apply(&self, action: Action) -> Self {
        reduce(self, action)
    }
}

/// Totals stay at zero until the plant has a capacity.
fn totals_for(params: &PlantParameters, equipment: &EquipmentMap) -> CostTotals {
    if params.is_sized() {
        CostTotals::of(equipment)
    } else {
        CostTotals::default()
    }
}

/// Apply `action` to `state`, returning a new, fully consistent session.
pub fn reduce(state: &Session, action: Action) -> Session {
    match action {
        Action::SetPlantParameters(params) => {
            // Dosing entries belong to the industry they were suggested for.
            let dosing = if params.industry == state.params.industry {
                state.dosing.clone()
            } else {
                Vec::new()
            };
            Session::derive(
                params,
                state.train,
                &state.equipment,
                dosing,
                state.client.clone(),
            )
        }
        Action::SetTreatmentTrain(train) => Session::derive(
            state.params.clone(),
            train,
            &state.equipment,
            state.dosing.clone(),
            state.client.clone(),
        ),
        Action::SetEquipmentQuantity { id, quantity } => {
            let (equipment, change) = set_quantity(&state.equipment, &id, quantity);
            if change != QuantityChange::Applied {
                tracing::debug!(id = %id, ?change, "quantity edit ignored");
                return state.clone();
            }
            let mut next = state.clone();
            next.totals = totals_for(&next.params, &equipment);
            next.equipment = equipment;
            next
        }
        Action::Reset => Session::derive(
            PlantParameters::default(),
            TreatmentTrain::default(),
            &state.equipment.with_unit_quantities(),
            Vec::new(),
            state.client.clone(),
        ),
        Action::SetClient(client) => {
            let mut next = state.clone();
            next.client = client;
            next
        }
        Action::SetChemicalDosing(entry) => {
            let entry = entry.sanitized();
            let mut next = state.clone();
            match next.dosing.iter_mut().find(|d| d.chemical == entry.chemical) {
                Some(existing) => *existing = entry,
                None => next.dosing.push(entry),
            }
            next
        }
        Action::RemoveChemicalDosing(chemical) => {
            let mut next = state.clone();
            next.dosing.retain(|d| d.chemical != chemical);
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::TankStage;
    use ps_reference::{Industry, fixed_costs_total};

    fn plant(capacity: f64) -> PlantParameters {
        PlantParameters {
            industry: Some(Industry::Textile),
            capacity_m3_per_day: capacity,
            bod_mg_l: 300.0,
            tss_mg_l: 400.0,
            ..Default::default()
        }
    }

    #[test]
    fn initial_state_is_unsized() {
        let s = Session::new();
        assert_eq!(s.params().capacity_m3_per_day, 0.0);
        assert_eq!(s.train(), TreatmentTrain::Biological);
        assert_eq!(s.totals(), CostTotals::default());
        assert!(s.tanks().iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn sizing_prices_equipment_and_fixed_costs() {
        let s = Session::new().apply(Action::SetPlantParameters(plant(1000.0)));
        let t = s.totals();
        assert!(t.equipment_only_subtotal > 0.0);
        assert_eq!(t.fixed_subtotal, fixed_costs_total());
        assert_eq!(
            s.tanks().volume_m3(TankStage::EqualizationTank),
            Some(500.0)
        );
    }

    #[test]
    fn negative_parameters_are_clamped() {
        let mut p = plant(1000.0);
        p.tss_mg_l = -50.0;
        p.bod_mg_l = f64::NAN;
        let s = Session::new().apply(Action::SetPlantParameters(p));
        assert_eq!(s.params().tss_mg_l, 0.0);
        assert_eq!(s.params().bod_mg_l, 0.0);
    }

    #[test]
    fn fixed_quantity_edit_changes_nothing() {
        let s = Session::new().apply(Action::SetPlantParameters(plant(1000.0)));
        let next = s.apply(Action::SetEquipmentQuantity {
            id: "commissioning".into(),
            quantity: 9,
        });
        assert_eq!(next, s);
    }

    #[test]
    fn quantity_edit_updates_totals_not_volumes() {
        let s = Session::new().apply(Action::SetPlantParameters(plant(1000.0)));
        let next = s.apply(Action::SetEquipmentQuantity {
            id: "uf_system".into(),
            quantity: 3,
        });
        assert_eq!(next.tanks(), s.tanks());
        assert!(next.totals().total_with_fixed > s.totals().total_with_fixed);
    }

    #[test]
    fn industry_change_clears_dosing() {
        let s = Session::new()
            .apply(Action::SetPlantParameters(plant(1000.0)))
            .apply(Action::SetChemicalDosing(ChemicalDosing::new(
                Chemical::Alum,
                50.0,
                10.0,
                8.0,
            )));
        assert_eq!(s.dosing().len(), 1);

        let same = s.apply(Action::SetPlantParameters(plant(2000.0)));
        assert_eq!(same.dosing().len(), 1);

        let mut dairy = plant(2000.0);
        dairy.industry = Some(Industry::Dairy);
        let other = s.apply(Action::SetPlantParameters(dairy));
        assert!(other.dosing().is_empty());
    }

    #[test]
    fn dosing_is_keyed_by_chemical() {
        let s = Session::new()
            .apply(Action::SetChemicalDosing(ChemicalDosing::new(Chemical::Alum, 50.0, 10.0, 8.0)))
            .apply(Action::SetChemicalDosing(ChemicalDosing::new(Chemical::Alum, 80.0, 10.0, 30.0)));
        assert_eq!(s.dosing().len(), 1);
        assert_eq!(s.dosing()[0].concentration_ppm, 80.0);
        assert_eq!(s.dosing()[0].operation_hours, 24.0);

        let s = s.apply(Action::RemoveChemicalDosing(Chemical::Alum));
        assert!(s.dosing().is_empty());
    }

    #[test]
    fn client_survives_reset() {
        let client = ClientInfo {
            name: "A. Shah".into(),
            ..Default::default()
        };
        let s = Session::new()
            .apply(Action::SetClient(client.clone()))
            .apply(Action::SetPlantParameters(plant(500.0)))
            .apply(Action::Reset);
        assert_eq!(s.client(), &client);
    }
}
