use ps_app::{Action, Session, reduce};
use ps_core::{TankStage, Tolerances, TreatmentTrain, nearly_equal};
use ps_pricing::CostTotals;
use ps_reference::{Chemical, Industry};
use ps_sizing::{ChemicalDosing, PlantParameters};

fn close(a: f64, b: f64) -> bool {
    nearly_equal(a, b, Tolerances::default())
}

fn scenario_plant() -> PlantParameters {
    PlantParameters {
        industry: Some(Industry::Textile),
        capacity_m3_per_day: 1000.0,
        bod_mg_l: 300.0,
        tss_mg_l: 400.0,
        ..Default::default()
    }
}

#[test]
fn scenario_1_biological_sizing() {
    let s = reduce(&Session::new(), Action::SetPlantParameters(scenario_plant()));
    assert_eq!(s.params().flow_rate(), 50.0);
    let sludge = s.tanks().volume_m3(TankStage::SludgeHoldingTank).unwrap();
    assert!(close(sludge, 11.4));
}

#[test]
fn scenario_2_daily_chemical_cost() {
    let dosing = ChemicalDosing::new(Chemical::PolyAluminumChloride, 800.0, 10.0, 8.0);
    let s = Session::new().apply(Action::SetChemicalDosing(dosing));
    let snap = s.snapshot();
    assert!(close(s.dosing()[0].chemical_use(), 8.0));
    assert!(close(snap.dosing_summary.total_daily_quantity_kg, 64.0));
    assert!(close(snap.dosing_summary.total_daily_cost, 4160.0));
}

#[test]
fn scenario_3_reset() {
    let s = Session::new()
        .apply(Action::SetPlantParameters(scenario_plant()))
        .apply(Action::SetTreatmentTrain(TreatmentTrain::Chemical))
        .apply(Action::SetEquipmentQuantity {
            id: "uf_system".into(),
            quantity: 4,
        })
        .apply(Action::Reset);

    assert_eq!(s.params().capacity_m3_per_day, 0.0);
    assert_eq!(s.train(), TreatmentTrain::Biological);
    assert!(s.tanks().iter().all(|(_, v)| v == 0.0));
    assert_eq!(s.totals(), CostTotals::default());
    for item in s.equipment().iter() {
        assert_eq!(item.quantity, 1);
        if item.is_fixed_cost() {
            assert!(item.base_price > 0.0);
        } else {
            assert_eq!(item.base_price, 0.0);
        }
    }
    assert!(s.dosing().is_empty());
}

#[test]
fn scenario_4_switch_to_chemical() {
    let bio = Session::new().apply(Action::SetPlantParameters(scenario_plant()));
    assert!(bio.tanks().contains(TankStage::AnoxicTank));
    assert!(bio.tanks().contains(TankStage::MbbrTank));

    let chem = bio.apply(Action::SetTreatmentTrain(TreatmentTrain::Chemical));
    assert!(!chem.tanks().contains(TankStage::AnoxicTank));
    assert!(!chem.tanks().contains(TankStage::MbbrTank));
    assert!(close(
        chem.tanks().volume_m3(TankStage::TubeSettle1).unwrap(),
        50.0 * 2.5
    ));
}

#[test]
fn user_quantities_survive_parameter_edits() {
    let s = Session::new()
        .apply(Action::SetPlantParameters(scenario_plant()))
        .apply(Action::SetEquipmentQuantity {
            id: "activated_carbon_filter".into(),
            quantity: 2,
        });
    let before = s.equipment().get("activated_carbon_filter").unwrap().clone();

    let mut bigger = scenario_plant();
    bigger.capacity_m3_per_day = 3000.0;
    let s = s.apply(Action::SetPlantParameters(bigger));
    let after = s.equipment().get("activated_carbon_filter").unwrap();

    assert_eq!(after.quantity, 2);
    assert!(after.base_price > before.base_price);
    assert!(close(after.total_price, after.base_price * 2.0));
}

#[test]
fn unsized_plant_totals_zero() {
    let mut p = scenario_plant();
    p.capacity_m3_per_day = 0.0;
    let s = Session::new().apply(Action::SetPlantParameters(p));
    assert_eq!(s.totals().total_with_fixed, 0.0);
    assert_eq!(s.totals().equipment_only_subtotal, 0.0);
}
