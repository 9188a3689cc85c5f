//! Per-stage tank volumes and their derived geometry.

use crate::params::PlantParameters;
use crate::{biological, chemical, formulas};
use ps_core::units::constants::{TANK_HEIGHT_M, TANK_LENGTH_M};
use ps_core::units::{Length, Volume, m, m3};
use ps_core::{TankStage, TreatmentTrain};
use serde::Serialize;

/// Tank volumes for one treatment train.
///
/// Only volumes are stored. Breadth is always projected from volume through
/// [`breadth_m`], so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TankVolumeSet {
    train: TreatmentTrain,
    volumes: Vec<(TankStage, f64)>,
}

/// Length × breadth × height of a single tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankDimensions {
    pub length: Length,
    pub breadth: Length,
    pub height: Length,
}

impl TankVolumeSet {
    pub(crate) fn from_volumes(train: TreatmentTrain, volumes: Vec<(TankStage, f64)>) -> Self {
        Self { train, volumes }
    }

    /// Every stage of `train` at zero volume.
    pub fn empty(train: TreatmentTrain) -> Self {
        Self {
            train,
            volumes: train.stages().iter().map(|&s| (s, 0.0)).collect(),
        }
    }

    pub fn train(&self) -> TreatmentTrain {
        self.train
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    pub fn contains(&self, stage: TankStage) -> bool {
        self.volumes.iter().any(|(s, _)| *s == stage)
    }

    /// Volume (m³), `None` when the stage is not part of this train.
    pub fn volume_m3(&self, stage: TankStage) -> Option<f64> {
        self.volumes
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, v)| *v)
    }

    pub fn volume(&self, stage: TankStage) -> Option<Volume> {
        self.volume_m3(stage).map(m3)
    }

    pub fn breadth_m(&self, stage: TankStage) -> Option<f64> {
        self.volume_m3(stage).map(breadth_m)
    }

    pub fn dimensions(&self, stage: TankStage) -> Option<TankDimensions> {
        self.breadth_m(stage).map(|b| TankDimensions {
            length: m(TANK_LENGTH_M),
            breadth: m(b),
            height: m(TANK_HEIGHT_M),
        })
    }

    /// Stages in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (TankStage, f64)> + '_ {
        self.volumes.iter().copied()
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.volumes.iter().map(|(_, v)| v).sum()
    }
}

/// Breadth (m) of a tank of `volume_m3` at the fixed 3 m × 3 m section.
pub fn breadth_m(volume_m3: f64) -> f64 {
    formulas::breadth(volume_m3)
}

/// Size every tank of `train` for `params`. Always recomputes the full set.
pub fn tank_volumes(train: TreatmentTrain, params: &PlantParameters) -> TankVolumeSet {
    match train {
        TreatmentTrain::Biological => biological::tank_volumes(params),
        TreatmentTrain::Chemical => chemical::tank_volumes(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::units::{to_m, to_m3};

    fn params() -> PlantParameters {
        PlantParameters {
            capacity_m3_per_day: 1000.0,
            bod_mg_l: 300.0,
            tss_mg_l: 400.0,
            ..Default::default()
        }
    }

    #[test]
    fn empty_set_has_full_schedule() {
        let set = TankVolumeSet::empty(TreatmentTrain::Chemical);
        assert_eq!(set.len(), 11);
        assert_eq!(set.total_volume_m3(), 0.0);
        assert_eq!(set.breadth_m(TankStage::BarScreen), Some(0.0));
    }

    #[test]
    fn dimensions_project_from_volume() {
        let set = tank_volumes(TreatmentTrain::Biological, &params());
        let dims = set.dimensions(TankStage::EqualizationTank).unwrap();
        assert!((to_m(dims.length) - 3.0).abs() < 1e-12);
        assert!((to_m(dims.height) - 3.0).abs() < 1e-12);
        assert!((to_m(dims.breadth) - 500.0 / 9.0).abs() < 1e-9);
        let vol = set.volume(TankStage::EqualizationTank).unwrap();
        assert!((to_m3(vol) - 500.0).abs() < 1e-9);
    }

    #[test]
    fn switching_train_drops_biological_stages() {
        let bio = tank_volumes(TreatmentTrain::Biological, &params());
        let chem = tank_volumes(TreatmentTrain::Chemical, &params());

        assert!(bio.contains(TankStage::AnoxicTank));
        assert!(bio.contains(TankStage::MbbrTank));
        assert!(!chem.contains(TankStage::AnoxicTank));
        assert!(!chem.contains(TankStage::MbbrTank));
        assert_ne!(
            bio.volume_m3(TankStage::TubeSettle1),
            chem.volume_m3(TankStage::TubeSettle1)
        );
        assert_eq!(chem.volume_m3(TankStage::TubeSettle1), Some(125.0));
    }

    #[test]
    fn schedule_order_is_preserved() {
        let set = tank_volumes(TreatmentTrain::Biological, &params());
        let stages: Vec<TankStage> = set.iter().map(|(s, _)| s).collect();
        assert_eq!(stages, TreatmentTrain::Biological.stages());
    }
}
