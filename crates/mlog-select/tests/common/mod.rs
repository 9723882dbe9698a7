#![allow(dead_code)]

use mlog_catalog::{OperationCatalog, ResourceCatalog, ResourceTable};
use mlog_core::{ResourceKind, ResourceTypeId};
use mlog_phase::{standard_installation_specs, standard_om_specs, LogisticPhase};

pub const VESSEL_COLUMNS: &[&str] = &["DeckLoading_ton_per_m2", "DeckSpace_m2"];
pub const EQUIPMENT_COLUMNS: &[&str] = &["SleeveDiameter_m", "Capacity_t"];

pub const VESSEL_TYPES: &[&str] = &[
    "Anchor Handling",
    "CTV",
    "Cable Repair Vessel",
    "Crane Barge",
    "Crane Vessel",
    "Dive Support Vessel",
    "Helicopter",
    "JUP Barge",
    "JUP Vessel",
    "Multicat",
    "Tugboat",
];

pub const EQUIPMENT_TYPES: &[&str] = &[
    "Divers",
    "Drill Rig",
    "Hammer",
    "Rov burial",
    "Rov inspection",
    "Rov workclass",
    "Subsea Excavating Tools",
];

pub fn type_id(name: &str) -> ResourceTypeId {
    ResourceTypeId::new(name).unwrap()
}

pub fn vessel_rows() -> Vec<Vec<f64>> {
    vec![vec![10.0, 300.0], vec![20.0, 600.0], vec![30.0, 900.0]]
}

pub fn equipment_rows() -> Vec<Vec<f64>> {
    vec![vec![2.0, 5.0], vec![3.0, 10.0], vec![2.5, 20.0]]
}

/// Standard fleet where `overrides` replace the rows of the named types.
pub fn fleet_with(overrides: &[(&str, Vec<Vec<f64>>)]) -> ResourceCatalog {
    let rows_for = |name: &str, default: Vec<Vec<f64>>| {
        overrides
            .iter()
            .find(|(target, _)| *target == name)
            .map(|(_, rows)| rows.clone())
            .unwrap_or(default)
    };
    let mut catalog = ResourceCatalog::new();
    for name in VESSEL_TYPES {
        let rows = rows_for(*name, vessel_rows());
        catalog.insert(
            ResourceKind::Vessel,
            ResourceTable::numeric(type_id(*name), VESSEL_COLUMNS, &rows).unwrap(),
        );
    }
    for name in EQUIPMENT_TYPES {
        let rows = rows_for(*name, equipment_rows());
        catalog.insert(
            ResourceKind::Equipment,
            ResourceTable::numeric(type_id(*name), EQUIPMENT_COLUMNS, &rows).unwrap(),
        );
    }
    catalog
}

pub fn fleet() -> ResourceCatalog {
    fleet_with(&[])
}

pub fn installation_phase(key: &str, catalog: &ResourceCatalog) -> LogisticPhase {
    standard_installation_specs()
        .into_iter()
        .find(|spec| spec.key == key)
        .unwrap()
        .build(&OperationCatalog::standard(), catalog)
        .unwrap()
}

pub fn om_phase(key: &str, catalog: &ResourceCatalog) -> LogisticPhase {
    standard_om_specs()
        .into_iter()
        .find(|spec| spec.key == key)
        .unwrap()
        .build(&OperationCatalog::standard(), catalog)
        .unwrap()
}

pub fn driven_piles() -> LogisticPhase {
    installation_phase("F_driven", &fleet())
}
