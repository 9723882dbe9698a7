#![allow(dead_code)]

use mlog_catalog::{ResourceCatalog, ResourceTable};
use mlog_core::{ResourceKind, ResourceTypeId};

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

pub fn table(type_id: &str, columns: &[&str], rows: &[Vec<f64>]) -> ResourceTable {
    ResourceTable::numeric(ResourceTypeId::new(type_id).unwrap(), columns, rows).unwrap()
}

/// Every type referenced by the standard phases, three units each.
pub fn fleet() -> ResourceCatalog {
    fleet_without(&[])
}

pub fn fleet_without(missing: &[&str]) -> ResourceCatalog {
    let mut catalog = ResourceCatalog::new();
    for name in VESSEL_TYPES.iter().filter(|name| !missing.contains(name)) {
        catalog.insert(
            ResourceKind::Vessel,
            table(
                name,
                &["DeckSpace_m2", "DeckLoading_ton_per_m2"],
                &[vec![300.0, 10.0], vec![600.0, 20.0], vec![900.0, 30.0]],
            ),
        );
    }
    for name in EQUIPMENT_TYPES.iter().filter(|name| !missing.contains(name)) {
        catalog.insert(
            ResourceKind::Equipment,
            table(
                name,
                &["Capacity_t", "Depth_m"],
                &[vec![5.0, 50.0], vec![10.0, 100.0], vec![20.0, 300.0]],
            ),
        );
    }
    catalog
}
