//! Fixed registry of atomic logistic operations.
//!
//! Operation ids follow a two digit scheme. The first digit is the category:
//! 1 general, 2 electrical infrastructure, 3 foundations, 4 moorings,
//! 5 devices, 6 inspection, 7 on-site maintenance and retrieval. The second
//! digit is a counter within the category.

use std::collections::BTreeMap;
use std::sync::Arc;

use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::OperationId;
use serde::{Deserialize, Serialize};

/// Number of entries in an operating-limit vector (wave height, wave period,
/// wind speed, current speed).
pub const OPERATING_LIMIT_DIMENSIONS: usize = 4;

/// Atomic logistic operation shared by many phase variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Numeric identifier.
    pub id: OperationId,
    /// Human readable description.
    pub description: String,
    /// Operating-limit conditions.
    pub operating_limits: Vec<f64>,
    /// Pre-defined duration in hours.
    pub duration_h: f64,
    /// Pre-defined cost.
    pub cost: f64,
}

impl Operation {
    fn standard(id: u32, description: &str, duration_h: f64) -> Self {
        Self {
            id: OperationId::from_raw(id),
            description: description.to_string(),
            operating_limits: vec![0.0; OPERATING_LIMIT_DIMENSIONS],
            duration_h,
            cost: 0.0,
        }
    }
}

/// Registry of operations keyed by symbolic key (`op1`, `op_F2`, ...).
#[derive(Debug, Clone, Default)]
pub struct OperationCatalog {
    operations: BTreeMap<String, Arc<Operation>>,
}

impl OperationCatalog {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the standard registry used by the installation and O&M phases.
    pub fn standard() -> Self {
        let entries: [(&str, u32, &str, f64); 42] = [
            ("op1", 10, "Mobilisation", 48.0),
            ("op2", 11, "Assembly at port", 1.0),
            ("op3", 13, "Vessel preparation and loading", 1.0),
            ("op4", 14, "Transportation from port to site", 1.0),
            ("op5", 15, "Seafloor and equipment preparation on-site", 0.0),
            ("op6", 16, "Transportation from site to site", 0.0),
            ("op7", 17, "Transportation from site to port", 0.0),
            ("op8", 18, "Demobilisation", 0.0),
            ("op_EI1", 20, "Cable laying", 0.0),
            ("op_EI2", 21, "Cable protection", 0.0),
            (
                "op_F1",
                30,
                "Driven pile foundation seafloor penetration through drilling rig + positioning",
                0.0,
            ),
            (
                "op_F2",
                31,
                "Driven pile foundation seafloor penetration through hammering + positioning",
                0.0,
            ),
            (
                "op_F3",
                32,
                "Driven pile foundation seafloor penetration through vibro-driving + positioning",
                0.0,
            ),
            ("op_F4", 33, "Gravity based foundation lowering + positioning", 0.0),
            ("op_F5", 34, "Suction caisson foundation seafloor penetration + positioning", 0.0),
            ("op_F6", 35, "Support structure positioning", 0.0),
            ("op_F7", 36, "Equipment removal and grouting", 0.0),
            (
                "op_M1",
                40,
                "Driven pile anchor seafloor penetration through drilling rig + positioning",
                0.0,
            ),
            (
                "op_M2",
                41,
                "Driven pile anchor seafloor penetration through hammering + positioning",
                0.0,
            ),
            (
                "op_M3",
                42,
                "Driven pile anchor seafloor penetration through vibro-driving + positioning",
                0.0,
            ),
            ("op_M4", 43, "Gravity based anchor lowering + positioning", 0.0),
            ("op_M5", 44, "Suction caisson seafloor penetration + mooring lines deployment", 0.0),
            (
                "op_M6",
                45,
                "Drag-embedment anchor seafloor penetration + mooring lines deployment",
                0.0,
            ),
            (
                "op_M7",
                46,
                "Direct-embedment anchor seafloor penetration through suction-embedment + mooring lines deployment",
                0.0,
            ),
            (
                "op_M8",
                47,
                "Direct-embedment anchor seafloor penetration through jetting-embedment + mooring lines deployment",
                0.0,
            ),
            (
                "op_M9",
                48,
                "Direct-embedment anchor seafloor penetration through mechanical-embedment + mooring lines deployment",
                0.0,
            ),
            ("op_D1", 50, "On-site positioning and connection of bottom-fixed device", 0.0),
            ("op_D2", 51, "On-site positioning and connection of floating device", 0.0),
            ("op_OM1", 60, "Inspection maintenance top side elements", 8.0),
            ("op_OM2", 61, "Inspection maintenance underwater divers", 8.0),
            ("op_OM3", 62, "Inspection maintenance underwater rovs", 8.0),
            ("op_OM4", 63, "Inspection maintenance near surface rovs", 8.0),
            ("op_OM5", 64, "Maintenance on mooring cable", 8.0),
            ("op_OM6", 65, "Maintenance on mooring anchor", 8.0),
            ("op_OM7", 66, "Maintenance on static non-buried power cables", 8.0),
            ("op_OM8", 67, "Maintenance on static buried power cables", 8.0),
            ("op_RT1", 71, "Retrieval of component at surface by on-deck transportation", 8.0),
            ("op_RT2", 72, "Retrieval of component from bottom by on-deck transportation", 8.0),
            ("op_RT3", 73, "Retrieval of component at surface by towing transportation", 8.0),
            ("op_RT4", 74, "Retrieval of component from bottom by towing transportation", 8.0),
            ("op_RT5", 75, "Retrieval of a mooring line", 8.0),
            ("op_RT6", 76, "Retrieval of umbilical cable", 8.0),
        ];
        let mut catalog = Self::new();
        for (key, id, description, duration_h) in entries {
            catalog.insert(key, Operation::standard(id, description, duration_h));
        }
        catalog
    }

    /// Registers an operation under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, operation: Operation) -> &mut Self {
        self.operations.insert(key.into(), Arc::new(operation));
        self
    }

    /// Resolves a symbolic key to its shared operation.
    pub fn get(&self, key: &str) -> Result<Arc<Operation>, MlogError> {
        self.operations.get(key).cloned().ok_or_else(|| {
            MlogError::SchemaMismatch(
                ErrorInfo::new("unknown-operation", "operation key is not registered")
                    .with_context("operation", key),
            )
        })
    }

    /// Returns the registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.operations.keys().map(String::as_str)
    }

    /// Returns the number of registered operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns true when the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
