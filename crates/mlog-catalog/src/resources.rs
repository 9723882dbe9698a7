//! Vessel and equipment catalogs keyed by resource type.

use std::collections::BTreeMap;
use std::sync::Arc;

use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::{ResourceKind, ResourceTypeId};

use crate::table::ResourceTable;

/// Immutable vessel and equipment reference tables keyed by type.
///
/// Tables are shared through [`Arc`] so phase definitions can view them
/// without copying; nothing downstream mutates a catalog table.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    vessels: BTreeMap<ResourceTypeId, Arc<ResourceTable>>,
    equipment: BTreeMap<ResourceTypeId, Arc<ResourceTable>>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table under its own type identifier, replacing any previous one.
    pub fn insert(&mut self, kind: ResourceKind, table: ResourceTable) -> &mut Self {
        let tables = self.tables_mut(kind);
        tables.insert(table.type_id().clone(), Arc::new(table));
        self
    }

    /// Builder-style variant of [`ResourceCatalog::insert`].
    pub fn with(mut self, kind: ResourceKind, table: ResourceTable) -> Self {
        self.insert(kind, table);
        self
    }

    /// Resolves a type to its table.
    ///
    /// An unknown type is reported as a schema mismatch rather than a panic;
    /// phase definitions reference a few types that catalogs may not carry.
    pub fn table(
        &self,
        kind: ResourceKind,
        type_id: &ResourceTypeId,
    ) -> Result<Arc<ResourceTable>, MlogError> {
        self.tables(kind).get(type_id).cloned().ok_or_else(|| {
            MlogError::SchemaMismatch(
                ErrorInfo::new("unresolved-type", "resource type is not defined in the catalog")
                    .with_context("kind", kind.label())
                    .with_context("type_id", type_id.as_str()),
            )
        })
    }

    /// Returns the table for a type, if present.
    pub fn get(&self, kind: ResourceKind, type_id: &ResourceTypeId) -> Option<&Arc<ResourceTable>> {
        self.tables(kind).get(type_id)
    }

    /// Returns the type identifiers registered for `kind`, in sorted order.
    pub fn types(&self, kind: ResourceKind) -> impl Iterator<Item = &ResourceTypeId> + '_ {
        self.tables(kind).keys()
    }

    /// Returns the number of registered tables across both kinds.
    pub fn len(&self) -> usize {
        self.vessels.len() + self.equipment.len()
    }

    /// Returns true when no table is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn tables(&self, kind: ResourceKind) -> &BTreeMap<ResourceTypeId, Arc<ResourceTable>> {
        match kind {
            ResourceKind::Vessel => &self.vessels,
            ResourceKind::Equipment => &self.equipment,
        }
    }

    fn tables_mut(
        &mut self,
        kind: ResourceKind,
    ) -> &mut BTreeMap<ResourceTypeId, Arc<ResourceTable>> {
        match kind {
            ResourceKind::Vessel => &mut self.vessels,
            ResourceKind::Equipment => &mut self.equipment,
        }
    }
}
