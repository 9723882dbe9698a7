//! Serializable catalog documents.
//!
//! Catalog acquisition happens upstream; this module only defines the JSON /
//! YAML shape handed to the engine and validates it into immutable tables.

use std::collections::BTreeMap;
use std::path::Path;

use mlog_core::errors::MlogError;
use mlog_core::serde::read_document;
use mlog_core::{ResourceKind, ResourceTypeId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ports::{PortCatalog, PortRecord};
use crate::resources::ResourceCatalog;
use crate::table::{AttributeValue, Column, ResourceTable, Schema};

/// Serialized form of one resource table. Row identifiers follow row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDocument {
    /// Vessel or equipment type name.
    pub type_id: ResourceTypeId,
    /// Column declarations.
    pub columns: Vec<Column>,
    /// Candidate units, one map of attribute values per row.
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, AttributeValue>>,
}

impl TableDocument {
    /// Validates the document into a [`ResourceTable`].
    pub fn into_table(self) -> Result<ResourceTable, MlogError> {
        let schema = Schema::new(self.columns)?;
        let mut builder = ResourceTable::builder(self.type_id, schema);
        for row in self.rows {
            builder.push_row(row)?;
        }
        Ok(builder.build())
    }

    /// Captures an existing table as a document.
    pub fn from_table(table: &ResourceTable) -> Self {
        Self {
            type_id: table.type_id().clone(),
            columns: table.schema().columns().to_vec(),
            rows: table.rows().iter().map(|row| row.values().clone()).collect(),
        }
    }
}

/// Serialized form of the port registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortCatalogDocument {
    /// Column declarations shared by all ports.
    pub columns: Vec<Column>,
    /// Port entries.
    #[serde(default)]
    pub ports: Vec<PortRecord>,
}

impl PortCatalogDocument {
    /// Validates the document into a [`PortCatalog`].
    pub fn into_catalog(self) -> Result<PortCatalog, MlogError> {
        PortCatalog::new(Schema::new(self.columns)?, self.ports)
    }
}

/// Complete catalog payload: vessel tables, equipment tables and ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogDocument {
    /// Vessel tables.
    #[serde(default)]
    pub vessels: Vec<TableDocument>,
    /// Equipment tables.
    #[serde(default)]
    pub equipment: Vec<TableDocument>,
    /// Optional port registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<PortCatalogDocument>,
}

/// Catalogs built from a [`CatalogDocument`].
#[derive(Debug, Clone)]
pub struct Catalogs {
    /// Vessel and equipment tables.
    pub resources: ResourceCatalog,
    /// Port registry, when the document carried one.
    pub ports: Option<PortCatalog>,
}

impl CatalogDocument {
    /// Validates every table and the port registry.
    pub fn into_catalogs(self) -> Result<Catalogs, MlogError> {
        let mut resources = ResourceCatalog::new();
        for table in self.vessels {
            resources.insert(ResourceKind::Vessel, table.into_table()?);
        }
        for table in self.equipment {
            resources.insert(ResourceKind::Equipment, table.into_table()?);
        }
        let ports = self.ports.map(PortCatalogDocument::into_catalog).transpose()?;
        Ok(Catalogs { resources, ports })
    }
}

/// Loads and validates a catalog document from a `.json` or YAML file.
pub fn load_catalogs(path: &Path) -> Result<Catalogs, MlogError> {
    let document: CatalogDocument = read_document(path)?;
    let catalogs = document.into_catalogs()?;
    info!(
        path = %path.display(),
        tables = catalogs.resources.len(),
        ports = catalogs.ports.as_ref().map_or(0, PortCatalog::len),
        "catalog loaded"
    );
    Ok(catalogs)
}
