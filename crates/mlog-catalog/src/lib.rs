#![deny(missing_docs)]
#![doc = "Immutable vessel, equipment, port and operation catalogs consumed by the selection engine."]

pub mod document;
pub mod operations;
pub mod ports;
pub mod resources;
pub mod table;

pub use document::{load_catalogs, CatalogDocument, Catalogs, PortCatalogDocument, TableDocument};
pub use operations::{Operation, OperationCatalog};
pub use ports::{Coordinates, PortCatalog, PortRecord, LOAD_BEARING, TERMINAL_AREA};
pub use resources::ResourceCatalog;
pub use table::{
    AttributeKind, AttributeValue, Attributed, Column, ResourceRow, ResourceTable, Schema,
    TableBuilder,
};
