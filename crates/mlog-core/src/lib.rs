#![deny(missing_docs)]
#![doc = "Core identifiers, structured errors and serde helpers for the marine logistics selection engine."]

pub mod errors;
pub mod hash;
pub mod ids;
pub mod provenance;
pub mod serde;

pub use errors::{ErrorInfo, MlogError};
pub use hash::stable_hash_string;
pub use ids::{
    CombinationIndex, OperationId, PhaseId, ResourceKind, ResourceTypeId, RoleIndex, RowId,
    SolutionIndex, VariantIndex,
};
pub use provenance::{RunProvenance, SchemaVersion};
