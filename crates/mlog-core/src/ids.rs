//! Typed identifiers used across catalogs, phases and solutions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, MlogError};

macro_rules! raw_id {
    ($(#[$meta:meta])* $name:ident($raw:ty)) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($raw);

        impl $name {
            /// Creates a new identifier from its raw integer representation.
            pub const fn from_raw(raw: $raw) -> Self {
                Self(raw)
            }

            /// Returns the raw integer representation of the identifier.
            pub const fn as_raw(&self) -> $raw {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

raw_id!(
    /// Numeric identifier of an atomic logistic operation.
    OperationId(u32)
);
raw_id!(
    /// Numeric identifier of a logistic phase (1xx installation, 9xx O&M).
    PhaseId(u32)
);
raw_id!(
    /// Stable identifier of a candidate unit within a resource table.
    RowId(u64)
);
raw_id!(
    /// Key of an operation-sequence variant within a phase.
    VariantIndex(u32)
);
raw_id!(
    /// Key of a combination within a variant.
    CombinationIndex(u32)
);
raw_id!(
    /// Key of a role slot within a combination.
    RoleIndex(u32)
);
raw_id!(
    /// Key of a resolved solution within a variant.
    SolutionIndex(u32)
);

/// Validated identifier of a vessel, equipment or port type (e.g. "Crane Barge").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceTypeId(String);

impl ResourceTypeId {
    /// Creates a type identifier, trimming surrounding whitespace.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, MlogError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MlogError::Config(
                ErrorInfo::new("empty-type-id", "resource type identifier cannot be empty")
                    .with_hint("use the catalog name of the vessel or equipment type"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceTypeId {
    type Error = MlogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResourceTypeId> for String {
    fn from(value: ResourceTypeId) -> Self {
        value.0
    }
}

impl fmt::Display for ResourceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinguishes the two resource catalogs a role can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Vessel roles (barges, tugs, crane vessels, helicopters).
    Vessel,
    /// Equipment roles (hammers, drill rigs, ROVs, divers).
    Equipment,
}

impl ResourceKind {
    /// Returns the lowercase label used in logs and error context.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Vessel => "vessel",
            ResourceKind::Equipment => "equipment",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
