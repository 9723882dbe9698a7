//! Minimum-capability constraints handed over by requirement generators.

use indexmap::IndexMap;
use mlog_catalog::Attributed;
use mlog_core::{ResourceKind, ResourceTypeId};
use serde::{Deserialize, Serialize};

/// Comparison applied between a row attribute and a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    /// `value >= threshold`.
    #[serde(alias = "sup")]
    AtLeast,
    /// `value <= threshold`.
    #[serde(alias = "inf")]
    AtMost,
    /// `value == threshold`.
    Equals,
}

impl Comparator {
    /// Returns true when `value` passes against `threshold`.
    pub fn admits(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::AtLeast => value >= threshold,
            Comparator::AtMost => value <= threshold,
            Comparator::Equals => value == threshold,
        }
    }

    /// Returns the operator symbol used in logs.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparator::AtLeast => ">=",
            Comparator::AtMost => "<=",
            Comparator::Equals => "==",
        }
    }
}

/// A constraint on one named numeric attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequirementRepr")]
pub struct Requirement {
    /// Attribute (column) name.
    pub attribute: String,
    /// Comparison to apply.
    pub comparator: Comparator,
    /// Threshold value.
    pub threshold: f64,
}

// Generators emit `[attribute, comparator, threshold]` triples; the named
// form is what this crate writes back.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementRepr {
    Named {
        attribute: String,
        comparator: Comparator,
        threshold: f64,
    },
    Triple(String, Comparator, f64),
}

impl From<RequirementRepr> for Requirement {
    fn from(repr: RequirementRepr) -> Self {
        match repr {
            RequirementRepr::Named {
                attribute,
                comparator,
                threshold,
            }
            | RequirementRepr::Triple(attribute, comparator, threshold) => Self {
                attribute,
                comparator,
                threshold,
            },
        }
    }
}

impl Requirement {
    /// Creates a requirement.
    pub fn new(attribute: impl Into<String>, comparator: Comparator, threshold: f64) -> Self {
        Self {
            attribute: attribute.into(),
            comparator,
            threshold,
        }
    }

    /// `attribute >= threshold`.
    pub fn at_least(attribute: impl Into<String>, threshold: f64) -> Self {
        Self::new(attribute, Comparator::AtLeast, threshold)
    }

    /// `attribute <= threshold`.
    pub fn at_most(attribute: impl Into<String>, threshold: f64) -> Self {
        Self::new(attribute, Comparator::AtMost, threshold)
    }

    /// `attribute == threshold`.
    pub fn equals(attribute: impl Into<String>, threshold: f64) -> Self {
        Self::new(attribute, Comparator::Equals, threshold)
    }

    /// Returns true when `record` satisfies the requirement. A missing or
    /// non-numeric value never does.
    pub fn admits<R: Attributed + ?Sized>(&self, record: &R) -> bool {
        record
            .numeric(&self.attribute)
            .is_some_and(|value| self.comparator.admits(value, self.threshold))
    }
}

/// Requirements per resource type, in generator order.
pub type TypeRequirements = IndexMap<ResourceTypeId, Vec<Requirement>>;

/// Per-phase requirements for equipment and vessel types.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequirementSet {
    /// Equipment requirements keyed by equipment type.
    #[serde(default)]
    pub equipment: TypeRequirements,
    /// Vessel requirements keyed by vessel type.
    #[serde(default)]
    pub vessels: TypeRequirements,
}

impl RequirementSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the requirements targeting `kind`.
    pub fn for_kind(&self, kind: ResourceKind) -> &TypeRequirements {
        match kind {
            ResourceKind::Vessel => &self.vessels,
            ResourceKind::Equipment => &self.equipment,
        }
    }

    /// Appends a requirement for `type_id`.
    pub fn push(
        &mut self,
        kind: ResourceKind,
        type_id: ResourceTypeId,
        requirement: Requirement,
    ) -> &mut Self {
        let entries = match kind {
            ResourceKind::Vessel => &mut self.vessels,
            ResourceKind::Equipment => &mut self.equipment,
        };
        entries.entry(type_id).or_default().push(requirement);
        self
    }

    /// Builder-style variant of [`RequirementSet::push`].
    pub fn with(
        mut self,
        kind: ResourceKind,
        type_id: ResourceTypeId,
        requirement: Requirement,
    ) -> Self {
        self.push(kind, type_id, requirement);
        self
    }

    /// Returns the number of requirements across all types.
    pub fn len(&self) -> usize {
        self.equipment
            .values()
            .chain(self.vessels.values())
            .map(Vec::len)
            .sum()
    }

    /// Returns true when no requirement is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
