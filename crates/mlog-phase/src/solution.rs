//! Concrete role picks extracted from surviving combinations.

use std::collections::BTreeMap;

use mlog_core::{CombinationIndex, ResourceKind, ResourceTypeId, RoleIndex, RowId, SolutionIndex};
use serde::{Deserialize, Serialize};

/// One concrete unit chosen for a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPick {
    /// Resource type of the role.
    pub type_id: ResourceTypeId,
    /// Row of the type's table holding the chosen unit.
    pub row: RowId,
}

/// Fully specified operating configuration extracted from a combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Identifier within the owning variant.
    pub id: SolutionIndex,
    /// Combination the picks were drawn from.
    pub combination: CombinationIndex,
    /// Vessel unit per vessel role.
    #[serde(default)]
    pub vessel_picks: BTreeMap<RoleIndex, ResolvedPick>,
    /// Equipment unit per equipment role.
    #[serde(default)]
    pub equipment_picks: BTreeMap<RoleIndex, ResolvedPick>,
}

impl Solution {
    /// Creates a solution without picks.
    pub fn new(id: SolutionIndex, combination: CombinationIndex) -> Self {
        Self {
            id,
            combination,
            vessel_picks: BTreeMap::new(),
            equipment_picks: BTreeMap::new(),
        }
    }

    /// Returns the picks of `kind`.
    pub fn picks(&self, kind: ResourceKind) -> &BTreeMap<RoleIndex, ResolvedPick> {
        match kind {
            ResourceKind::Vessel => &self.vessel_picks,
            ResourceKind::Equipment => &self.equipment_picks,
        }
    }

    /// Returns the picks of `kind` for filling.
    pub fn picks_mut(&mut self, kind: ResourceKind) -> &mut BTreeMap<RoleIndex, ResolvedPick> {
        match kind {
            ResourceKind::Vessel => &mut self.vessel_picks,
            ResourceKind::Equipment => &mut self.equipment_picks,
        }
    }
}
