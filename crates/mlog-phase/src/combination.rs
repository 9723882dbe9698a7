//! Combinations and their weighted roles.

use std::collections::BTreeMap;

use mlog_core::{ResourceKind, ResourceTypeId, RoleIndex};

use crate::view::CandidateView;

/// A role of a combination: a weighted slot filled from one resource type.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleSlot {
    /// Role weight (1 for the primary unit, 2 for a supporting unit).
    pub weight: u32,
    /// Current candidate subset for the role.
    pub view: CandidateView,
}

impl RoleSlot {
    /// Returns the resource type filling the role.
    pub fn type_id(&self) -> &ResourceTypeId {
        self.view.type_id()
    }
}

/// An alternative grouping of vessel and equipment roles able to execute a variant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CombinationOption {
    vessels: BTreeMap<RoleIndex, RoleSlot>,
    equipment: BTreeMap<RoleIndex, RoleSlot>,
}

impl CombinationOption {
    /// Creates a combination without roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a role of `kind`, keyed by the next free role index of that kind.
    pub fn with_role(mut self, kind: ResourceKind, weight: u32, view: CandidateView) -> Self {
        self.push_role(kind, weight, view);
        self
    }

    /// Appends a role of `kind` and returns its index.
    pub fn push_role(&mut self, kind: ResourceKind, weight: u32, view: CandidateView) -> RoleIndex {
        let roles = self.roles_mut(kind);
        let index = RoleIndex::from_raw(roles.len() as u32);
        roles.insert(index, RoleSlot { weight, view });
        index
    }

    /// Returns the roles of `kind`.
    pub fn roles(&self, kind: ResourceKind) -> &BTreeMap<RoleIndex, RoleSlot> {
        match kind {
            ResourceKind::Vessel => &self.vessels,
            ResourceKind::Equipment => &self.equipment,
        }
    }

    /// Returns the roles of `kind` for narrowing.
    pub fn roles_mut(&mut self, kind: ResourceKind) -> &mut BTreeMap<RoleIndex, RoleSlot> {
        match kind {
            ResourceKind::Vessel => &mut self.vessels,
            ResourceKind::Equipment => &mut self.equipment,
        }
    }

    /// Looks up a single role.
    pub fn role(&self, kind: ResourceKind, index: RoleIndex) -> Option<&RoleSlot> {
        self.roles(kind).get(&index)
    }

    /// Returns the first role whose view is empty, if any.
    pub fn empty_role(&self) -> Option<(ResourceKind, RoleIndex)> {
        [ResourceKind::Vessel, ResourceKind::Equipment]
            .into_iter()
            .find_map(|kind| {
                self.roles(kind)
                    .iter()
                    .find(|(_, slot)| slot.view.is_empty())
                    .map(|(index, _)| (kind, *index))
            })
    }

    /// Returns true when any role has no candidate left.
    pub fn has_empty_role(&self) -> bool {
        self.empty_role().is_some()
    }

    /// Returns the total number of roles across both kinds.
    pub fn role_count(&self) -> usize {
        self.vessels.len() + self.equipment.len()
    }
}
