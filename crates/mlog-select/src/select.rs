//! Selection engine: narrows role views against a requirement set and prunes
//! combinations left without candidates.
//!
//! A pass is transactional with respect to schema errors. Every requirement
//! that reaches a role is checked against the role's schema before any view
//! is touched, so a [`MlogError::SchemaMismatch`] leaves the phase unchanged.

use indexmap::IndexMap;
use mlog_core::errors::MlogError;
use mlog_core::{CombinationIndex, ResourceKind, ResourceTypeId, RoleIndex, VariantIndex};
use mlog_phase::{CandidateView, LogisticPhase};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::filter::{check_requirements, narrow_view};
use crate::requirement::{RequirementSet, TypeRequirements};

/// Non-fatal condition observed during selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "note", rename_all = "snake_case")]
pub enum SelectionNote {
    /// A requirement targets a type no role of the phase uses.
    EmptyRequirementTarget {
        /// Catalog the type belongs to.
        kind: ResourceKind,
        /// Type named by the requirement.
        type_id: ResourceTypeId,
    },
}

/// A combination removed because one of its roles ran out of candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrunedCombination {
    /// Variant the combination belonged to.
    pub variant: VariantIndex,
    /// Index of the removed combination.
    pub combination: CombinationIndex,
    /// Kind of the emptied role.
    pub kind: ResourceKind,
    /// Index of the emptied role.
    pub role: RoleIndex,
    /// Type of the emptied role.
    pub type_id: ResourceTypeId,
}

/// Result of one or more selection passes.
#[derive(Debug, Clone, Default)]
pub struct SelectionOutcome {
    /// Narrowed view per type; the last role narrowed for a type wins.
    pub feasible: IndexMap<ResourceTypeId, CandidateView>,
    /// Combinations removed, in removal order.
    pub pruned: Vec<PrunedCombination>,
    /// Diagnostics that did not affect the phase.
    pub notes: Vec<SelectionNote>,
    /// Variants whose last combination was removed.
    pub infeasible_variants: Vec<VariantIndex>,
}

impl SelectionOutcome {
    /// Folds a later pass into this outcome.
    pub fn merge(&mut self, later: SelectionOutcome) {
        self.feasible.extend(later.feasible);
        self.pruned.extend(later.pruned);
        self.notes.extend(later.notes);
        for variant in later.infeasible_variants {
            if !self.infeasible_variants.contains(&variant) {
                self.infeasible_variants.push(variant);
            }
        }
    }
}

/// Narrows every role of `kind` whose type carries requirements, removing
/// the combinations in which a role ends up empty.
///
/// Types without a matching role are recorded as
/// [`SelectionNote::EmptyRequirementTarget`].
pub fn select(
    requirements: &RequirementSet,
    phase: &mut LogisticPhase,
    kind: ResourceKind,
) -> Result<SelectionOutcome, MlogError> {
    let targets = requirements.for_kind(kind);
    validate(targets, phase, kind)?;

    let phase_key = phase.key().to_string();
    let mut outcome = SelectionOutcome::default();
    for (type_id, type_requirements) in targets {
        let mut matched = false;
        for (variant_index, variant) in phase.variants_mut().iter_mut() {
            let had_combinations = !variant.combinations().is_empty();
            let indices: Vec<CombinationIndex> = variant.combinations().keys().copied().collect();
            let mut doomed = Vec::new();
            for combination_index in indices {
                let Some(option) = variant.combination_mut(combination_index) else {
                    continue;
                };
                for (role_index, slot) in option.roles_mut(kind).iter_mut() {
                    if slot.type_id() != type_id {
                        continue;
                    }
                    matched = true;
                    let keep = narrow_view(&slot.view, type_requirements);
                    if keep.is_empty() {
                        doomed.push((combination_index, *role_index));
                        break;
                    }
                    slot.view.restrict(&keep);
                    outcome.feasible.insert(type_id.clone(), slot.view.clone());
                }
            }
            for (combination_index, role_index) in doomed {
                variant.remove_combination(combination_index);
                debug!(
                    phase = %phase_key,
                    variant = %variant_index,
                    combination = %combination_index,
                    kind = %kind,
                    type_id = %type_id,
                    "combination pruned"
                );
                outcome.pruned.push(PrunedCombination {
                    variant: *variant_index,
                    combination: combination_index,
                    kind,
                    role: role_index,
                    type_id: type_id.clone(),
                });
            }
            if had_combinations && variant.combinations().is_empty() {
                warn!(
                    phase = %phase_key,
                    variant = %variant.label(),
                    "infeasible under current requirements"
                );
                outcome.infeasible_variants.push(*variant_index);
            }
        }
        if !matched {
            debug!(
                phase = %phase_key,
                kind = %kind,
                type_id = %type_id,
                "requirement target not used by phase"
            );
            outcome.notes.push(SelectionNote::EmptyRequirementTarget {
                kind,
                type_id: type_id.clone(),
            });
        }
    }
    Ok(outcome)
}

/// Runs [`select`] for each kind of `order`, merging the outcomes.
pub fn select_in_order(
    requirements: &RequirementSet,
    phase: &mut LogisticPhase,
    order: &[ResourceKind],
) -> Result<SelectionOutcome, MlogError> {
    let mut outcome = SelectionOutcome::default();
    for kind in order {
        outcome.merge(select(requirements, phase, *kind)?);
    }
    Ok(outcome)
}

/// Equipment selection followed by vessel selection.
pub fn select_all(
    requirements: &RequirementSet,
    phase: &mut LogisticPhase,
) -> Result<SelectionOutcome, MlogError> {
    select_in_order(
        requirements,
        phase,
        &[ResourceKind::Equipment, ResourceKind::Vessel],
    )
}

fn validate(
    targets: &TypeRequirements,
    phase: &LogisticPhase,
    kind: ResourceKind,
) -> Result<(), MlogError> {
    for (type_id, type_requirements) in targets {
        for (variant_index, variant) in phase.variants() {
            for (combination_index, option) in variant.combinations() {
                for slot in option.roles(kind).values() {
                    if slot.type_id() != type_id {
                        continue;
                    }
                    check_requirements(slot.view.schema(), type_id.as_str(), type_requirements)
                        .map_err(|err| {
                            err.with_context("phase", phase.key())
                                .with_context("variant", variant_index.to_string())
                                .with_context("combination", combination_index.to_string())
                        })?;
                }
            }
        }
    }
    Ok(())
}
