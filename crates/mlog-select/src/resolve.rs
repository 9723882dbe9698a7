//! Compatibility resolver: turns surviving combinations into concrete solutions.

use std::collections::BTreeMap;

use mlog_core::errors::{ErrorInfo, MlogError};
use mlog_core::{
    CombinationIndex, ResourceKind, ResourceTypeId, RoleIndex, RowId, SolutionIndex, VariantIndex,
};
use mlog_phase::{CandidateView, CombinationOption, LogisticPhase, ResolvedPick, Solution};
use tracing::debug;

/// A role offered to a [`PickStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct RoleCandidates<'a> {
    /// Vessel or equipment role.
    pub kind: ResourceKind,
    /// Role index within its kind.
    pub role: RoleIndex,
    /// Role weight.
    pub weight: u32,
    /// Current candidate view of the role.
    pub view: &'a CandidateView,
}

impl RoleCandidates<'_> {
    /// Returns the resource type of the role.
    pub fn type_id(&self) -> &ResourceTypeId {
        self.view.type_id()
    }
}

/// Decides which rows are paired into solutions.
///
/// `pair` returns one entry per solution; each entry lists one row per role,
/// aligned with `roles` (vessel roles first, then equipment roles, each in
/// role-index order). Every row must come from the matching role's view.
pub trait PickStrategy {
    /// Pairs candidate rows into solutions.
    fn pair(&self, roles: &[RoleCandidates<'_>]) -> Vec<Vec<RowId>>;
}

/// Pairs the i-th row of every view into solution i, up to the shortest view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positional {
    /// Upper bound on solutions per combination.
    pub cap: Option<usize>,
}

impl Positional {
    /// Positional pairing capped at `cap` solutions per combination.
    pub fn capped(cap: usize) -> Self {
        Self { cap: Some(cap) }
    }
}

impl PickStrategy for Positional {
    fn pair(&self, roles: &[RoleCandidates<'_>]) -> Vec<Vec<RowId>> {
        let shortest = roles.iter().map(|role| role.view.len()).min().unwrap_or(0);
        let count = self.cap.map_or(shortest, |cap| shortest.min(cap));
        (0..count)
            .map(|position| {
                roles
                    .iter()
                    .map(|role| role.view.row_ids()[position])
                    .collect()
            })
            .collect()
    }
}

fn candidates(option: &CombinationOption) -> Vec<RoleCandidates<'_>> {
    [ResourceKind::Vessel, ResourceKind::Equipment]
        .into_iter()
        .flat_map(move |kind| {
            option.roles(kind).iter().map(move |(role, slot)| RoleCandidates {
                kind,
                role: *role,
                weight: slot.weight,
                view: &slot.view,
            })
        })
        .collect()
}

fn unknown_variant(phase: &LogisticPhase, variant: VariantIndex) -> MlogError {
    MlogError::SchemaMismatch(
        ErrorInfo::new("unknown-variant", "variant is not defined in the phase")
            .with_context("phase", phase.key())
            .with_context("variant", variant.to_string()),
    )
}

/// Resolves one combination and appends its solutions to the variant.
///
/// An empty role view yields no solution. Picks outside a role's view, or
/// pairings whose width differs from the role count, are schema mismatches.
pub fn resolve(
    phase: &mut LogisticPhase,
    variant_index: VariantIndex,
    combination_index: CombinationIndex,
    strategy: &dyn PickStrategy,
) -> Result<Vec<Solution>, MlogError> {
    let phase_key = phase.key().to_string();
    let variant = phase
        .variant(variant_index)
        .ok_or_else(|| unknown_variant(phase, variant_index))?;
    let option = variant.combination(combination_index).ok_or_else(|| {
        MlogError::SchemaMismatch(
            ErrorInfo::new("unknown-combination", "combination is not part of the variant")
                .with_context("phase", phase_key.clone())
                .with_context("variant", variant_index.to_string())
                .with_context("combination", combination_index.to_string()),
        )
    })?;

    let roles = candidates(option);
    let mut next = variant.next_solution_id().as_raw();
    let mut solutions = Vec::new();
    if roles.iter().all(|role| !role.view.is_empty()) {
        for pairing in strategy.pair(&roles) {
            if pairing.len() != roles.len() {
                return Err(MlogError::SchemaMismatch(
                    ErrorInfo::new("pick-arity", "pairing does not cover every role exactly once")
                        .with_context("expected", roles.len().to_string())
                        .with_context("actual", pairing.len().to_string()),
                ));
            }
            let mut solution = Solution::new(SolutionIndex::from_raw(next), combination_index);
            for (role, row) in roles.iter().zip(pairing) {
                if !role.view.contains(row) {
                    return Err(MlogError::SchemaMismatch(
                        ErrorInfo::new(
                            "pick-outside-view",
                            "picked row is not a candidate of the role",
                        )
                        .with_context("phase", phase_key.clone())
                        .with_context("kind", role.kind.label())
                        .with_context("role", role.role.to_string())
                        .with_context("row", row.to_string()),
                    ));
                }
                solution.picks_mut(role.kind).insert(
                    role.role,
                    ResolvedPick {
                        type_id: role.type_id().clone(),
                        row,
                    },
                );
            }
            next += 1;
            solutions.push(solution);
        }
    }

    debug!(
        phase = %phase_key,
        variant = %variant_index,
        combination = %combination_index,
        solutions = solutions.len(),
        "combination resolved"
    );
    if let Some(variant) = phase.variant_mut(variant_index) {
        for solution in &solutions {
            variant.insert_solution(solution.clone());
        }
    }
    Ok(solutions)
}

/// Replaces a variant's solutions with those of every surviving combination,
/// numbered from zero in combination order.
pub fn resolve_variant(
    phase: &mut LogisticPhase,
    variant_index: VariantIndex,
    strategy: &dyn PickStrategy,
) -> Result<Vec<Solution>, MlogError> {
    let indices: Vec<CombinationIndex> = phase
        .variant(variant_index)
        .ok_or_else(|| unknown_variant(phase, variant_index))?
        .combinations()
        .keys()
        .copied()
        .collect();
    if let Some(variant) = phase.variant_mut(variant_index) {
        variant.set_solutions(Vec::new());
    }
    let mut solutions = Vec::new();
    for combination_index in indices {
        solutions.extend(resolve(phase, variant_index, combination_index, strategy)?);
    }
    Ok(solutions)
}

/// Resolves every variant of the phase.
pub fn resolve_phase(
    phase: &mut LogisticPhase,
    strategy: &dyn PickStrategy,
) -> Result<BTreeMap<VariantIndex, Vec<Solution>>, MlogError> {
    let indices: Vec<VariantIndex> = phase.variants().keys().copied().collect();
    let mut resolved = BTreeMap::new();
    for variant_index in indices {
        let solutions = resolve_variant(phase, variant_index, strategy)?;
        resolved.insert(variant_index, solutions);
    }
    Ok(resolved)
}
